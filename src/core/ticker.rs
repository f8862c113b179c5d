//! Sponsor ticker track construction.

use crate::config::SPONSOR_CYCLE_SECS;
use crate::models::{SponsorEntry, TickerTrack};

/// Sponsor sequence rendered by the ticker: the list, then the list again.
pub fn looped(sponsors: &[SponsorEntry]) -> Vec<SponsorEntry> {
    sponsors.iter().chain(sponsors).cloned().collect()
}

/// Build the ticker track for a sponsor list.
pub fn track(sponsors: &[SponsorEntry]) -> TickerTrack {
    TickerTrack {
        items: looped(sponsors),
        cycle_secs: SPONSOR_CYCLE_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sponsors(n: usize) -> Vec<SponsorEntry> {
        (1..=n)
            .map(|i| SponsorEntry {
                name: format!("Sponsor {}", i),
                image: format!("https://via.placeholder.com/200x100.png?text=Sponsor+{}", i),
            })
            .collect()
    }

    #[test]
    fn test_length_is_doubled() {
        for n in 1..=7 {
            assert_eq!(looped(&sponsors(n)).len(), 2 * n);
        }
    }

    #[test]
    fn test_list_then_list_order() {
        let list = sponsors(5);
        let items = looped(&list);
        assert_eq!(&items[..5], &list[..]);
        assert_eq!(&items[5..], &list[..]);
    }

    #[test]
    fn test_single_sponsor() {
        let list = sponsors(1);
        assert_eq!(looped(&list), vec![list[0].clone(), list[0].clone()]);
    }

    #[test]
    fn test_track_cycle() {
        let track = track(&sponsors(3));
        assert_eq!(track.cycle_secs, SPONSOR_CYCLE_SECS);
        assert_eq!(track.items.len(), 6);
    }
}
