//! Sponsor ticker.
//!
//! The track holds the sponsor list twice; the CSS animation translates it
//! left by half its width per cycle, so the second copy lands exactly where
//! the first one started and the loop has no visible seam.

use leptos::prelude::*;

use crate::models::TickerTrack;

stylance::import_crate_style!(css, "src/components/ticker.module.css");

#[component]
pub fn SponsorTicker(track: TickerTrack) -> impl IntoView {
    let style = format!("animation-duration: {}s", track.cycle_secs);

    view! {
        <div class=css::viewport>
            <div class=css::track style=style>
                {track
                    .items
                    .into_iter()
                    .map(|sponsor| {
                        view! {
                            <div class=css::item>
                                <img src=sponsor.image alt=sponsor.name class=css::logo />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
