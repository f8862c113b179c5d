//! Stateless presentational building blocks.
//!
//! - [`GoldText`] / [`HeadingText`] - Gold accent text and section titles
//! - [`VideoCard`] - Media card for the video gallery
//! - [`StatCounter`] - Literal label/value pair
//! - [`Floating`] - Perpetually rising/settling wrapper
//! - [`Reveal`] - One-shot delayed entry animation
//! - [`ActionButton`] - Link or placeholder button from content

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::FLOAT_PERIOD_MS;
use crate::models::{Action, Heading, MediaCard};
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/primitives.module.css");

/// Text with the gold gradient accent.
#[component]
pub fn GoldText(children: Children) -> impl IntoView {
    view! { <span class=css::gold>{children()}</span> }
}

/// Inline content of a section title: `{lead} {accent}{trail}`.
///
/// The accent is rendered with [`GoldText`] unless `plain_accent` is set,
/// in which case it gets the given class instead.
#[component]
pub fn HeadingText(
    heading: Heading,
    #[prop(optional)] plain_accent: Option<&'static str>,
) -> impl IntoView {
    let Heading {
        lead,
        accent,
        trail,
    } = heading;

    let accent = (!accent.is_empty()).then(move || match plain_accent {
        Some(class) => view! { " " <span class=class>{accent}</span> }.into_any(),
        None => view! { " " <GoldText>{accent}</GoldText> }.into_any(),
    });

    view! { {lead}{accent}{trail} }
}

/// Video gallery card.
#[component]
pub fn VideoCard(card: MediaCard) -> impl IntoView {
    let MediaCard {
        title,
        thumbnail,
        caption,
        ..
    } = card;
    let alt = title.clone();

    view! {
        <div class=css::card>
            <img src=thumbnail alt=alt class=css::cardImage />
            <div class=css::cardOverlay>
                <h3 class=css::cardTitle>{title}</h3>
                <p class=css::cardCaption>{caption}</p>
            </div>
        </div>
    }
}

/// Label/value statistic. The value is displayed as given.
#[component]
pub fn StatCounter(label: String, value: String) -> impl IntoView {
    view! {
        <div class=css::stat>
            <div class=css::statValue>{value}</div>
            <div class=css::statLabel>{label}</div>
        </div>
    }
}

/// Wrapper that rises into place and settles back, forever.
#[component]
pub fn Floating(children: Children) -> impl IntoView {
    let style = format!("animation-duration: {}ms", FLOAT_PERIOD_MS);
    view! { <div class=css::floating style=style>{children()}</div> }
}

/// Wrapper that fades and slides in once after `delay_ms`.
///
/// `offset` is the starting vertical offset in pixels (negative is above).
#[component]
pub fn Reveal(delay_ms: u32, offset: i32, children: Children) -> impl IntoView {
    let style = format!(
        "animation-delay: {}ms; --reveal-offset: {}px",
        delay_ms, offset
    );
    view! { <div class=css::reveal style=style>{children()}</div> }
}

/// Content action: a link when it has an `href`, otherwise a button that
/// only logs the click.
#[component]
pub fn ActionButton(action: Action, class: &'static str) -> impl IntoView {
    let Action { label, href, icon } = action;
    let icon = icon.map(|name| {
        view! { <span class=css::actionIcon><Icon icon=ic::for_name(name) /></span> }
    });

    match href {
        Some(href) => view! {
            <a href=href class=class>{icon}{label}</a>
        }
        .into_any(),
        None => {
            let clicked = format!("{} clicked", label);
            view! {
                <button
                    type="button"
                    class=class
                    on:click=move |_| console::log(&clicked)
                >
                    {icon}{label}
                </button>
            }
            .into_any()
        }
    }
}
