//! Site header.
//!
//! Brand, page links, same-page anchors and the subscribe button. Page links
//! change the view state only; anchors are plain scroll targets.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::primitives::GoldText;
use crate::config::{APP_NAME, DESKTOP_QUERY, NAV_ANCHORS};
use crate::models::Page;
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Sticky header with navigation.
///
/// Navigation links are shown only on desktop-width viewports.
#[component]
pub fn Header(active_page: Signal<Page>, on_select_page: Callback<Page>) -> impl IntoView {
    let is_desktop = use_media_query(DESKTOP_QUERY.to_string());

    let on_subscribe = move |_: leptos::ev::MouseEvent| {
        console::log("Subscribe clicked");
    };

    view! {
        <header class=css::header>
            <nav class=css::nav>
                <a href="#" class=css::brand>
                    <GoldText>{APP_NAME}</GoldText>
                </a>

                <Show when=move || is_desktop.get()>
                    <div class=css::links>
                        <PageLink page=Page::Home active_page=active_page on_select_page=on_select_page />
                        <PageLink page=Page::About active_page=active_page on_select_page=on_select_page />
                        {NAV_ANCHORS
                            .iter()
                            .map(|(label, anchor)| {
                                view! {
                                    <a href=format!("#{}", anchor) class=css::link>{*label}</a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <button type="button" class=css::subscribe on:click=on_subscribe>
                    "Subscribe"
                </button>
            </nav>
        </header>
    }
}

/// Link that selects a page instead of navigating.
#[component]
fn PageLink(page: Page, active_page: Signal<Page>, on_select_page: Callback<Page>) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        on_select_page.run(page);
        dom::scroll_to_top();
    };

    let class = move || {
        if active_page.get() == page {
            format!("{} {}", css::link, css::linkActive)
        } else {
            css::link.to_string()
        }
    };

    view! {
        <a href="#" class=class on:click=on_click>
            {page.label()}
        </a>
    }
}
