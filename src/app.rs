//! Root application module.
//!
//! Loads the embedded site content and renders the [`Shell`] inside an
//! error boundary. Invalid content is reported in the fallback panel
//! instead of panicking.

use leptos::prelude::*;

use crate::components::Shell;
use crate::core::ContentError;
use crate::models::SiteContent;
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/app.module.css");

/// Root component rendering the embedded site content.
#[component]
pub fn App() -> impl IntoView {
    view! { <Site content=SiteContent::embedded() /> }
}

/// The site shell, or an error panel if the content failed to load.
#[component]
pub fn Site(content: Result<SiteContent, ContentError>) -> impl IntoView {
    let shell = content
        .inspect_err(|e| console::error(&format!("Failed to load site content: {}", e)))
        .map(|content| view! { <Shell content=content /> });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::title>"Something went wrong"</h1>
                    <ul class=css::errors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button class=css::reload on:click=|_| dom::reload()>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            {shell}
        </ErrorBoundary>
    }
}
