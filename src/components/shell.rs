//! Root shell.
//!
//! Owns the [`ViewState`] and composes header, page and footer. Children get
//! read-only signals plus callbacks for the two state transitions; there is
//! no other mutable state in the site.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::page::PageView;
use crate::core::compose;
use crate::models::{ContactType, Page, SiteContent, ViewState};

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell(content: SiteContent) -> impl IntoView {
    let view_state = RwSignal::new(ViewState::default());

    let on_select_page = Callback::new(move |page: Page| {
        view_state.update(|state| state.select_page(page));
    });
    let on_select_contact_type = Callback::new(move |contact_type: ContactType| {
        view_state.update(|state| state.select_contact_type(contact_type));
    });
    let active_page = Signal::derive(move || view_state.with(|state| state.active_page));

    let footer = content.footer.clone();
    let content = StoredValue::new(content);
    let tree = Memo::new(move |_| {
        let state = view_state.get();
        content.with_value(|content| compose(&state, content))
    });

    view! {
        <div class=css::shell>
            <Header active_page=active_page on_select_page=on_select_page />
            <main class=css::main>
                <PageView tree=tree on_select_contact_type=on_select_contact_type />
            </main>
            <Footer content=footer />
        </div>
    }
}
