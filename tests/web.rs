//! Browser tests: run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use svworldz::models::SiteContent;
use svworldz::{App, Site};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_app() -> web_sys::HtmlElement {
    let root = mount_root();
    mount_to(root.clone(), App).forget();
    root
}

fn mount_root() -> web_sys::HtmlElement {
    let root = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn dispatch(target: &web_sys::Element, event_type: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict(event_type, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

#[wasm_bindgen_test]
fn test_initial_render_is_home_personal() {
    let root = mount_app();
    assert!(root.query_selector("#videos").unwrap().is_some());
    assert!(root.query_selector("#contact form").unwrap().is_some());
    assert!(root.query_selector("input[name='name']").unwrap().is_some());
    assert!(root.query_selector("textarea[name='message']").unwrap().is_some());
    assert!(
        root.query_selector("input[name='organization']")
            .unwrap()
            .is_none()
    );
}

#[wasm_bindgen_test]
fn test_ticker_renders_sponsors_twice() {
    let root = mount_app();
    let logos = root.query_selector_all("#sponsors img").unwrap();
    assert_eq!(logos.length(), 10);
}

#[wasm_bindgen_test]
fn test_submit_does_not_navigate() {
    let root = mount_app();
    let form = root.query_selector("form").unwrap().unwrap();
    let event = dispatch(&form, "submit");
    assert!(event.default_prevented());
}

/// Let pending reactive updates reach the DOM.
async fn settle() {
    gloo_timers::future::TimeoutFuture::new(0).await;
}

fn click(root: &web_sys::HtmlElement, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

fn has_organization(root: &web_sys::HtmlElement) -> bool {
    root.query_selector("input[name='organization']")
        .unwrap()
        .is_some()
}

#[wasm_bindgen_test]
async fn test_contact_type_toggles_organization_field() {
    let root = mount_app();
    assert!(!has_organization(&root));

    click(&root, "input[value='business']");
    settle().await;
    assert!(has_organization(&root));

    let form = root.query_selector("form").unwrap().unwrap();
    assert!(dispatch(&form, "submit").default_prevented());

    click(&root, "input[value='personal']");
    settle().await;
    assert!(!has_organization(&root));
    assert!(dispatch(&form, "submit").default_prevented());
}

#[wasm_bindgen_test]
async fn test_toggle_keeps_typed_values() {
    let root = mount_app();
    let name = root
        .query_selector("input[name='name']")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlInputElement>();
    name.set_value("Ada");

    click(&root, "input[value='business']");
    settle().await;

    let name = root
        .query_selector("input[name='name']")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlInputElement>();
    assert_eq!(name.value(), "Ada");
}

#[wasm_bindgen_test]
async fn test_invalid_content_shows_error_panel() {
    let root = mount_root();
    let content = SiteContent::parse("[brand\nname = ");
    mount_to(root.clone(), move || view! { <Site content=content /> }).forget();
    settle().await;

    assert!(root.query_selector("main").unwrap().is_none());
    let errors = root.query_selector_all("li").unwrap();
    assert_eq!(errors.length(), 1);
    let button = root.query_selector("button").unwrap().unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Reload Page"));
}
