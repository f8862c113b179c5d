//! Contact form.
//!
//! Fields come from the composed [`ContactForm`]; switching the contact type
//! adds or removes the organization field while keyed rendering keeps the
//! other inputs (and what the visitor typed) in place.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::{ConsoleTransport, SubmitError, handle_submit};
use crate::models::{ContactForm, ContactType, FieldKind, FormField};
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/contact.module.css");

#[component]
pub fn ContactFormView(
    form: Memo<ContactForm>,
    on_select_contact_type: Callback<ContactType>,
) -> impl IntoView {
    let selected = Memo::new(move |_| form.with(|f| f.contact_type));
    let inline_fields = Memo::new(move |_| {
        form.with(|f| f.fields.iter().filter(|field| field.is_inline()).cloned().collect::<Vec<_>>())
    });
    let block_fields = Memo::new(move |_| {
        form.with(|f| f.fields.iter().filter(|field| !field.is_inline()).cloned().collect::<Vec<_>>())
    });
    let submit_label = move || form.with(|f| f.submit_label.clone());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(data) = dom::form_data(&ev) else {
            console::error(&SubmitError::FormUnavailable.to_string());
            return;
        };
        match handle_submit(&ConsoleTransport, |name| dom::form_value(&data, name)) {
            Ok(submission) => console::log(&format!("Contact form sent for {}", submission.email)),
            Err(e) => console::warn(&format!("Contact form not sent: {}", e)),
        }
    };

    let render_field = move |field: FormField| {
        view! { <Field field=field selected=selected on_select_contact_type=on_select_contact_type /> }
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <div class=css::row>
                <For each=move || inline_fields.get() key=|field| field.name children=render_field />
            </div>
            <For each=move || block_fields.get() key=|field| field.name children=render_field />
            <button type="submit" class=css::submit>
                {submit_label}
            </button>
        </form>
    }
}

#[component]
fn Field(
    field: FormField,
    selected: Memo<ContactType>,
    on_select_contact_type: Callback<ContactType>,
) -> impl IntoView {
    let FormField {
        name,
        label,
        kind,
        required,
    } = field;

    match kind {
        FieldKind::Text | FieldKind::Email => {
            let input_type = if kind == FieldKind::Email {
                "email"
            } else {
                "text"
            };
            view! {
                <div>
                    <label for=name class=css::label>{label}</label>
                    <input type=input_type id=name name=name class=css::input required=required />
                </div>
            }
            .into_any()
        }
        FieldKind::TextArea { rows } => view! {
            <div>
                <label for=name class=css::label>{label}</label>
                <textarea
                    id=name
                    name=name
                    rows=rows.to_string()
                    class=css::input
                    required=required
                ></textarea>
            </div>
        }
        .into_any(),
        FieldKind::ContactType => view! {
            <div>
                <span class=css::label>{label}</span>
                <div class=css::choices>
                    {ContactType::ALL
                        .into_iter()
                        .map(|ty| {
                            view! {
                                <label class=css::choice>
                                    <input
                                        type="radio"
                                        name=name
                                        value=ty.as_value()
                                        class=css::radio
                                        required=required
                                        prop:checked=move || selected.get() == ty
                                        on:change=move |_| on_select_contact_type.run(ty)
                                    />
                                    <span>{ty.label()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}
