//! Add Contact Form Component
//!
//! Owns the add-contact draft: field edits, validation gate, create
//! call, and optimistic append into the contact store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::GenderSelector;
use crate::context::use_app_context;
use crate::models::ContactDraft;
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::store::{store_add_contact, use_app_store};
use crate::validate::{self, FieldErrors, CONTACT_FIELDS};

#[component]
pub fn AddContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notify = use_notifier();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    let (draft, set_draft) = signal(ContactDraft::empty(session.user_id().unwrap_or_default()));
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let reset_draft = move || {
        set_draft.set(ContactDraft::empty(session.user_id().unwrap_or_default()));
        set_errors.set(FieldErrors::default());
    };

    // Parent bumps refresh_form to force the draft back to empty after a
    // sibling operation completes.
    Effect::new(move |_| {
        let _ = ctx.refresh_form.get();
        reset_draft();
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let checked = validate::check(&current, CONTACT_FIELDS);
        if !checked.is_empty() {
            if let Some(message) = checked.first_message() {
                notify.error(message.to_string());
            }
            set_errors.set(checked);
            return;
        }
        let Some(payload) = current.to_new_contact() else { return };
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            match api.create_contact(&payload).await {
                Ok(created) => {
                    web_sys::console::log_1(
                        &format!("[CONTACTS] Created contact {}", created.id).into(),
                    );
                    store_add_contact(&store, created);
                    notify.success("Contact added successfully!");
                    reset_draft();
                }
                Err(err) => notify.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="contact-form add-contact">
            <div class="contact-form-header">
                <h3>"Add New Contact"</h3>
                <div class="contact-form-actions">
                    <button
                        type="button"
                        disabled=move || submitting.get()
                        on:click=move |_| reset_draft()
                    >
                        "Clear"
                    </button>
                </div>
            </div>

            <form on:submit=on_submit>
                <label for="contact_name">"Name"</label>
                <input
                    type="text"
                    id="contact_name"
                    placeholder="John Doe"
                    prop:value=move || draft.get().contact_name
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_name = event_target_value(&ev));
                        set_errors.update(|e| e.clear("contact_name"));
                    }
                />
                {move || errors.get().get("contact_name").map(|msg| view! {
                    <p class="field-error">{msg.to_string()}</p>
                })}

                <label for="contact_phone">"Phone"</label>
                <input
                    type="tel"
                    id="contact_phone"
                    placeholder="5551234567"
                    prop:value=move || draft.get().contact_phone
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_phone = event_target_value(&ev));
                        set_errors.update(|e| e.clear("contact_phone"));
                    }
                />
                {move || errors.get().get("contact_phone").map(|msg| view! {
                    <p class="field-error">{msg.to_string()}</p>
                })}

                <label for="contact_email">"Email"</label>
                <input
                    type="email"
                    id="contact_email"
                    placeholder="john@example.com"
                    prop:value=move || draft.get().contact_email
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_email = event_target_value(&ev));
                        set_errors.update(|e| e.clear("contact_email"));
                    }
                />
                {move || errors.get().get("contact_email").map(|msg| view! {
                    <p class="field-error">{msg.to_string()}</p>
                })}

                <label for="contact_address">"Address"</label>
                <textarea
                    id="contact_address"
                    placeholder="123 Main St, City, Country"
                    prop:value=move || draft.get().contact_address
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_address = event_target_value(&ev));
                    }
                />

                <label>"Gender"</label>
                <GenderSelector
                    current=Signal::derive(move || draft.get().contact_gender)
                    on_change=move |gender| {
                        set_draft.update(|d| d.contact_gender = Some(gender));
                        set_errors.update(|e| e.clear("contact_gender"));
                    }
                />
                {move || errors.get().get("contact_gender").map(|msg| view! {
                    <p class="field-error">{msg.to_string()}</p>
                })}

                <label class="favorite-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().contact_favorite
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let checked = input.checked();
                            set_draft.update(|d| d.contact_favorite = checked);
                        }
                    />
                    "Mark as Favorite"
                </label>

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Adding..." } else { "Add Contact" }}
                </button>
            </form>
        </div>
    }
}
