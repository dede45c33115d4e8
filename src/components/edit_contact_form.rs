//! Edit Contact Form Component
//!
//! Editor driven by the store's editing selection. The draft reloads
//! whenever the selected contact changes; an unchanged draft never
//! reaches the network.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::GenderSelector;
use crate::context::use_app_context;
use crate::models::ContactDraft;
use crate::notify::use_notifier;
use crate::store::{
    store_replace_contact, store_set_editing, use_app_store, AppStateStoreFields,
};

#[component]
pub fn EditContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let notify = use_notifier();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    let (draft, set_draft) = signal(ContactDraft::default());
    let (submitting, set_submitting) = signal(false);

    // Load the draft whenever the selection (or the cached record)
    // changes; clear it when nothing is selected.
    Effect::new(move |_| {
        let selected = store.editing_id().get().and_then(|id| {
            store
                .contacts()
                .read()
                .iter()
                .find(|c| c.id == id)
                .cloned()
        });
        match selected {
            Some(contact) => set_draft.set(ContactDraft::from_contact(&contact)),
            None => set_draft.set(ContactDraft::default()),
        }
    });

    let on_cancel = move |_| {
        store_set_editing(&store, None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let Some(id) = current.id else { return };

        let original = {
            let contacts = store.contacts().read();
            contacts.iter().find(|c| c.id == id).cloned()
        };
        let Some(original) = original else { return };

        if !current.differs_from(&original) {
            notify.error("No changes made");
            return;
        }
        if current.contact_name.is_empty() || current.contact_phone.is_empty() {
            notify.error("Name and phone are required");
            return;
        }
        let Some(record) = current.to_contact() else { return };
        set_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            match api.update_contact(record.id, &record).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[CONTACTS] Updated contact {}", record.id).into(),
                    );
                    store_replace_contact(&store, record);
                    store_set_editing(&store, None);
                    // Sibling form clears its draft off this trigger
                    ctx.refresh_add_form();
                    notify.success("Contact updated successfully!");
                }
                Err(err) => notify.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="contact-form edit-contact">
            <div class="contact-form-header">
                <h3>"Edit Contact"</h3>
                <div class="contact-form-actions">
                    <button type="button" on:click=on_cancel>"Cancel"</button>
                </div>
            </div>

            <form on:submit=on_submit>
                <label for="edit_name">"Name"</label>
                <input
                    type="text"
                    id="edit_name"
                    prop:value=move || draft.get().contact_name
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_name = event_target_value(&ev));
                    }
                />

                <label for="edit_phone">"Phone"</label>
                <input
                    type="tel"
                    id="edit_phone"
                    prop:value=move || draft.get().contact_phone
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_phone = event_target_value(&ev));
                    }
                />

                <label for="edit_email">"Email"</label>
                <input
                    type="email"
                    id="edit_email"
                    prop:value=move || draft.get().contact_email
                    on:input=move |ev| {
                        set_draft.update(|d| d.contact_email = event_target_value(&ev));
                    }
                />

                <label for="edit_address">"Address"</label>
                <textarea
                    id="edit_address"
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
                    }
                />

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
                    {move || if submitting.get() { "Updating..." } else { "Update" }}
                </button>
            </form>
        </div>
    }
}
