//! Contact List Component
//!
//! Search box plus the filtered, read-only projection of the contact
//! cache. Row actions select a contact for editing or delete it behind
//! an inline confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::DeleteConfirmButton;
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::store::{
    filter_contacts, store_remove_contact, store_set_editing, use_app_store, AppStateStoreFields,
};

#[component]
pub fn ContactList() -> impl IntoView {
    let session = use_session();
    let notify = use_notifier();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    let (search, set_search) = signal(String::new());

    let filtered = Memo::new(move |_| {
        let contacts = store.contacts().read();
        filter_contacts(&contacts, &search.get())
    });

    let delete_contact = Callback::new(move |contact_id: u32| {
        let Some(user_id) = session.user_id() else { return };
        let api = api.clone();
        spawn_local(async move {
            match api.delete_contact(contact_id, user_id).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[CONTACTS] Deleted contact {}", contact_id).into(),
                    );
                    store_remove_contact(&store, contact_id);
                    notify.success("Contact deleted successfully!");
                }
                Err(_) => notify.error("Failed to delete contact"),
            }
        });
    });

    view! {
        <div class="contact-list">
            <div class="contact-list-header">
                <span class="contact-count">
                    {move || {
                        let count = filtered.get().len();
                        format!("{} {}", count, if count == 1 { "contact" } else { "contacts" })
                    }}
                </span>
                <input
                    type="search"
                    placeholder="Search contacts..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || filtered.get().is_empty() && !search.get().trim().is_empty()>
                <p class="list-empty">"No contacts match your search"</p>
            </Show>

            <ul class="contact-rows">
                <For
                    each=move || filtered.get()
                    key=|contact| contact.id
                    children=move |contact| {
                        let id = contact.id;
                        let email = contact.contact_email.clone().unwrap_or_default();
                        let address = contact.contact_address.clone().unwrap_or_default();
                        view! {
                            <li class="contact-row">
                                <span class="contact-star">
                                    {if contact.contact_favorite { "★" } else { "" }}
                                </span>
                                <div class="contact-fields">
                                    <span class="contact-name">{contact.contact_name.clone()}</span>
                                    <span class="contact-phone">{contact.contact_phone.clone()}</span>
                                    <span class="contact-email">{email}</span>
                                    <span class="contact-address">{address}</span>
                                </div>
                                <div class="contact-actions">
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| store_set_editing(&store, Some(id))
                                    >
                                        "Edit"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_| delete_contact.run(id))
                                    />
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
