//! Home Screen
//!
//! Contact dashboard: loads the signed-in user's contacts into the
//! store, then composes the add form, the conditional edit form, and
//! the searchable list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{AddContactForm, ContactList, EditContactForm};
use crate::context::{use_app_context, Route};
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::store::{
    store_set_contacts, store_set_editing, store_set_loading, use_app_store, AppStateStoreFields,
};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notify = use_notifier();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    // Fetch contacts whenever the signed-in user changes
    Effect::new(move |_| {
        let Some(user_id) = session.user_id() else { return };
        web_sys::console::log_1(&format!("[CONTACTS] Loading contacts for user {}", user_id).into());
        store_set_loading(&store, true);
        let api = api.clone();
        spawn_local(async move {
            match api.list_contacts(user_id).await {
                Ok(contacts) => {
                    web_sys::console::log_1(
                        &format!("[CONTACTS] Loaded {} contacts", contacts.len()).into(),
                    );
                    store_set_contacts(&store, contacts);
                }
                Err(err) if err.is_no_contacts() => {
                    store_set_contacts(&store, Vec::new());
                    notify.error("Add your first contact");
                }
                Err(err) => notify.error(err.user_message()),
            }
            store_set_loading(&store, false);
        });
    });

    let logout = move |_| {
        session.clear();
        store_set_contacts(&store, Vec::new());
        store_set_editing(&store, None);
        ctx.navigate(Route::Login);
    };

    view! {
        <div class="home-screen">
            <header class="home-header">
                <h1>"Contact Manager"</h1>
                <div class="home-header-actions">
                    <button on:click=move |_| ctx.navigate(Route::Profile)>"Profile"</button>
                    <button on:click=logout>"Logout"</button>
                </div>
            </header>

            <main class="home-layout">
                <section class="home-forms">
                    <AddContactForm />
                    <Show when=move || store.editing_id().get().is_some()>
                        <EditContactForm />
                    </Show>
                </section>

                <section class="home-list">
                    {move || {
                        if store.loading().get() {
                            view! { <div class="loading-spinner">"Loading..."</div> }.into_any()
                        } else if store.contacts().read().is_empty() {
                            view! {
                                <div class="list-empty-state">
                                    <p>"No contacts found"</p>
                                    <p>"Add your first contact"</p>
                                </div>
                            }.into_any()
                        } else {
                            view! { <ContactList /> }.into_any()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
