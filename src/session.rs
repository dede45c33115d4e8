//! Session Store
//!
//! Persisted identity of the authenticated user. One serialized user
//! object lives in localStorage under a fixed key; screens reach it only
//! through [`SessionContext`], never through ambient storage reads.

use leptos::prelude::*;

use crate::models::User;

const SESSION_KEY: &str = "user";

/// Session handle provided via Leptos context
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
}

impl SessionContext {
    /// Create the context, hydrating from storage when a session was
    /// persisted by an earlier page load.
    pub fn new() -> Self {
        let (user, set_user) = signal(load_stored_user());
        Self { user, set_user }
    }

    /// Reactive read of the signed-in user
    pub fn get(&self) -> Option<User> {
        self.user.get()
    }

    pub fn user_id(&self) -> Option<u32> {
        self.user.with(|user| user.as_ref().map(|u| u.id))
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Persist and publish a freshly authenticated user
    pub fn set(&self, user: User) {
        store_user(&user);
        self.set_user.set(Some(user));
    }

    /// Logout: drop the persisted state and the in-memory identity
    pub fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
        self.set_user.set(None);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_stored_user() -> Option<User> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

fn store_user(user: &User) {
    if let (Some(storage), Ok(raw)) = (storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}
