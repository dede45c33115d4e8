//! Contact Book App
//!
//! Root component: builds the session, API, store, and notification
//! contexts, then renders the screen selected by the route signal.
//! Gated screens fall back to the login screen when no session exists.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    EditProfile, ForgotPassword, Home, Login, ProfileView, Register, ToastHost,
};
use crate::context::{AppContext, Route};
use crate::notify::Notifier;
use crate::session::SessionContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);
    provide_context(Notifier::new());
    provide_context(ApiClient::new());
    provide_context(Store::new(AppState::default()));

    // A persisted session lands straight on the dashboard
    let initial = if session.is_logged_in() {
        Route::Home
    } else {
        Route::Login
    };
    let (route, set_route) = signal(initial);
    let (refresh_form, set_refresh_form) = signal(0u32);
    provide_context(AppContext::new(
        (route, set_route),
        (refresh_form, set_refresh_form),
    ));

    let screen = move || {
        let mut current = route.get();
        if current.requires_session() && !session.is_logged_in() {
            current = Route::Login;
        }
        match current {
            Route::Login => view! { <Login /> }.into_any(),
            Route::Register => view! { <Register /> }.into_any(),
            Route::ForgotPassword => view! { <ForgotPassword /> }.into_any(),
            Route::Home => view! { <Home /> }.into_any(),
            Route::Profile => view! { <ProfileView /> }.into_any(),
            Route::EditProfile => view! { <EditProfile /> }.into_any(),
        }
    };

    view! {
        <div class="app-shell">
            {screen}
            <ToastHost />
        </div>
    }
}
