//! Application Context
//!
//! Screen selection and cross-form signals shared via Leptos Context.

use leptos::prelude::*;

/// Screens of the application. The URL router proper is an external
/// collaborator; this is the client-side mapping it drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    Home,
    Profile,
    EditProfile,
}

impl Route {
    /// Screens that require a signed-in user
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Home | Route::Profile | Route::EditProfile)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed screen - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Bumped to force the add-contact draft back to empty - read
    pub refresh_form: ReadSignal<u32>,
    set_refresh_form: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        refresh_form: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            refresh_form: refresh_form.0,
            set_refresh_form: refresh_form.1,
        }
    }

    /// Switch to another screen
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Clear the add-contact form after a sibling operation
    pub fn refresh_add_form(&self) {
        self.set_refresh_form.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_routes() {
        assert!(Route::Home.requires_session());
        assert!(Route::Profile.requires_session());
        assert!(Route::EditProfile.requires_session());
        assert!(!Route::Login.requires_session());
        assert!(!Route::Register.requires_session());
        assert!(!Route::ForgotPassword.requires_session());
    }
}
