//! Profile Screen
//!
//! Read-only view of the signed-in user's profile.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, Route};
use crate::models::Profile;
use crate::notify::use_notifier;
use crate::session::use_session;

#[component]
pub fn ProfileView() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notify = use_notifier();
    let api = expect_context::<ApiClient>();

    let (profile, set_profile) = signal(Option::<Profile>::None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(user_id) = session.user_id() else { return };
        set_loading.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.get_profile(user_id).await {
                Ok(fetched) => set_profile.set(Some(fetched)),
                Err(err) => notify.error(err.user_message()),
            }
            set_loading.set(false);
        });
    });

    let logout = move |_| {
        session.clear();
        ctx.navigate(Route::Login);
    };

    view! {
        <div class="profile-screen">
            <button class="back-btn" on:click=move |_| ctx.navigate(Route::Home)>
                "Back"
            </button>

            <div class="profile-card">
                {move || {
                    if loading.get() {
                        view! { <div class="loading-spinner">"Loading..."</div> }.into_any()
                    } else if let Some(profile) = profile.get() {
                        view! {
                            <div class="profile-details">
                                <h1>{profile.name.clone()}</h1>
                                <div class="profile-field">
                                    <span class="profile-label">"Email"</span>
                                    <span>{profile.email.clone()}</span>
                                </div>
                                <div class="profile-field">
                                    <span class="profile-label">"Phone"</span>
                                    <span>{profile.phone.clone()}</span>
                                </div>
                                <div class="profile-field">
                                    <span class="profile-label">"Gender"</span>
                                    <span>{profile.gender.map(|g| g.label()).unwrap_or("")}</span>
                                </div>
                            </div>
                        }.into_any()
                    } else {
                        view! { <p class="list-empty">"Profile unavailable"</p> }.into_any()
                    }
                }}

                <div class="profile-actions">
                    <button on:click=move |_| ctx.navigate(Route::EditProfile)>
                        "Edit Profile"
                    </button>
                    <button on:click=move |_| ctx.navigate(Route::ForgotPassword)>
                        "Change Password"
                    </button>
                    <button on:click=logout>"Logout"</button>
                </div>
            </div>
        </div>
    }
}
