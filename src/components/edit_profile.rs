//! Edit Profile Screen
//!
//! Loads the profile into a draft, validates, and submits the update.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::GenderSelector;
use crate::context::{use_app_context, Route};
use crate::models::{ProfileDraft, UpdateProfileRequest};
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::validate::{self, FieldErrors, PROFILE_FIELDS};

#[component]
pub fn EditProfile() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notify = use_notifier();
    let api = expect_context::<ApiClient>();

    let (draft, set_draft) = signal(ProfileDraft::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);

    let fetch_api = api.clone();
    Effect::new(move |_| {
        let Some(user_id) = session.user_id() else { return };
        set_loading.set(true);
        let api = fetch_api.clone();
        spawn_local(async move {
            match api.get_profile(user_id).await {
                Ok(profile) => set_draft.set(ProfileDraft::from_profile(&profile)),
                Err(err) => notify.error(err.user_message()),
            }
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = session.user_id() else { return };
        let input = draft.get();
        let checked = validate::check(&input, PROFILE_FIELDS);
        if !checked.is_empty() {
            notify.error("Please fix the form errors");
            set_errors.set(checked);
            return;
        }
        let Some(gender) = input.gender else { return };
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let payload = UpdateProfileRequest {
            name: input.name,
            gender,
            phone: input.phone,
            email: input.email,
        };
        let api = api.clone();
        spawn_local(async move {
            match api.update_profile(user_id, &payload).await {
                Ok(()) => {
                    notify.success("Profile updated successfully!");
                    ctx.navigate(Route::Profile);
                }
                Err(err) => notify.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="profile-screen">
            <button class="back-btn" on:click=move |_| ctx.navigate(Route::Profile)>
                "Back"
            </button>

            <div class="profile-card">
                <h1>"Edit Profile"</h1>

                <Show when=move || loading.get()>
                    <div class="loading-spinner">"Loading..."</div>
                </Show>

                <form class="profile-form" on:submit=on_submit>
                    <label for="profile_name">"Name"</label>
                    <input
                        type="text"
                        id="profile_name"
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            set_draft.update(|d| d.name = event_target_value(&ev));
                            set_errors.update(|e| e.clear("name"));
                        }
                    />
                    {move || errors.get().get("name").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

                    <label>"Gender"</label>
                    <GenderSelector
                        current=Signal::derive(move || draft.get().gender)
                        on_change=move |gender| {
                            set_draft.update(|d| d.gender = Some(gender));
                            set_errors.update(|e| e.clear("gender"));
                        }
                    />
                    {move || errors.get().get("gender").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

                    <label for="profile_phone">"Phone"</label>
                    <input
                        type="tel"
                        id="profile_phone"
                        prop:value=move || draft.get().phone
                        on:input=move |ev| {
                            set_draft.update(|d| d.phone = event_target_value(&ev));
                            set_errors.update(|e| e.clear("phone"));
                        }
                    />
                    {move || errors.get().get("phone").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

                    <label for="profile_email">"Email"</label>
                    <input
                        type="email"
                        id="profile_email"
                        prop:value=move || draft.get().email
                        on:input=move |ev| {
                            set_draft.update(|d| d.email = event_target_value(&ev));
                            set_errors.update(|e| e.clear("email"));
                        }
                    />
                    {move || errors.get().get("email").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

                    <button type="submit" disabled=move || submitting.get() || loading.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
