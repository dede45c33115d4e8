//! Forgot Password Screen
//!
//! Email + replacement password. Success flips into a confirmation
//! state; any existing session for that account is considered invalid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, Route};
use crate::models::ResetPasswordForm;
use crate::notify::use_notifier;
use crate::validate::{self, FieldErrors, RESET_FIELDS};

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let ctx = use_app_context();
    let notify = use_notifier();
    let api = expect_context::<ApiClient>();

    let (form, set_form) = signal(ResetPasswordForm::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let checked = validate::check(&form.get(), RESET_FIELDS);
        if !checked.is_empty() {
            set_errors.set(checked);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let input = form.get_untracked();
            match api.reset_password(&input.email, &input.password).await {
                Ok(()) => {
                    notify.success("Password reset successful! You can now log in.");
                    set_submitted.set(true);
                }
                Err(err) => notify.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    });

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-subtitle">
                    {move || if submitted.get() {
                        "Your password has been updated successfully!"
                    } else {
                        "Enter your email and new password"
                    }}
                </p>

                <Show when=move || !submitted.get()>
                    <form class="auth-form" on:submit=move |ev| on_submit.run(ev)>
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="your@email.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                set_form.update(|f| f.email = event_target_value(&ev));
                                set_errors.update(|e| e.clear("email"));
                            }
                        />
                        {move || errors.get().get("email").map(|msg| view! {
                            <p class="field-error">{msg.to_string()}</p>
                        })}

                        <label for="password">"New Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="********"
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                set_form.update(|f| f.password = event_target_value(&ev));
                                set_errors.update(|e| e.clear("password"));
                            }
                        />
                        {move || errors.get().get("password").map(|msg| view! {
                            <p class="field-error">{msg.to_string()}</p>
                        })}

                        <button type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Processing..." } else { "Reset password" }}
                        </button>
                    </form>
                </Show>

                <button class="auth-secondary" on:click=move |_| ctx.navigate(Route::Login)>
                    "Back to login"
                </button>
            </div>
        </div>
    }
}
