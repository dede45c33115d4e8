//! Login Screen
//!
//! Email/password sign-in. A successful login persists the session and
//! switches to the contact dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, Route};
use crate::models::LoginForm;
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::validate::{self, FieldErrors, LOGIN_FIELDS};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notify = use_notifier();
    let api = expect_context::<ApiClient>();

    let (form, set_form) = signal(LoginForm::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let checked = validate::check(&form.get(), LOGIN_FIELDS);
        if !checked.is_empty() {
            set_errors.set(checked);
            notify.error("Please fix the form errors before submitting");
            return;
        }
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let input = form.get_untracked();
            match api.login(&input.email, &input.password).await {
                Ok(user) => {
                    notify.success("Login successful!");
                    session.set(user);
                    ctx.navigate(Route::Home);
                }
                Err(err) => notify.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Your Personal Contact Book"</h1>
                <p class="auth-subtitle">"Sign in to access your contacts"</p>

                <form class="auth-form" on:submit=on_submit>
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

                    <label for="password">"Password"</label>
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
                        {move || if submitting.get() { "Processing..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-link" on:click=move |_| ctx.navigate(Route::ForgotPassword)>
                    "Forgot password?"
                </p>
                <p class="auth-footer">
                    "Don't have an account? "
                    <span class="auth-link" on:click=move |_| ctx.navigate(Route::Register)>
                        "Sign up"
                    </span>
                </p>
            </div>
        </div>
    }
}
