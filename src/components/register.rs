//! Register Screen
//!
//! Account creation. Success routes back to the login screen; the new
//! session starts only after an explicit sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::GenderSelector;
use crate::context::{use_app_context, Route};
use crate::models::{RegisterForm, RegisterRequest};
use crate::notify::use_notifier;
use crate::validate::{self, FieldErrors, REGISTER_FIELDS};

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let notify = use_notifier();
    let api = expect_context::<ApiClient>();

    let (form, set_form) = signal(RegisterForm::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = form.get();
        let checked = validate::check(&input, REGISTER_FIELDS);
        if !checked.is_empty() {
            set_errors.set(checked);
            return;
        }
        let Some(gender) = input.gender else { return };
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let payload = RegisterRequest {
            name: input.name,
            gender,
            phone: input.phone,
            email: input.email,
            password: input.password,
        };
        let api = api.clone();
        spawn_local(async move {
            match api.register(&payload).await {
                Ok(()) => {
                    notify.success("Registration successful. Please login.");
                    ctx.navigate(Route::Login);
                }
                Err(err) => notify.error(err.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Create Your Account"</h1>
                <p class="auth-subtitle">"Join us to manage your contacts"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Full Name"</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="John Doe"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            set_form.update(|f| f.name = event_target_value(&ev));
                            set_errors.update(|e| e.clear("name"));
                        }
                    />
                    {move || errors.get().get("name").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

                    <label for="phone">"Phone Number"</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="1234567890"
                        prop:value=move || form.get().phone
                        on:input=move |ev| {
                            set_form.update(|f| f.phone = event_target_value(&ev));
                            set_errors.update(|e| e.clear("phone"));
                        }
                    />
                    {move || errors.get().get("phone").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

                    <label>"Gender"</label>
                    <GenderSelector
                        current=Signal::derive(move || form.get().gender)
                        on_change=move |gender| {
                            set_form.update(|f| f.gender = Some(gender));
                            set_errors.update(|e| e.clear("gender"));
                        }
                    />
                    {move || errors.get().get("gender").map(|msg| view! {
                        <p class="field-error">{msg.to_string()}</p>
                    })}

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
                    <p class="field-hint">"Password must be at least 6 characters"</p>

                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Processing..." } else { "Sign up" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "Already have an account? "
                    <span class="auth-link" on:click=move |_| ctx.navigate(Route::Login)>
                        "Log in"
                    </span>
                </p>
            </div>
        </div>
    }
}
