//! Gender Selector Component
//!
//! Reusable three-way gender picker shared by the contact and profile
//! forms.

use leptos::prelude::*;

use crate::models::Gender;

/// Gender selector buttons
#[component]
pub fn GenderSelector(
    current: Signal<Option<Gender>>,
    on_change: impl Fn(Gender) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="gender-selector">
            {Gender::ALL.iter().map(|gender| {
                let gender = *gender;
                let is_selected = move || current.get() == Some(gender);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "gender-btn active" } else { "gender-btn" }
                        on:click=move |_| on_change(gender)
                    >
                        {gender.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
