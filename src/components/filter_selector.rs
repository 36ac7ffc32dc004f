//! Filter Selector Component
//!
//! All / Active / Completed buttons.

use leptos::prelude::*;

use crate::models::Filter;

/// Filter options in display order
pub const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

/// Filter buttons; the current one gets the `active` class
#[component]
pub fn FilterSelector(
    #[prop(into)] class: String,
    #[prop(into)] current: Signal<Filter>,
    #[prop(into)] on_change: Callback<Filter>,
) -> impl IntoView {
    view! {
        <div class=class>
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                view! {
                    <button
                        class=move || if current.get() == filter { "active" } else { "" }
                        on:click=move |_| on_change.run(filter)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
