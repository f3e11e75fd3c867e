use leptos::prelude::*;

use crate::services::ServiceIcon;

/// Inline stroke icon sized and coloured by the caller's classes
#[component]
pub fn Icon(
    icon: ServiceIcon,
    #[prop(into)] class: String,
    #[prop(optional, into)] style: Option<String>,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            style=style
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
