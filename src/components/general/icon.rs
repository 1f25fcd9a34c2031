use leptos::prelude::*;

/// Inline svg for an icondata icon, coloured by the surrounding text.
#[component]
pub fn Icon(icon: icondata::Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=format!("icon {}", class)
            viewBox=icon.view_box
            fill="currentColor"
            inner_html=icon.data
        ></svg>
    }
}
