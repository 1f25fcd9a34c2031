use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div id="landing-page">
            <h1>"Welcome to MusicSearch"</h1>
            <p>"Please choose an option to continue your journey."</p>
            <div class="button-group">
                <A href="/login" attr:class="button sign-in">
                    "Sign In"
                </A>
                <A href="/signup" attr:class="button sign-up">
                    "Sign Up"
                </A>
            </div>
        </div>
    }
}
