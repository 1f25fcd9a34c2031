use crate::api::sign_in;
use crate::model::{Error, HOME_PATH};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login = Action::new(move |_: &()| {
        let email = email.get_untracked();
        let password = password.get_untracked();
        async move { sign_in(email, password).await.map_err(Error::from) }
    });
    let pending = login.pending();

    Effect::new(move |_| {
        if let Some(Ok(())) = login.value().get() {
            let navigate = use_navigate();
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
    let error = move || match login.value().get() {
        Some(Err(e)) => Some(view! { <p class="form-error">{String::from(e)}</p> }),
        _ => None,
    };

    view! {
        <Title text="Sign In" />
        <div class="auth-page">
            <form
                class="auth-card"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    login.dispatch(());
                }
            >
                <h1>"Sign In"</h1>
                <div class="input-with-label">
                    <label for="login-email">"Email"</label>
                    <input
                        type="email"
                        id="login-email"
                        class="text-input"
                        autocomplete="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-with-label">
                    <label for="login-password">"Password"</label>
                    <input
                        type="password"
                        id="login-password"
                        class="text-input"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {error}
                <button type="submit" class="button" prop:disabled=pending>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-switch">
                    "No account yet? " <A href="/signup">"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
