use crate::api::{SignUpOutcome, sign_up};
use crate::model::{Error, HOME_PATH};
use leptos::{either::Either, ev::SubmitEvent, prelude::*};
use leptos_meta::Title;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let register = Action::new(move |_: &()| {
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        async move { sign_up(name, email, password).await.map_err(Error::from) }
    });
    let pending = register.pending();

    Effect::new(move |_| {
        if let Some(Ok(SignUpOutcome::LoggedIn)) = register.value().get() {
            let navigate = use_navigate();
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
    let waiting_for_email =
        move || matches!(register.value().get(), Some(Ok(SignUpOutcome::ConfirmEmail)));
    let error = move || match register.value().get() {
        Some(Err(e)) => Some(view! { <p class="form-error">{String::from(e)}</p> }),
        _ => None,
    };

    view! {
        <Title text="Sign Up" />
        <div class="auth-page">
            {move || {
                if waiting_for_email() {
                    Either::Left(
                        view! {
                            <div class="auth-card">
                                <h1>"Check your email"</h1>
                                <p>"We sent you a link to confirm your account. Sign in once it is confirmed."</p>
                                <A href="/login">"Go to sign in"</A>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <form
                                class="auth-card"
                                on:submit=move |ev: SubmitEvent| {
                                    ev.prevent_default();
                                    register.dispatch(());
                                }
                            >
                                <h1>"Sign Up"</h1>
                                <div class="input-with-label">
                                    <label for="signup-name">"Name"</label>
                                    <input
                                        type="text"
                                        id="signup-name"
                                        class="text-input"
                                        autocomplete="name"
                                        prop:value=name
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="input-with-label">
                                    <label for="signup-email">"Email"</label>
                                    <input
                                        type="email"
                                        id="signup-email"
                                        class="text-input"
                                        autocomplete="email"
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="input-with-label">
                                    <label for="signup-password">"Password"</label>
                                    <input
                                        type="password"
                                        id="signup-password"
                                        class="text-input"
                                        autocomplete="new-password"
                                        prop:value=password
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                    />
                                </div>
                                {error}
                                <button type="submit" class="button" prop:disabled=pending>
                                    {move || if pending.get() { "Creating account..." } else { "Sign Up" }}
                                </button>
                                <p class="auth-switch">
                                    "Already registered? " <A href="/login">"Sign in"</A>
                                </p>
                            </form>
                        },
                    )
                }
            }}
        </div>
    }
}
