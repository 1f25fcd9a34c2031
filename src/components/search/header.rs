use crate::components::general::Icon;
use crate::model::Session;
use icondata::{AiCustomerServiceOutlined, AiLogoutOutlined};
use leptos::prelude::*;

#[component]
pub fn Header(
    #[prop(into)] session: Signal<Option<Session>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="top-bar">
            <div class="brand">
                <Icon icon=AiCustomerServiceOutlined />
                <span>"MusicSearch"</span>
            </div>
            <div class="account">
                {move || {
                    session
                        .get()
                        .map(|session| {
                            view! {
                                <div class="who">
                                    <span class="who-name">{session.name}</span>
                                    {session.email.map(|email| view! { <span class="who-email">{email}</span> })}
                                </div>
                            }
                        })
                }}
                <button class="button logout-button" on:click=move |_| on_logout.run(())>
                    <Icon icon=AiLogoutOutlined />
                    <span>"Logout"</span>
                </button>
            </div>
        </header>
    }
}
