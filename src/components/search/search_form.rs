use crate::components::general::Icon;
use icondata::{AiCustomerServiceOutlined, AiLoadingOutlined, AiSearchOutlined};
use leptos::{either::Either, ev::SubmitEvent, prelude::*};

#[component]
pub fn SearchForm(
    #[prop(into)] input: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="search-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="search-input">
                <Icon icon=AiCustomerServiceOutlined class="search-input-icon" />
                <input
                    type="url"
                    class="text-input"
                    placeholder="Paste YouTube URL here (e.g., youtube.com/watch?v=... or youtu.be/...)"
                    prop:value=input
                    prop:disabled=loading
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="button submit-button" prop:disabled=move || !can_submit.get()>
                {move || {
                    if loading.get() {
                        Either::Left(
                            view! {
                                <Icon icon=AiLoadingOutlined class="spin" />
                                <span>"Processing..."</span>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <Icon icon=AiSearchOutlined />
                                <span>"Find Similar Song"</span>
                            },
                        )
                    }
                }}
            </button>
        </form>
    }
}
