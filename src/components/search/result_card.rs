use crate::components::general::Icon;
use crate::model::{MatchCard, ResultView};
use icondata::{AiCheckCircleOutlined, AiExportOutlined, AiLoadingOutlined, AiWarningOutlined, AiYoutubeOutlined};
use leptos::{either::EitherOf6, prelude::*};

#[component]
pub fn ResultCard(#[prop(into)] shown: Signal<ResultView>) -> impl IntoView {
    move || match shown.get() {
        ResultView::Loading => EitherOf6::A(view! {
            <div class="result loading">
                <Icon icon=AiLoadingOutlined class="spin big" />
                <p>"Processing your song... This may take a moment."</p>
            </div>
        }),
        ResultView::Failed(message) => EitherOf6::B(view! {
            <div class="result failed">
                <Icon icon=AiWarningOutlined />
                <p>{message}</p>
            </div>
        }),
        ResultView::Matched(card) => EitherOf6::C(view! { <Match card /> }),
        ResultView::Empty => EitherOf6::D(view! {
            <p class="result empty">"Paste a YouTube URL above to find similar songs."</p>
        }),
        ResultView::Invalid => EitherOf6::E(view! {
            <div class="result invalid">
                <Icon icon=AiWarningOutlined />
                <p>"Please enter a valid YouTube URL (youtube.com/watch?v=... or youtu.be/...)"</p>
            </div>
        }),
        ResultView::Ready => EitherOf6::F(view! {
            <div class="result ready">
                <Icon icon=AiYoutubeOutlined />
                <p>"Valid YouTube URL. Click \"Find Similar Song\" to process."</p>
            </div>
        }),
    }
}

#[component]
fn Match(card: MatchCard) -> impl IntoView {
    let MatchCard {
        title,
        url,
        similarity,
        bpm,
        key,
    } = card;
    view! {
        <div class="result matched">
            <div class="matched-title">
                <Icon icon=AiCheckCircleOutlined />
                <h3>"Match Found!"</h3>
            </div>
            <div class="matched-song">
                <p class="label">"Matched Song:"</p>
                <p class="value">{title}</p>
            </div>
            <a href=url target="_blank" rel="noopener noreferrer" class="listen-link">
                <span>"Listen on YouTube"</span>
                <Icon icon=AiExportOutlined />
            </a>
            <div class="matched-details">
                <p class="label">"Similarity: " <span class="value">{similarity}</span></p>
                {bpm.map(|bpm| view! { <p class="label">"Detected BPM: " <span class="value">{bpm}</span></p> })}
                {key.map(|key| view! { <p class="label">"Detected Key: " <span class="value">{key}</span></p> })}
            </div>
        </div>
    }
}
