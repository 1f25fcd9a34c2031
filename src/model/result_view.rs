use crate::model::search_state::{Phase, SearchState};
use crate::model::validation::is_valid_youtube_url;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub title: String,
    pub url: String,
    pub similarity: String,
    pub bpm: Option<String>,
    pub key: Option<String>,
}

/// What the box under the form shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Loading,
    Failed(String),
    Matched(MatchCard),
    Empty,
    Invalid,
    Ready,
}

impl From<&SearchState> for ResultView {
    fn from(state: &SearchState) -> Self {
        match &state.phase {
            Phase::Loading { .. } => ResultView::Loading,
            Phase::Failed(message) => ResultView::Failed(message.clone()),
            Phase::Matched(result) => ResultView::Matched(MatchCard {
                title: result.matched_song.clone(),
                url: result.matched_url.clone(),
                similarity: result.similarity_percent(),
                bpm: result.bpm(),
                key: result.key().map(String::from),
            }),
            Phase::Idle if state.input.trim().is_empty() => ResultView::Empty,
            Phase::Idle if !is_valid_youtube_url(&state.input) => ResultView::Invalid,
            Phase::Idle => ResultView::Ready,
        }
    }
}
