use crate::model::types::*;
use crate::model::validation::is_valid_youtube_url;
use std::future::Future;

/// Identifies one submission, so a late answer for an older one can be told apart.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        ticket: Ticket,
    },
    Failed(String),
    Matched(ComparisonResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    InputChanged(String),
    /// `user_uid` is the id of the current session, if there is one.
    Submit { user_uid: Option<String> },
    Completed {
        ticket: Ticket,
        outcome: Result<ComparisonResult, Error>,
    },
}

/// Work the page has to do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Compare {
        ticket: Ticket,
        request: ComparisonRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub input: String,
    pub phase: Phase,
    next_ticket: Ticket,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    #[cfg(test)]
    fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[cfg(test)]
    fn result(&self) -> Option<&ComparisonResult> {
        match &self.phase {
            Phase::Matched(result) => Some(result),
            _ => None,
        }
    }

    pub fn can_submit(&self, has_session: bool) -> bool {
        has_session && !self.is_loading() && is_valid_youtube_url(&self.input)
    }

    /// Pure transition, the caller runs the returned command.
    pub fn update(&self, event: SearchEvent) -> (Self, Option<Command>) {
        let mut next = self.clone();
        let command = match event {
            SearchEvent::InputChanged(input) => {
                next.input = input;
                if !next.is_loading() {
                    next.phase = Phase::Idle;
                }
                None
            }
            SearchEvent::Submit { .. } if self.is_loading() => None,
            SearchEvent::Submit { user_uid } => match next.validate(user_uid) {
                Ok(request) => {
                    let ticket = next.next_ticket;
                    next.next_ticket += 1;
                    next.phase = Phase::Loading { ticket };
                    Some(Command::Compare { ticket, request })
                }
                Err(e) => {
                    next.phase = Phase::Failed(e.into());
                    None
                }
            },
            SearchEvent::Completed { ticket, outcome } => {
                if next.phase == (Phase::Loading { ticket }) {
                    next.phase = match outcome {
                        Ok(result) => Phase::Matched(result),
                        Err(e) => Phase::Failed(e.into()),
                    };
                }
                None
            }
        };
        (next, command)
    }

    fn validate(&self, user_uid: Option<String>) -> Result<ComparisonRequest, Error> {
        let user_uid = user_uid.ok_or(Error::NotLoggedIn)?;
        let youtube_url = self.input.trim();
        if youtube_url.is_empty() {
            return Err(Error::EmptyUrl);
        }
        if !is_valid_youtube_url(youtube_url) {
            return Err(Error::InvalidUrl);
        }
        Ok(ComparisonRequest {
            user_uid,
            youtube_url: youtube_url.to_string(),
        })
    }
}

/// Anything that can answer a comparison request.
pub trait ComparisonBackend {
    fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> impl Future<Output = Result<ComparisonResult, Error>>;
}

/// Runs a command and hands back the event that finishes it.
pub async fn execute<B: ComparisonBackend>(backend: &B, command: Command) -> SearchEvent {
    match command {
        Command::Compare { ticket, request } => SearchEvent::Completed {
            ticket,
            outcome: backend.compare(&request).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::Mutex;

    const URL: &str = "https://www.youtube.com/watch?v=abc123";

    #[derive(Default)]
    struct FakeBackend {
        requests: Mutex<Vec<ComparisonRequest>>,
        answer: Option<Result<ComparisonResult, Error>>,
    }

    impl FakeBackend {
        fn answering(answer: Result<ComparisonResult, Error>) -> Self {
            Self {
                answer: Some(answer),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl ComparisonBackend for FakeBackend {
        async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonResult, Error> {
            self.requests.lock().unwrap().push(request.clone());
            self.answer.clone().unwrap_or(Err(Error::Backend("no answer".into())))
        }
    }

    fn song_a() -> ComparisonResult {
        ComparisonResult {
            matched_song: "Song A".into(),
            matched_url: "http://x".into(),
            similarity: 0.873,
            uploaded_bpm: None,
            uploaded_key: None,
            comparison_id: None,
        }
    }

    fn typed(text: &str) -> SearchState {
        SearchState::new().update(SearchEvent::InputChanged(text.into())).0
    }

    fn submit(state: &SearchState, user_uid: Option<&str>) -> (SearchState, Option<Command>) {
        state.update(SearchEvent::Submit {
            user_uid: user_uid.map(String::from),
        })
    }

    /// submit, run the command if any, apply the outcome
    fn round_trip(state: SearchState, user_uid: Option<&str>, backend: &FakeBackend) -> SearchState {
        let (state, command) = submit(&state, user_uid);
        match command {
            Some(command) => state.update(block_on(execute(backend, command))).0,
            None => state,
        }
    }

    #[test]
    fn no_session_means_no_request() {
        let backend = FakeBackend::answering(Ok(song_a()));
        let state = round_trip(typed(URL), None, &backend);
        assert_eq!(state.error(), Some("Please log in to continue"));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn empty_and_invalid_input_fail_locally() {
        let backend = FakeBackend::answering(Ok(song_a()));
        let state = round_trip(typed("   "), Some("uid-1"), &backend);
        assert_eq!(state.error(), Some("Please enter a YouTube URL"));
        let state = round_trip(typed("not a url"), Some("uid-1"), &backend);
        assert_eq!(state.error(), Some("Please enter a valid YouTube URL"));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn valid_submit_sends_exactly_one_trimmed_request() {
        let backend = FakeBackend::answering(Ok(song_a()));
        let state = round_trip(typed(&format!("  {URL}  ")), Some("uid-1"), &backend);

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].youtube_url, URL);
        assert_eq!(requests[0].user_uid, "uid-1");
        assert_eq!(state.result(), Some(&song_a()));
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_enters_loading_and_clears_old_outcome() {
        let failed = submit(&typed("nope"), Some("uid-1")).0;
        assert!(failed.error().is_some());

        let fixed = failed.update(SearchEvent::InputChanged(URL.into())).0;
        let (loading, command) = submit(&fixed, Some("uid-1"));
        assert!(loading.is_loading());
        assert_eq!(loading.error(), None);
        assert_eq!(loading.result(), None);
        assert!(matches!(command, Some(Command::Compare { .. })));
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let (loading, _) = submit(&typed(URL), Some("uid-1"));
        let (still, command) = submit(&loading, Some("uid-1"));
        assert_eq!(still, loading);
        assert!(command.is_none());
        assert!(!loading.can_submit(true));
    }

    #[test]
    fn transport_failure_names_the_endpoint() {
        let backend = FakeBackend::answering(Err(Error::Unreachable {
            endpoint: "http://localhost:8000".into(),
        }));
        let state = round_trip(typed(URL), Some("uid-1"), &backend);
        assert!(state.error().unwrap().contains("http://localhost:8000"));
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn backend_detail_is_shown_verbatim() {
        let backend = FakeBackend::answering(Err(Error::Backend("No matching song found".into())));
        let state = round_trip(typed(URL), Some("uid-1"), &backend);
        assert_eq!(state.error(), Some("No matching song found"));
    }

    #[test]
    fn editing_clears_result_and_error() {
        let backend = FakeBackend::answering(Ok(song_a()));
        let matched = round_trip(typed(URL), Some("uid-1"), &backend);
        assert!(matched.result().is_some());

        let edited = matched.update(SearchEvent::InputChanged("https://youtu.be/".into())).0;
        assert_eq!(edited.result(), None);
        assert_eq!(edited.phase, Phase::Idle);

        let failed = submit(&edited, None).0;
        let edited = failed.update(SearchEvent::InputChanged(String::new())).0;
        assert_eq!(edited.error(), None);
    }

    #[test]
    fn stale_completion_is_dropped() {
        let (first, first_command) = submit(&typed(URL), Some("uid-1"));
        let Some(Command::Compare { ticket: old, .. }) = first_command else {
            panic!("expected a compare command");
        };
        let (done, _) = first.update(SearchEvent::Completed {
            ticket: old,
            outcome: Err(Error::Backend("boom".into())),
        });
        let (second, second_command) = submit(&done, Some("uid-1"));
        let Some(Command::Compare { ticket: new, .. }) = second_command else {
            panic!("expected a compare command");
        };
        assert_ne!(old, new);

        let (after_stale, _) = second.update(SearchEvent::Completed {
            ticket: old,
            outcome: Ok(song_a()),
        });
        assert_eq!(after_stale.phase, Phase::Loading { ticket: new });
    }

    #[test]
    fn submit_button_rules() {
        assert!(typed(URL).can_submit(true));
        assert!(!typed(URL).can_submit(false));
        assert!(!typed("https://vimeo.com/1").can_submit(true));
    }
}
