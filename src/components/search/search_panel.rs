use crate::components::general::Icon;
use crate::components::search::{ResultCard, SearchForm};
use crate::model::{
    Command, ComparisonBackend, ResultView, SearchEvent, SearchState, Session, execute,
};
use futures::future::{AbortHandle, Abortable};
use icondata::AiSearchOutlined;
use leptos::{logging::log, prelude::*, task::spawn_local};
use std::sync::{Arc, Mutex};

/// Abort handle of the request that is currently out, if any.
#[derive(Clone, Default)]
struct InFlight(Arc<Mutex<Option<AbortHandle>>>);

impl InFlight {
    fn replace(&self, handle: AbortHandle) {
        if let Ok(mut slot) = self.0.lock() {
            if let Some(old) = slot.replace(handle) {
                old.abort();
            }
        }
    }

    fn cancel(&self) {
        if let Ok(mut slot) = self.0.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

/// Form plus result box. Whatever answers comparisons is handed in as `backend`.
#[component]
pub fn SearchPanel<B>(#[prop(into)] session: Signal<Option<Session>>, backend: B) -> impl IntoView
where
    B: ComparisonBackend + Copy + Send + Sync + 'static,
{
    let (state, set_state) = signal(SearchState::new());
    let in_flight = InFlight::default();

    on_cleanup({
        let in_flight = in_flight.clone();
        move || in_flight.cancel()
    });

    let apply = move |event: SearchEvent| -> Option<Command> {
        let (next, command) = state.with_untracked(|state| state.update(event));
        set_state.set(next);
        command
    };

    let run = move |command: Command| {
        let (handle, registration) = AbortHandle::new_pair();
        in_flight.replace(handle);
        spawn_local(async move {
            match Abortable::new(execute(&backend, command), registration).await {
                Ok(event) => {
                    apply(event);
                }
                Err(_) => log!("comparison request dropped with its page"),
            }
        });
    };

    let on_input = Callback::new(move |text: String| {
        apply(SearchEvent::InputChanged(text));
    });
    let on_submit = Callback::new(move |_: ()| {
        let user_uid = session.with_untracked(|session| session.as_ref().map(|s| s.id.clone()));
        if let Some(command) = apply(SearchEvent::Submit { user_uid }) {
            run(command);
        }
    });

    let input = Signal::derive(move || state.with(|state| state.input.clone()));
    let loading = Signal::derive(move || state.with(|state| state.is_loading()));
    let can_submit = Signal::derive(move || {
        let has_session = session.with(|session| session.is_some());
        state.with(|state| state.can_submit(has_session))
    });
    let shown = Signal::derive(move || state.with(|state| ResultView::from(state)));

    view! {
        <div class="search-panel">
            <Icon icon=AiSearchOutlined class="search-panel-icon" />
            <h2>"Find Similar Songs"</h2>
            <p class="subtitle">
                "Paste a YouTube URL below to find the most similar song in our database."
            </p>
            <SearchForm input loading can_submit on_input on_submit />
            <div class="result-area">
                <ResultCard shown />
            </div>
        </div>
    }
}
