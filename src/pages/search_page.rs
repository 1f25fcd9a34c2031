use crate::api::{ServerFnBackend, get_current_user, sign_out};
use crate::components::search::{Header, SearchPanel};
use crate::model::{Error, Guard, LOGIN_PATH, Session};
use leptos::{logging::*, prelude::*};
use leptos_meta::Title;
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[component]
pub fn SearchPage() -> impl IntoView {
    let (session, set_session) = signal(None::<Session>);

    let lookup = Action::new(move |_: &()| async move {
        get_current_user().await.map_err(Error::from)
    });
    Effect::new(move |_| {
        lookup.dispatch(());
    });
    Effect::new(move |_| {
        if let Some(result) = lookup.value().get() {
            match Guard::from_lookup(result) {
                Guard::Admit(session) => set_session.set(Some(session)),
                Guard::Redirect(path) => {
                    warn!("no session, redirecting to {}", path);
                    let navigate = use_navigate();
                    navigate(path, NavigateOptions::default());
                }
            }
        }
    });

    let logout = Action::new(move |_: &()| async move { sign_out().await });
    Effect::new(move |_| {
        if let Some(result) = logout.value().get() {
            if let Err(e) = result {
                error!("Error signing out: {:?}", e);
            }
            set_session.set(None);
            let navigate = use_navigate();
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
    let on_logout = Callback::new(move |_: ()| {
        logout.dispatch(());
    });

    view! {
        <Title text="Find Similar Songs" />
        <Show
            when=move || session.with(|session| session.is_some())
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div id="search-page">
                <Header session on_logout />
                <main>
                    <SearchPanel session backend=ServerFnBackend />
                </main>
            </div>
        </Show>
    }
}
