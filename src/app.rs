use crate::pages;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    *,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href="/pkg/song_finder.css" />

                <title>"MusicSearch"</title>
                <meta
                    name="description"
                    content="Paste a YouTube link and find the most similar song in our library."
                />

                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=pages::LandingPage />
                <Route path=path!("/login") view=pages::LoginPage />
                <Route path=path!("/signup") view=pages::SignupPage />
                <Route path=path!("/homepage") view=pages::SearchPage />
            </Routes>
        </Router>
    }
}
