use crate::model::{ComparisonBackend, ComparisonRequest, ComparisonResult, Error, Session};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    LoggedIn,
    ConfirmEmail,
}

#[cfg(feature = "ssr")]
async fn request_token() -> Result<Option<String>, ServerFnError> {
    let headers: http::HeaderMap = leptos_axum::extract().await?;
    Ok(crate::model::access_token(&headers))
}

#[cfg(feature = "ssr")]
fn set_cookie(cookie: cookie::Cookie<'static>) -> Result<(), ServerFnError> {
    let response = expect_context::<leptos_axum::ResponseOptions>();
    response.append_header(
        http::header::SET_COOKIE,
        http::HeaderValue::from_str(&cookie.to_string())?,
    );
    Ok(())
}

#[server]
pub async fn get_current_user() -> Result<Option<Session>, ServerFnError> {
    use crate::model::{AppState, IdentityProvider};
    let app_state = expect_context::<AppState>();

    let Some(token) = request_token().await? else {
        return Ok(None);
    };
    let user = app_state.identity.current_user(&token).await?;
    Ok(user.map(Session::from))
}

#[server]
pub async fn sign_in(email: String, password: String) -> Result<(), ServerFnError> {
    use crate::model::{AppState, IdentityProvider, session_cookie};
    let app_state = expect_context::<AppState>();

    if email.trim().is_empty() || password.is_empty() {
        return Err(Error::InvalidRequest("email and password are required".into()).into());
    }
    let session = app_state.identity.sign_in(email.trim(), &password).await?;
    tracing::info!(user = %session.user.id, "signed in");
    set_cookie(session_cookie(&session.access_token))
}

#[server]
pub async fn sign_up(
    name: String,
    email: String,
    password: String,
) -> Result<SignUpOutcome, ServerFnError> {
    use crate::model::{AppState, IdentityProvider, SignUpResponse, session_cookie};
    let app_state = expect_context::<AppState>();

    if email.trim().is_empty() || password.is_empty() {
        return Err(Error::InvalidRequest("email and password are required".into()).into());
    }
    match app_state
        .identity
        .sign_up(email.trim(), &password, name.trim())
        .await?
    {
        SignUpResponse::Session(session) => {
            tracing::info!(user = %session.user.id, "signed up");
            set_cookie(session_cookie(&session.access_token))?;
            Ok(SignUpOutcome::LoggedIn)
        }
        SignUpResponse::Pending(user) => {
            tracing::info!(user = %user.id, "signed up, waiting for email confirmation");
            Ok(SignUpOutcome::ConfirmEmail)
        }
    }
}

#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    use crate::model::{AppState, IdentityProvider, removal_cookie};
    let app_state = expect_context::<AppState>();

    if let Some(token) = request_token().await? {
        if let Err(e) = app_state.identity.sign_out(&token).await {
            tracing::warn!(error = %e, "provider sign out failed, dropping cookie anyway");
        }
    }
    set_cookie(removal_cookie())
}

#[server]
pub async fn compare_song(request: ComparisonRequest) -> Result<ComparisonResult, ServerFnError> {
    use crate::model::AppState;
    let app_state = expect_context::<AppState>();

    tracing::info!(user = %request.user_uid, url = %request.youtube_url, "comparing song");
    Ok(app_state.backend.compare(&request).await?)
}

/// Reaches the comparison backend through our own server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnBackend;

impl ComparisonBackend for ServerFnBackend {
    async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonResult, Error> {
        compare_song(request.clone()).await.map_err(Error::from)
    }
}
