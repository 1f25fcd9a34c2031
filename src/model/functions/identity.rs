use crate::model::types::*;
use cookie::{Cookie, SameSite};
use http::{HeaderMap, StatusCode, header::COOKIE};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// Cookie the provider's access token lives in between requests.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// The auth service, as far as the pages need it.
pub trait IdentityProvider {
    /// `Ok(None)` when the token is missing, expired or revoked.
    fn current_user(
        &self,
        access_token: &str,
    ) -> impl Future<Output = Result<Option<AuthUser>, Error>> + Send;
    fn sign_out(&self, access_token: &str) -> impl Future<Output = Result<(), Error>> + Send;
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, Error>> + Send;
    fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> impl Future<Output = Result<SignUpResponse, Error>> + Send;
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Sign up either logs in right away or waits for the email to be confirmed.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(AuthSession),
    Pending(AuthUser),
}

#[derive(Deserialize, Debug, Default)]
struct ProviderError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

fn provider_message(body: &str, status: StatusCode) -> String {
    let parsed: ProviderError = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            format!(
                "Authentication failed: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
        })
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpData<'a>,
}

#[derive(Serialize)]
struct SignUpData<'a> {
    name: &'a str,
}

/// Supabase GoTrue over its REST api.
#[derive(Clone, Debug)]
pub struct SupabaseAuth {
    client: reqwest::Client,
    config: IdentityConfig,
}

impl SupabaseAuth {
    pub fn new(client: reqwest::Client, config: IdentityConfig) -> Self {
        Self { client, config }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.config.auth_url(path);
        debug!(%method, %url, "identity provider request");
        self.client
            .request(method, url)
            .header("apikey", &self.config.anon_key)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        request.send().await.map_err(|e| {
            warn!(error = %e, url = %self.config.url, "identity provider unreachable");
            Error::Identity(format!("Cannot reach the identity provider at {}", self.config.url))
        })
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Identity(e.to_string()))?;
        if !status.is_success() {
            let message = provider_message(&body, status);
            warn!(status = status.as_u16(), %message, "identity provider refused request");
            return Err(Error::Identity(message));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl IdentityProvider for SupabaseAuth {
    async fn current_user(&self, access_token: &str) -> Result<Option<AuthUser>, Error> {
        let request = self
            .request(reqwest::Method::GET, "user")
            .bearer_auth(access_token);
        let response = self.send(request).await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => Ok(Some(Self::parse(response).await?)),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), Error> {
        let request = self
            .request(reqwest::Method::POST, "logout")
            .bearer_auth(access_token);
        let response = self.send(request).await?;
        let status = response.status();
        // an already dead token is as good as signed out
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Identity(provider_message(&body, status)))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Error> {
        let request = self
            .request(reqwest::Method::POST, "token?grant_type=password")
            .json(&Credentials { email, password });
        Self::parse(self.send(request).await?).await
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUpResponse, Error> {
        let request = self.request(reqwest::Method::POST, "signup").json(&SignUpBody {
            email,
            password,
            data: SignUpData { name },
        });
        Self::parse(self.send(request).await?).await
    }
}

pub fn access_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

pub fn session_cookie(access_token: &str) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, access_token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = session_cookie("");
    cookie.make_removal();
    cookie
}
