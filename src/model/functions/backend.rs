use crate::model::search_state::ComparisonBackend;
use crate::model::types::*;
use std::future::Future;
use tracing::{debug, warn};

/// Talks to the similarity service over `POST /music/compare`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(client: reqwest::Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    /// No timeout and no retry, a failed call is reported once.
    pub async fn send_compare(&self, request: &ComparisonRequest) -> Result<ComparisonResult, Error> {
        let url = self.config.compare_url();
        debug!(%url, youtube_url = %request.youtube_url, "sending comparison request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.unreachable(e))?;

        if !status.is_success() {
            let message =
                ErrorDetail::message(&body, status.as_u16(), status.canonical_reason().unwrap_or(""));
            warn!(%url, status = status.as_u16(), %message, "comparison backend refused request");
            return Err(Error::Backend(message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn unreachable(&self, e: reqwest::Error) -> Error {
        warn!(error = %e, endpoint = %self.config.base_url, "comparison backend unreachable");
        Error::Unreachable {
            endpoint: self.config.base_url.clone(),
        }
    }
}

impl ComparisonBackend for HttpBackend {
    fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> impl Future<Output = Result<ComparisonResult, Error>> {
        self.send_compare(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::search_state::{Command, SearchEvent, execute};
    use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn backend(base_url: &str) -> HttpBackend {
        HttpBackend::new(reqwest::Client::new(), BackendConfig::new(base_url))
    }

    fn request() -> ComparisonRequest {
        ComparisonRequest {
            user_uid: "uid-1".into(),
            youtube_url: "https://youtu.be/abc123".into(),
        }
    }

    #[tokio::test]
    async fn posts_request_and_parses_match() {
        let router = Router::new().route(
            "/music/compare",
            post(|Json(body): Json<ComparisonRequest>| async move {
                assert_eq!(body.user_uid, "uid-1");
                assert_eq!(body.youtube_url, "https://youtu.be/abc123");
                Json(json!({
                    "matched_song": "Song A",
                    "matched_url": "http://x",
                    "similarity": 0.873,
                    "uploaded_bpm": 128,
                    "uploaded_key": "A minor",
                    "comparison_id": 3
                }))
            }),
        );
        let base = serve(router).await;

        let result = backend(&base).send_compare(&request()).await.unwrap();
        assert_eq!(result.matched_song, "Song A");
        assert_eq!(result.similarity_percent(), "87.3%");
        assert_eq!(result.bpm().as_deref(), Some("128"));
        assert_eq!(result.comparison_id, Some(3));
    }

    #[tokio::test]
    async fn uses_detail_of_error_body() {
        let router = Router::new().route(
            "/music/compare",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "detail": "No songs found in database" })),
                )
            }),
        );
        let base = serve(router).await;

        let e = backend(&base).send_compare(&request()).await.unwrap_err();
        assert_eq!(e, Error::Backend("No songs found in database".into()));
    }

    #[tokio::test]
    async fn builds_message_from_status_without_json() {
        let router = Router::new().route(
            "/music/compare",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream died").into_response() }),
        );
        let base = serve(router).await;

        let e = backend(&base).send_compare(&request()).await.unwrap_err();
        assert_eq!(e, Error::Backend("Server error: 502 Bad Gateway".into()));
    }

    #[tokio::test]
    async fn connection_failure_names_endpoint() {
        // bind then drop so nothing listens on the port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let e = backend(&base).send_compare(&request()).await.unwrap_err();
        assert_eq!(e, Error::Unreachable { endpoint: base.clone() });
        assert!(String::from(e).contains(&base));
    }

    #[tokio::test]
    async fn garbage_success_body_is_a_decode_error() {
        let router = Router::new().route("/music/compare", post(|| async { "ok" }));
        let base = serve(router).await;

        let e = backend(&base).send_compare(&request()).await.unwrap_err();
        assert!(matches!(e, Error::Decode(_)));
    }

    #[tokio::test]
    async fn executes_compare_command_with_its_ticket() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let command = Command::Compare {
            ticket: 7,
            request: request(),
        };
        match execute(&backend(&base), command).await {
            SearchEvent::Completed { ticket, outcome } => {
                assert_eq!(ticket, 7);
                assert_eq!(outcome, Err(Error::Unreachable { endpoint: base }));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
