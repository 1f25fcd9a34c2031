use serde::{Deserialize, Serialize};

/// Body of `POST /music/compare`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonRequest {
    pub user_uid: String,
    pub youtube_url: String,
}

/// Best match the backend found for a submitted song.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub matched_song: String,
    pub matched_url: String,
    pub similarity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_bpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_id: Option<i64>,
}

impl ComparisonResult {
    pub fn similarity_percent(&self) -> String {
        format!("{:.1}%", self.similarity * 100.0)
    }

    pub fn bpm(&self) -> Option<String> {
        self.uploaded_bpm.map(|bpm| bpm.to_string())
    }

    pub fn key(&self) -> Option<&str> {
        self.uploaded_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// Error body of the backend, `{"detail": ...}`. FastAPI style validation errors put a list in `detail`.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

#[cfg(feature = "ssr")]
impl ErrorDetail {
    /// Message for a non-success answer, given its raw body and status line.
    pub fn message(body: &str, status: u16, reason: &str) -> String {
        match serde_json::from_str::<ErrorDetail>(body) {
            Ok(ErrorDetail {
                detail: Some(serde_json::Value::String(detail)),
            }) if !detail.is_empty() => detail,
            Ok(ErrorDetail {
                detail: Some(detail),
            }) if !detail.is_null() && !detail.is_string() => detail.to_string(),
            Ok(_) => format!("Error: {}", reason),
            Err(_) => format!("Server error: {} {}", status, reason),
        }
    }
}
