use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Uniform success/failure wrapper around every API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Thin JSON client over the public API.
///
/// Holds a connection pool internally; clone freely.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(config.default_language.code()),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let response = self.http.get(self.url(endpoint)).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_envelope(status, &body)
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.http.post(self.url(endpoint)).json(body).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        decode_envelope(status, &bytes)
    }

    /// POST where the acknowledgment carries no data payload; returns
    /// the envelope's message, if any.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_ack<B>(&self, endpoint: &str, body: &B) -> ApiResult<Option<String>>
    where
        B: Serialize + ?Sized,
    {
        let response = self.http.post(self.url(endpoint)).json(body).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        decode_ack(status, &bytes)
    }
}

fn parse_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<ApiEnvelope<T>> {
    let envelope: ApiEnvelope<T> = serde_json::from_slice(body).map_err(|err| ApiError::Server {
        status,
        message: format!("Malformed response: {}", err),
    })?;

    let message = || {
        envelope
            .message
            .clone()
            .unwrap_or_else(|| "Request failed".to_string())
    };

    if status == 409 {
        return Err(ApiError::Conflict(message()));
    }
    if !(200..300).contains(&status) || !envelope.success {
        return Err(ApiError::Server {
            status,
            message: message(),
        });
    }
    Ok(envelope)
}

fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<T> {
    let envelope = parse_envelope::<T>(status, body)?;
    envelope.data.ok_or(ApiError::Server {
        status,
        message: "Response is missing its data payload".to_string(),
    })
}

fn decode_ack(status: u16, body: &[u8]) -> ApiResult<Option<String>> {
    let envelope = parse_envelope::<serde_json::Value>(status, body)?;
    Ok(envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let body = br#"{"success": true, "data": [1, 2, 3]}"#;
        let data: Vec<i64> = decode_envelope(200, body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn failure_envelope_on_2xx_is_a_server_error() {
        let body = br#"{"success": false, "message": "Service disabled"}"#;
        let err = decode_envelope::<Vec<i64>>(200, body).unwrap_err();
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "Service disabled");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn conflict_status_maps_to_conflict() {
        let body = br#"{"success": false, "message": "Slot no longer available"}"#;
        let err = decode_ack(409, body).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(m) if m == "Slot no longer available"));
    }

    #[test]
    fn malformed_body_is_a_server_error() {
        let err = decode_envelope::<Vec<i64>>(500, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    fn ack_without_data_succeeds() {
        let body = br#"{"success": true, "message": "Appointment booked"}"#;
        let ack = decode_ack(201, body).unwrap();
        assert_eq!(ack.as_deref(), Some("Appointment booked"));
    }
}
