//! Remote source: the activities REST API.
//!
//! `RemoteSource` is the seam the board flows are written against; the
//! browser build talks to the server through [`HttpSource`] (fetch via
//! gloo-net), tests plug in an in-memory source.

#![allow(async_fn_in_trait)]

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;

use crate::error::BoardError;
use crate::model::{Activities, SignupRequest};

pub trait RemoteSource {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<Activities, BoardError>;

    /// `POST /activities/{name}/signup?email=...`, returns the server's confirmation.
    async fn sign_up(&self, request: &SignupRequest) -> Result<String, BoardError>;

    /// `DELETE /activities/{name}/unregister?email=...`
    async fn unregister(&self, request: &SignupRequest) -> Result<String, BoardError>;
}

#[derive(Deserialize)]
struct Confirmation {
    message: String,
}

#[derive(Deserialize)]
struct Rejection {
    #[serde(default)]
    detail: Option<Value>,
}

/// Turn a write response into the confirmation text or a `BoardError`.
///
/// A non-2xx body only yields a detail when `detail` is a non-empty string;
/// FastAPI-style validation arrays and empty strings fall back to the
/// generic message.
pub fn decode_reply(status: u16, body: &str) -> Result<String, BoardError> {
    if (200..300).contains(&status) {
        let ok: Confirmation = serde_json::from_str(body)?;
        return Ok(ok.message);
    }

    let rejected: Rejection = serde_json::from_str(body)?;
    let detail = match rejected.detail {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    };
    Err(BoardError::Server { status, detail })
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpSource {
    base: String,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup_url(&self, request: &SignupRequest) -> String {
        self.member_url(request, "signup")
    }

    pub fn unregister_url(&self, request: &SignupRequest) -> String {
        self.member_url(request, "unregister")
    }

    fn member_url(&self, request: &SignupRequest, verb: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base,
            encode(&request.activity),
            verb,
            encode(&request.email)
        )
    }

    async fn reply(resp: Response) -> Result<String, BoardError> {
        let status = resp.status();
        let body = resp.text().await?;
        decode_reply(status, &body)
    }
}

impl RemoteSource for HttpSource {
    async fn fetch_activities(&self) -> Result<Activities, BoardError> {
        let resp = Request::get(&self.activities_url()).send().await?;
        if !resp.ok() {
            return Err(BoardError::Server {
                status: resp.status(),
                detail: None,
            });
        }
        let body = resp.text().await?;
        Activities::from_json(&body)
    }

    async fn sign_up(&self, request: &SignupRequest) -> Result<String, BoardError> {
        let resp = Request::post(&self.signup_url(request)).send().await?;
        Self::reply(resp).await
    }

    async fn unregister(&self, request: &SignupRequest) -> Result<String, BoardError> {
        let resp = Request::delete(&self.unregister_url(request)).send().await?;
        Self::reply(resp).await
    }
}
