use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// The wire payload of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayResponse {
    /// 2xx answer; `message` is the server-supplied success text.
    Success { message: String },
    /// Non-2xx answer; `error` is the server-supplied error text, if any.
    Error { error: Option<String> },
}

#[derive(Debug, Error)]
pub enum RelayClientError {
    #[error("Failed to reach the contact relay")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayClient: Send + Sync + 'static {
    fn send(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = Result<RelayResponse, RelayClientError>> + Send;
}

#[cfg(feature = "mock")]
impl MockRelayClient {
    pub fn with_send(
        mut self,
        request: ContactRequest,
        result: Result<RelayResponse, RelayClientError>,
    ) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

/// Talks to a running relay over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpRelayClient {
    /// `base_url` is the address the portfolio is served from, e.g.
    /// `http://127.0.0.1:8000/`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: base_url.join("api/contact")?,
            client: reqwest::Client::new(),
        })
    }
}

impl RelayClient for HttpRelayClient {
    async fn send(&self, request: &ContactRequest) -> Result<RelayResponse, RelayClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            #[derive(Deserialize)]
            struct SuccessBody {
                message: String,
            }

            let body: SuccessBody = response.json().await?;
            Ok(RelayResponse::Success {
                message: body.message,
            })
        } else {
            #[derive(Deserialize)]
            struct ErrorBody {
                error: Option<String>,
            }

            let error = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            Ok(RelayResponse::Error { error })
        }
    }
}
