//! Client layer: issues HTTP requests and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use url::Url;

use crate::domain::ValidationError;
use crate::transport::{GatewayError, RawResponse};

#[cfg(test)]
mod fake;
mod sms;
mod viber;

pub use sms::{SmsAuth, SmsClient, SmsClientBuilder};
pub use viber::{ViberClient, ViberClientBuilder, ViberPlusSmsClient};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    fn raw(&self) -> RawResponse<'_> {
        RawResponse::new(self.status, &self.body)
    }
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::AUTHORIZATION, authorization)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .header(reqwest::header::ACCEPT, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClient`], [`ViberClient`] and [`ViberPlusSmsClient`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, timeouts), passed through unmodified,
/// - classified gateway responses (non-2xx status, SMS or Viber domain error, decode failure),
/// - request encoding and validation failures.
pub enum DecisionTelecomError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The gateway answered, but not with a success value.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl DecisionTelecomError {
    /// Borrow the classified gateway error, if any.
    pub fn gateway(&self) -> Option<&GatewayError> {
        match self {
            Self::Gateway(error) => Some(error),
            _ => None,
        }
    }
}

/// HTTP client settings shared by the client builders.
#[derive(Debug, Clone, Default)]
struct HttpOptions {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpOptions {
    fn build_client(self) -> Result<reqwest::Client, DecisionTelecomError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder
            .build()
            .map_err(|err| DecisionTelecomError::Transport(Box::new(err)))
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}

/// Endpoint path for logging; never includes the query string.
fn log_target(url: &Url) -> &str {
    url.path()
}
