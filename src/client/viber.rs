use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use super::{
    DecisionTelecomError, HttpOptions, HttpResponse, HttpTransport, ReqwestTransport, endpoint,
};
use crate::domain::{
    ApiKey, ViberMessage, ViberMessageId, ViberMessageReceipt, ViberPlusSmsMessage,
    ViberPlusSmsMessageReceipt,
};
use crate::transport::{
    decode_viber_plus_sms_status_response, decode_viber_send_response,
    decode_viber_status_response, encode_viber_message_json, encode_viber_plus_sms_message_json,
    encode_viber_status_json,
};

const DEFAULT_BASE_URL: &str = "https://web.it-decision.com/v1/api";

/// Shared state of the Viber clients. Not `Debug`: it holds the encoded API key.
#[derive(Clone)]
struct ViberGateway {
    authorization: String,
    send_endpoint: String,
    status_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl ViberGateway {
    fn new(api_key: &ApiKey, base_url: &str, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            authorization: format!("Basic {}", STANDARD.encode(api_key.as_str())),
            send_endpoint: endpoint(base_url, "send-viber"),
            status_endpoint: endpoint(base_url, "receive-viber"),
            http,
        }
    }

    fn with_default_transport(api_key: &ApiKey) -> Self {
        Self::new(
            api_key,
            DEFAULT_BASE_URL,
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    async fn post(
        &self,
        endpoint: &str,
        body: Result<Vec<u8>, serde_json::Error>,
    ) -> Result<HttpResponse, DecisionTelecomError> {
        let body = body.map_err(DecisionTelecomError::Encode)?;
        log::debug!("POST {endpoint}");
        self.http
            .post_json(endpoint, &self.authorization, body)
            .await
            .map_err(DecisionTelecomError::Transport)
    }

    async fn send(
        &self,
        body: Result<Vec<u8>, serde_json::Error>,
    ) -> Result<ViberMessageId, DecisionTelecomError> {
        let response = self.post(&self.send_endpoint, body).await?;
        Ok(decode_viber_send_response(&response.raw())?)
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ViberClient`] and [`ViberPlusSmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ViberClientBuilder {
    api_key: ApiKey,
    base_url: String,
    http: HttpOptions,
}

impl ViberClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: HttpOptions::default(),
        }
    }

    /// Override the base URL; `send-viber` and `receive-viber` are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ViberClient`].
    pub fn build(self) -> Result<ViberClient, DecisionTelecomError> {
        Ok(ViberClient {
            gateway: self.into_gateway()?,
        })
    }

    /// Build a [`ViberPlusSmsClient`] with the same settings.
    pub fn build_plus_sms(self) -> Result<ViberPlusSmsClient, DecisionTelecomError> {
        Ok(ViberPlusSmsClient {
            gateway: self.into_gateway()?,
        })
    }

    fn into_gateway(self) -> Result<ViberGateway, DecisionTelecomError> {
        Url::parse(&self.base_url)?;
        let client = self.http.build_client()?;
        Ok(ViberGateway::new(
            &self.api_key,
            &self.base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// Client for Viber messages.
///
/// Requests are JSON `POST`s to `https://web.it-decision.com/v1/api/{send-viber,receive-viber}`
/// authenticated with `Authorization: Basic base64(api_key)`.
pub struct ViberClient {
    gateway: ViberGateway,
}

impl ViberClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`ViberClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            gateway: ViberGateway::with_default_transport(&api_key),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> ViberClientBuilder {
        ViberClientBuilder::new(api_key)
    }

    /// Send a Viber message and return its id.
    ///
    /// Errors:
    /// - [`DecisionTelecomError::Transport`] when no response was received,
    /// - [`DecisionTelecomError::Gateway`] for non-2xx statuses, Viber error objects, or
    ///   bodies without `message_id`.
    pub async fn send_message(
        &self,
        message: &ViberMessage,
    ) -> Result<ViberMessageId, DecisionTelecomError> {
        self.gateway.send(encode_viber_message_json(message)).await
    }

    /// Get the id and status of a previously sent Viber message.
    pub async fn get_message_status(
        &self,
        message_id: ViberMessageId,
    ) -> Result<ViberMessageReceipt, DecisionTelecomError> {
        let response = self
            .gateway
            .post(
                &self.gateway.status_endpoint,
                encode_viber_status_json(message_id),
            )
            .await?;
        Ok(decode_viber_status_response(&response.raw())?)
    }
}

#[derive(Clone)]
/// Client for Viber messages with SMS fallback.
///
/// Uses the same endpoints and authentication as [`ViberClient`]; the request carries an
/// extra `text_sms` field and the status also reports the fallback SMS.
pub struct ViberPlusSmsClient {
    gateway: ViberGateway,
}

impl ViberPlusSmsClient {
    /// Create a client using the default base URL.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            gateway: ViberGateway::with_default_transport(&api_key),
        }
    }

    /// Start building a client with custom settings; finish with
    /// [`ViberClientBuilder::build_plus_sms`].
    pub fn builder(api_key: ApiKey) -> ViberClientBuilder {
        ViberClientBuilder::new(api_key)
    }

    /// Send a Viber message with SMS fallback and return its id.
    pub async fn send_message(
        &self,
        message: &ViberPlusSmsMessage,
    ) -> Result<ViberMessageId, DecisionTelecomError> {
        self.gateway
            .send(encode_viber_plus_sms_message_json(message))
            .await
    }

    /// Get the Viber status and, when present, the fallback SMS id and status.
    pub async fn get_message_status(
        &self,
        message_id: ViberMessageId,
    ) -> Result<ViberPlusSmsMessageReceipt, DecisionTelecomError> {
        let response = self
            .gateway
            .post(
                &self.gateway.status_endpoint,
                encode_viber_status_json(message_id),
            )
            .await?;
        Ok(decode_viber_plus_sms_status_response(&response.raw())?)
    }
}
