use crate::domain::{OutcomeProvider, ProviderReply, TransportError};
use crate::interface_adapters::protocol::SpinResponseDto;
use async_trait::async_trait;
use std::time::Duration;

// Thin reqwest client for the spin service.
#[derive(Clone)]
pub struct HttpOutcomeProvider {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOutcomeProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl OutcomeProvider for HttpOutcomeProvider {
    async fn request_outcome(&self) -> Result<ProviderReply, TransportError> {
        let url = format!("{}/api/spin", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        // Range checks happen in the machine; the service is not trusted.
        response
            .json::<SpinResponseDto>()
            .await
            .map(ProviderReply::from)
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
