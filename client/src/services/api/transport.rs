//! # Reqwest Transport
//!
//! Production [`HttpTransport`] built on a pooled `reqwest::Client`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::request::{HttpRequest, HttpResponse, MultipartForm, MultipartPart, RequestBody};
use crate::core::error::TransportError;
use crate::core::service::HttpTransport;

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self { client }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest { method, url, headers, body } = request;

        let mut builder = self.client.request(method, &url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(&value).map_err(|e| TransportError::other(e.to_string()))?;
                builder.body(bytes)
            }
            RequestBody::Multipart(form) => builder.multipart(into_reqwest_form(form)?),
        };

        let response = builder.send().await?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

fn into_reqwest_form(form: MultipartForm) -> Result<Form, TransportError> {
    form.into_parts().into_iter().try_fold(Form::new(), |acc, part| {
        Ok(match part {
            MultipartPart::Text { name, value } => acc.text(name, value),
            MultipartPart::File { name, file_name, mime_type, bytes } => {
                let mut file = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file.mime_str(&mime)?;
                }
                acc.part(name, file)
            }
        })
    })
}
