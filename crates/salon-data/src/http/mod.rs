//! # HTTP Adapters
//!
//! Repository implementations over the REST backend.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /api/customers                    → [Customer]                 │
//! │  GET    /api/customers/{id}               → Customer                   │
//! │  POST   /api/customers          (dto)     → Customer                   │
//! │  PUT    /api/customers/{id}     (dto)     → Customer                   │
//! │  DELETE /api/customers/{id}               → 2xx                        │
//! │  GET    /api/appointments[?customerId=]   → [Appointment]              │
//! │  ...same shape for /api/appointments/{id}                              │
//! │  GET    /api/staff                        → [Staff]                    │
//! │  GET    /api/services                     → [Service]                  │
//! │                                                                         │
//! │  2xx = success. Anything else, a network failure or a body that does   │
//! │  not decode is a TransportError. One attempt, client default timeouts. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::TransportError;

mod appointment;
mod catalog;
mod customer;

pub use appointment::HttpAppointmentRepository;
pub use catalog::{HttpServiceRepository, HttpStaffRepository};
pub use customer::HttpCustomerRepository;

const JSON: &str = "application/json";

/// Thin JSON client bound to one base URL.
///
/// Shared by every HTTP repository; cloning is cheap (reqwest pools
/// connections internally).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let mut base_url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidEndpoint(base_url.to_string()));
        }

        // Joining relative paths replaces the last segment unless the base
        // ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(HttpClient { client, base_url })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a collection, e.g. `api/customers`.
    pub fn collection(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path)?)
    }

    /// URL of one member of a collection. The id is percent-encoded.
    pub fn member(&self, path: &str, id: &str) -> Result<Url, TransportError> {
        let mut url = self.collection(path)?;
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidEndpoint(self.base_url.to_string()))?
            .push(id);
        Ok(url)
    }

    /// `GET url` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TransportError> {
        debug!(%url, "GET");
        let request = self.client.get(url.clone()).header(ACCEPT, JSON);
        let response = self.execute(request, &url).await?;
        decode(response).await
    }

    /// `POST url` with a JSON body and decode the JSON reply.
    pub async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "POST");
        let request = self.client.post(url.clone());
        let response = self.execute(with_json(request, body)?, &url).await?;
        decode(response).await
    }

    /// `PUT url` with a JSON body and decode the JSON reply.
    pub async fn put_json<B, T>(&self, url: Url, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "PUT");
        let request = self.client.put(url.clone());
        let response = self.execute(with_json(request, body)?, &url).await?;
        decode(response).await
    }

    /// `DELETE url`; any 2xx succeeds and the body is ignored.
    pub async fn delete(&self, url: Url) -> Result<(), TransportError> {
        debug!(%url, "DELETE");
        let request = self.client.delete(url.clone());
        self.execute(request, &url).await?;
        Ok(())
    }

    async fn execute(&self, request: RequestBuilder, url: &Url) -> Result<Response, TransportError> {
        let response = request.send().await.map_err(|e| TransportError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

fn with_json<B: Serialize + ?Sized>(
    request: RequestBuilder,
    body: &B,
) -> Result<RequestBuilder, TransportError> {
    let bytes = serde_json::to_vec(body).map_err(|e| TransportError::Encode(e.to_string()))?;
    Ok(request
        .header(CONTENT_TYPE, JSON)
        .header(ACCEPT, JSON)
        .body(bytes))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
}
