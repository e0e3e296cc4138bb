//! The configured REST client every domain API goes through.

use crate::api::{AnalyticsApi, AuthApi, MailApi, PaymentsApi, StudentsApi, TutorsApi};
use crate::query::to_query_pairs;
use crate::transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tutoradmin_core::config::ClientConfig;
use tutoradmin_core::envelope::{Envelope, EnvelopeStatus};
use tutoradmin_core::error::{AdminError, Result};
use tutoradmin_core::session::SessionStore;
use uuid::Uuid;

/// How a successful body should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseType {
    #[default]
    Json,
    Blob,
}

/// Per-request query, body and response handling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub response_type: ResponseType,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the flattened fields of `params` to the query string.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        self.query.extend(to_query_pairs(params)?);
        Ok(self)
    }

    /// Sets a JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn blob(mut self) -> Self {
        self.response_type = ResponseType::Blob;
        self
    }
}

/// REST client bound to a base URL and a shared [`SessionStore`].
///
/// Reads the session on every request to attach the bearer token but never
/// writes to it; session writes belong to [`AuthApi`]'s sign-in flows.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
    cancellation: Option<CancellationToken>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionStore>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
            cancellation: None,
        }
    }

    /// Builds a client over [`ReqwestTransport`] using `config`'s URL and timeouts.
    pub fn from_config(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(
            config.api_base_url.clone(),
            Arc::new(transport),
            session,
        ))
    }

    /// Returns a copy of this client whose requests are abandoned once `token` fires.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi::new(self)
    }

    pub fn tutors(&self) -> TutorsApi<'_> {
        TutorsApi::new(self)
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    pub fn mail(&self) -> MailApi<'_> {
        MailApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    // ============================================================================
    // Raw request
    // ============================================================================

    /// Sends one request and returns the raw 2xx response.
    ///
    /// Non-2xx statuses become `Transport` errors carrying whatever message and
    /// field errors the body holds.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<RawResponse> {
        let url = self.build_url(path, &options.query)?;
        let request_id = Uuid::new_v4().to_string();

        let mut headers = vec![
            ("Accept".to_string(), accept_header(options.response_type).to_string()),
            ("x-request-id".to_string(), request_id.clone()),
        ];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method: method.clone(),
            url,
            headers,
            body: options.body,
        };

        tracing::debug!(
            request_id = %request_id,
            "[ApiClient] {} {}",
            method,
            path
        );

        let response = self.execute(request).await?;

        if !response.is_success() {
            let error = EnvelopeStatus::parse(&response.body)
                .unwrap_or_default()
                .into_transport_error(response.status);
            tracing::warn!(
                request_id = %request_id,
                "[ApiClient] {} {} failed with status {}",
                method,
                path,
                response.status
            );
            return Err(error);
        }

        tracing::debug!(
            request_id = %request_id,
            "[ApiClient] {} {} -> {}",
            method,
            path,
            response.status
        );
        Ok(response)
    }

    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let Some(token) = &self.cancellation else {
            return self.transport.execute(request).await;
        };

        if token.is_cancelled() {
            return Err(AdminError::Cancelled);
        }

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(AdminError::Cancelled),
            result = self.transport.execute(request) => result,
        };

        // A response that lands after cancellation is discarded.
        if token.is_cancelled() {
            return Err(AdminError::Cancelled);
        }
        result
    }

    fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<String> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        let mut url = Url::parse(&joined)
            .map_err(|e| AdminError::config(format!("Invalid URL '{}': {}", joined, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url.into())
    }

    // ============================================================================
    // Typed helpers
    // ============================================================================

    /// Sends a request and unwraps the envelope's `data` as `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let response = self.request(method, path, options).await?;
        decode_envelope(&response.body)
    }

    /// Sends a request whose success carries no payload.
    pub async fn send_empty(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<()> {
        let response = self.request(method, path, options).await?;
        check_rejected(&response)
    }

    /// Sends a request and returns the body bytes untouched.
    pub async fn get_bytes(&self, path: &str, options: RequestOptions) -> Result<Vec<u8>> {
        let response = self.request(Method::GET, path, options.blob()).await?;
        check_rejected(&response)?;
        Ok(response.body)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.send(Method::GET, path, options).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.send(Method::POST, path, options).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.send(Method::PUT, path, options).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.send(Method::PATCH, path, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.send(Method::DELETE, path, options).await
    }

    pub async fn post_empty(&self, path: &str, options: RequestOptions) -> Result<()> {
        self.send_empty(Method::POST, path, options).await
    }

    pub async fn patch_empty(&self, path: &str, options: RequestOptions) -> Result<()> {
        self.send_empty(Method::PATCH, path, options).await
    }

    pub async fn delete_empty(&self, path: &str, options: RequestOptions) -> Result<()> {
        self.send_empty(Method::DELETE, path, options).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("cancellable", &self.cancellation.is_some())
            .finish_non_exhaustive()
    }
}

fn accept_header(response_type: ResponseType) -> &'static str {
    match response_type {
        ResponseType::Json => "application/json",
        ResponseType::Blob => "*/*",
    }
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if let Some(status) = EnvelopeStatus::parse(body)
        && status.is_rejected()
    {
        return Err(status.into_rejected_error());
    }
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| AdminError::decode(e.to_string()))?;
    envelope.into_data()
}

fn check_rejected(response: &RawResponse) -> Result<()> {
    let is_json = response
        .content_type
        .as_deref()
        .is_none_or(|ct| ct.contains("json"));
    if is_json
        && let Some(status) = EnvelopeStatus::parse(&response.body)
        && status.is_rejected()
    {
        return Err(status.into_rejected_error());
    }
    Ok(())
}

/// Percent-encodes an identifier so it stays a single path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
