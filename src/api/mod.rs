use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{AppError, ErrorResponse};
use crate::models::{LoginRequest, LoginResponse, Profile, RegisterRequest, Tugas, TugasRequest};
use crate::session::TokenStore;

#[async_trait]
pub trait TugasApi: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError>;
    async fn register(&self, req: &RegisterRequest) -> Result<(), AppError>;
    async fn fetch_profile(&self) -> Result<Profile, AppError>;
    async fn logout(&self) -> Result<(), AppError>;
    async fn fetch_tugas(&self) -> Result<Vec<Tugas>, AppError>;
    async fn create_tugas(&self, req: &TugasRequest) -> Result<Tugas, AppError>;
    async fn update_tugas(&self, id: &str, req: &TugasRequest) -> Result<(), AppError>;
    async fn delete_tugas(&self, id: &str) -> Result<(), AppError>;
}

pub struct HttpTugasApi {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpTugasApi {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request, attaching the stored bearer token when there is one.
    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(token) = self.tokens.load().await? {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder, label: &str) -> Result<Response, AppError> {
        debug!("{} request", label);
        let response = builder.send().await.map_err(|e| {
            warn!("{} request failed: {}", label, e);
            AppError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(ErrorResponse::into_message);
            warn!("{} returned {}: {}", label, status, body);
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        label: &str,
    ) -> Result<T, AppError> {
        let response = self.send(builder, label).await?;
        let body_text = response.text().await?;
        serde_json::from_str::<T>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", label, e);
            AppError::Serialization(e)
        })
    }
}

#[async_trait]
impl TugasApi for HttpTugasApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        let builder = self.request(Method::POST, "/auth/login").await?.json(req);
        self.send_json(builder, "POST /auth/login").await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<(), AppError> {
        let builder = self.request(Method::POST, "/auth/register").await?.json(req);
        self.send(builder, "POST /auth/register").await?;
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<Profile, AppError> {
        let builder = self.request(Method::GET, "/profile").await?;
        self.send_json(builder, "GET /profile").await
    }

    async fn logout(&self) -> Result<(), AppError> {
        let builder = self.request(Method::POST, "/profile/logout").await?;
        self.send(builder, "POST /profile/logout").await?;
        Ok(())
    }

    async fn fetch_tugas(&self) -> Result<Vec<Tugas>, AppError> {
        let builder = self.request(Method::GET, "/tugas").await?;
        self.send_json(builder, "GET /tugas").await
    }

    async fn create_tugas(&self, req: &TugasRequest) -> Result<Tugas, AppError> {
        let builder = self.request(Method::POST, "/tugas").await?.json(req);
        self.send_json(builder, "POST /tugas").await
    }

    async fn update_tugas(&self, id: &str, req: &TugasRequest) -> Result<(), AppError> {
        let path = format!("/tugas/{}", id);
        let builder = self.request(Method::PUT, &path).await?.json(req);
        self.send(builder, "PUT /tugas/:id").await?;
        Ok(())
    }

    async fn delete_tugas(&self, id: &str) -> Result<(), AppError> {
        let path = format!("/tugas/{}", id);
        let builder = self.request(Method::DELETE, &path).await?;
        self.send(builder, "DELETE /tugas/:id").await?;
        Ok(())
    }
}
