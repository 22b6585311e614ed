//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with Basic credentials.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use guestbook_api::{create_app, create_app_state};
use guestbook_common::AppConfig;
use guestbook_db::{create_pool, PgPool};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::fixtures::Credentials;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Side channel for reading what the API only logs
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let pool = create_pool(&config.database).await?;

        // Migrations run here when enabled
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn with_auth(builder: RequestBuilder, creds: &Credentials) -> RequestBuilder {
        builder.basic_auth(&creds.email, Some(&creds.password))
    }

    /// Make an anonymous GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with Basic credentials
    pub async fn get_auth(&self, path: &str, creds: &Credentials) -> Result<Response> {
        let builder = Self::with_auth(self.client.get(self.url(path)), creds);
        Ok(builder.send().await?)
    }

    /// Make an anonymous POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make an anonymous POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a POST request with Basic credentials
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        creds: &Credentials,
        body: Option<&T>,
    ) -> Result<Response> {
        let mut builder = Self::with_auth(self.client.post(self.url(path)), creds);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    /// Make a PATCH request with Basic credentials
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        creds: &Credentials,
        body: &T,
    ) -> Result<Response> {
        let builder = Self::with_auth(self.client.patch(self.url(path)), creds);
        Ok(builder.json(body).send().await?)
    }

    /// Make a DELETE request with Basic credentials
    pub async fn delete_auth(&self, path: &str, creds: &Credentials) -> Result<Response> {
        let builder = Self::with_auth(self.client.delete(self.url(path)), creds);
        Ok(builder.send().await?)
    }

    /// Activation token issued for `email`
    ///
    /// The API only writes it to the log, so read it from the table.
    pub async fn activation_token(&self, email: &str) -> Result<Uuid> {
        let token = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT t.token
            FROM activation_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE u.email = $1
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(token)
    }

    /// Register and activate a fresh account
    pub async fn active_user(&self) -> Result<Credentials> {
        let creds = Credentials::unique();
        assert_status(self.post("/register", &creds).await?, StatusCode::CREATED).await?;

        let token = self.activation_token(&creds.email).await?;
        let response = self.post_empty(&format!("/activate?token={token}")).await?;
        assert_status(response, StatusCode::OK).await?;

        Ok(creds)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
