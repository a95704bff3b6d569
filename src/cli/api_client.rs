use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::env;

use crate::cli::error::{CliError, CliResult};
use crate::cli::models::{Board, BoardInput, Card, CardInput, List, ListInput, MoveInput};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// API client for communicating with the taskboard REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. TASKBOARD_API_URL environment variable
    /// 3. Default: http://localhost:3000
    pub fn new(api_url: Option<String>) -> Self {
        // reqwest is built without a bundled provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var("TASKBOARD_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url)
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url)
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.put(&url)
    }

    /// Create a DELETE request builder
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.delete(&url)
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// or a CliError::ApiError on non-success status codes.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Like `handle_response` for endpoints that answer 204 without a body.
    pub async fn handle_empty(response: Response) -> CliResult<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> CliError {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        // Prefer the `error` field of the JSON error body
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_string))
            .unwrap_or(text);
        CliError::ApiError { status, message }
    }

    // =========================================================================
    // Boards
    // =========================================================================

    pub async fn list_boards(&self) -> CliResult<Vec<Board>> {
        Self::handle_response(self.get("/boards").send().await?).await
    }

    pub async fn get_board(&self, id: &str) -> CliResult<Board> {
        Self::handle_response(self.get(&format!("/boards/{}", id)).send().await?).await
    }

    pub async fn create_board(&self, input: &BoardInput) -> CliResult<Board> {
        Self::handle_response(self.post("/boards").json(input).send().await?).await
    }

    pub async fn update_board(&self, id: &str, input: &BoardInput) -> CliResult<Board> {
        let response = self
            .put(&format!("/boards/{}", id))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn delete_board(&self, id: &str) -> CliResult<()> {
        Self::handle_empty(self.delete(&format!("/boards/{}", id)).send().await?).await
    }

    // =========================================================================
    // Lists
    // =========================================================================

    pub async fn list_lists(&self, board_id: &str) -> CliResult<Vec<List>> {
        let response = self.get(&format!("/boards/{}/lists", board_id)).send().await?;
        Self::handle_response(response).await
    }

    pub async fn create_list(&self, board_id: &str, input: &ListInput) -> CliResult<List> {
        let response = self
            .post(&format!("/boards/{}/lists", board_id))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn update_list(&self, id: &str, input: &ListInput) -> CliResult<List> {
        let response = self
            .put(&format!("/lists/{}", id))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn delete_list(&self, id: &str) -> CliResult<()> {
        Self::handle_empty(self.delete(&format!("/lists/{}", id)).send().await?).await
    }

    // =========================================================================
    // Cards
    // =========================================================================

    pub async fn list_cards(&self, list_id: &str) -> CliResult<Vec<Card>> {
        let response = self.get(&format!("/lists/{}/cards", list_id)).send().await?;
        Self::handle_response(response).await
    }

    pub async fn create_card(&self, list_id: &str, input: &CardInput) -> CliResult<Card> {
        let response = self
            .post(&format!("/lists/{}/cards", list_id))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn update_card(&self, id: &str, input: &CardInput) -> CliResult<Card> {
        let response = self
            .put(&format!("/cards/{}", id))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn move_card(&self, id: &str, input: &MoveInput) -> CliResult<Card> {
        let response = self
            .put(&format!("/cards/{}/move", id))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn delete_card(&self, id: &str) -> CliResult<()> {
        Self::handle_empty(self.delete(&format!("/cards/{}", id)).send().await?).await
    }
}
