use crate::models::Candidate;
use crate::services::{CandidateRepository, RepositoryError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Appwrite document store holding helper profiles
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    page_size: u32,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection_id: String,
        page_size: u32,
    ) -> Result<Self, AppwriteError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection_id,
            page_size,
            client,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection_id
        )
    }

    /// Query all helpers flagged available and unassigned
    ///
    /// Pages through the collection `page_size` documents at a time until
    /// the reported total is reached or a short page comes back. Documents
    /// that cannot be read as a helper are skipped with a warning.
    pub async fn query_available_candidates(&self) -> Result<Vec<Candidate>, AppwriteError> {
        let page_size = self.page_size.max(1);
        let mut candidates = Vec::new();
        let mut offset: u64 = 0;

        loop {
            let (documents, total) = self.fetch_page(page_size, offset).await?;
            let fetched = documents.len() as u64;
            offset += fetched;

            candidates.extend(
                documents
                    .iter()
                    .filter_map(|doc| match parse_document(doc) {
                        Ok(candidate) => Some(candidate),
                        Err(e) => {
                            tracing::warn!("Skipping malformed helper document: {}", e);
                            None
                        }
                    })
                    .filter(Candidate::is_open),
            );

            let reached_total = total.map_or(false, |total| offset >= total);
            if fetched < u64::from(page_size) || reached_total {
                tracing::debug!(
                    "Queried {} helpers over {} documents (total: {:?})",
                    candidates.len(),
                    offset,
                    total
                );
                return Ok(candidates);
            }
        }
    }

    /// Fetch one page of open helper documents with the reported total
    async fn fetch_page(
        &self,
        page_size: u32,
        offset: u64,
    ) -> Result<(Vec<Value>, Option<u64>), AppwriteError> {
        let queries = [
            r#"equal("isAvailable", true)"#.to_string(),
            r#"equal("isAssigned", false)"#.to_string(),
            format!("limit({})", page_size),
            format!("offset({})", offset),
        ];

        let query_string = queries
            .iter()
            .map(|q| format!("queries[]={}", urlencoding::encode(q)))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}?{}", self.documents_url(), query_string);

        tracing::debug!("Querying available helpers from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppwriteError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AppwriteError::ApiError(format!(
                "Failed to query helpers: {}",
                status
            )));
        }

        let mut json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64());

        let documents = match json.get_mut("documents").map(Value::take) {
            Some(Value::Array(documents)) => documents,
            _ => {
                return Err(AppwriteError::InvalidResponse(
                    "Missing documents array".into(),
                ))
            }
        };

        Ok((documents, total))
    }

    /// Check that the collection is reachable with the configured key
    pub async fn ping(&self) -> Result<(), AppwriteError> {
        let url = format!(
            "{}?queries[]={}",
            self.documents_url(),
            urlencoding::encode("limit(1)")
        );

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppwriteError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

/// Read a helper from an Appwrite document, falling back to `$id` for the id
fn parse_document(doc: &Value) -> Result<Candidate, AppwriteError> {
    let mut data = doc.get("data").unwrap_or(doc).clone();

    if let Some(obj) = data.as_object_mut() {
        if !obj.contains_key("id") {
            if let Some(doc_id) = doc.get("$id").cloned() {
                obj.insert("id".to_string(), doc_id);
            }
        }
    }

    serde_json::from_value(data)
        .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to parse helper: {}", e)))
}

#[async_trait]
impl CandidateRepository for AppwriteClient {
    async fn available_candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.query_available_candidates().await?)
    }

    async fn health_check(&self) -> bool {
        self.ping().await.is_ok()
    }

    fn name(&self) -> &'static str {
        "appwrite"
    }
}
