//! Remote search-suggestion lookups.
//!
//! Engines expose an OpenSearch suggestions endpoint whose URL template
//! contains `{searchTerms}`. The response body is a JSON array whose second
//! element lists the suggestion strings.

use async_trait::async_trait;
use url::form_urlencoded;

use crate::types::errors::SearchFetchError;
use crate::types::search::SEARCH_TERMS_PLACEHOLDER;

#[async_trait]
pub trait SearchSuggestionClient: Send + Sync {
    async fn fetch_suggestions(
        &self,
        url_template: &str,
        query: &str,
    ) -> Result<Vec<String>, SearchFetchError>;
}

/// Substitutes the form-encoded `query` into an autocomplete template.
pub fn build_autocomplete_url(url_template: &str, query: &str) -> Result<String, SearchFetchError> {
    if !url_template.contains(SEARCH_TERMS_PLACEHOLDER) {
        return Err(SearchFetchError::InvalidTemplate(url_template.to_string()));
    }
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    let url = url_template.replace(SEARCH_TERMS_PLACEHOLDER, &encoded);
    url::Url::parse(&url).map_err(|e| SearchFetchError::InvalidTemplate(format!("{url}: {e}")))?;
    Ok(url)
}

/// Extracts the suggestion list from an OpenSearch `[query, [s1, s2, ...]]` body.
pub fn parse_open_search_response(body: &str) -> Result<Vec<String>, SearchFetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchFetchError::ParseError(e.to_string()))?;
    let suggestions = value
        .get(1)
        .and_then(|v| v.as_array())
        .ok_or_else(|| SearchFetchError::ParseError("missing suggestion array".into()))?;
    Ok(suggestions
        .iter()
        .filter_map(|s| s.as_str())
        .map(str::to_string)
        .collect())
}

/// HTTP client for live engines.
#[cfg(feature = "network")]
pub struct HttpSearchClient {
    http: reqwest::Client,
}

#[cfg(feature = "network")]
impl HttpSearchClient {
    const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

    pub fn new() -> Result<Self, SearchFetchError> {
        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| SearchFetchError::NetworkError(e.to_string()))?;
        Ok(Self { http })
    }
}

#[cfg(feature = "network")]
#[async_trait]
impl SearchSuggestionClient for HttpSearchClient {
    async fn fetch_suggestions(
        &self,
        url_template: &str,
        query: &str,
    ) -> Result<Vec<String>, SearchFetchError> {
        let url = build_autocomplete_url(url_template, query)?;
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SearchFetchError::NetworkError(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| SearchFetchError::NetworkError(e.to_string()))?;
        parse_open_search_response(&body)
    }
}

/// Client that never leaves the machine and always answers with nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSearchClient;

#[async_trait]
impl SearchSuggestionClient for OfflineSearchClient {
    async fn fetch_suggestions(
        &self,
        url_template: &str,
        query: &str,
    ) -> Result<Vec<String>, SearchFetchError> {
        build_autocomplete_url(url_template, query)?;
        Ok(Vec::new())
    }
}
