//! HTTP access to the stats page

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client,
};

/// Build a client that sends `user_agent` on every request.
pub fn build_client(user_agent: &str) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).map_err(|_| crate::StatsError::DependencyMissing {
            what: format!("valid User-Agent header (got {user_agent:?})"),
        })?,
    );
    Ok(Client::builder().default_headers(headers).build()?)
}

/// GET `url` once and return the body.
///
/// Transport failures and non-success statuses both surface as
/// `StatsError::Fetch`; there is no retry.
pub async fn fetch_stats_page(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "fetching stats page");

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    tracing::debug!(bytes = body.len(), "stats page fetched");
    Ok(body)
}
