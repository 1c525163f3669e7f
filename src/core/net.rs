// src/core/net.rs

// Blocking HTTP helpers. Every request goes through one shared `Client`.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::error::{Result, ScrapeError};

pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// GET `url` with query parameters; non-200 is an error.
pub fn http_get(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<Response> {
    let resp = client.get(url).query(query).send()?;
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(ScrapeError::Status { status: status.as_u16(), url: url.to_string() });
    }
    Ok(resp)
}

/// GET and decode the body as text (charset from headers, UTF-8 otherwise).
pub fn http_get_text(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<String> {
    Ok(http_get(client, url, query)?.text()?)
}

pub fn http_get_json(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<serde_json::Value> {
    Ok(http_get(client, url, query)?.json()?)
}
