//! Low-level HTTP helpers for page fetches and redirect expansion.

use reqwest::Url;

use crate::error::FetchError;

/// Fetch the body of `url` as text with a browser-like user agent.
pub(crate) async fn fetch_page_text(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::UnexpectedStatus {
            status: response.status().as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response.text().await?)
}

/// Follow the redirects of a short link and return the landed URL.
///
/// Falls back to the input URL on any failure, so a failed expansion behaves
/// exactly as if the short link had been passed through untouched.
pub(crate) async fn expand_short_link(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
) -> String {
    match follow_redirects(client, url, user_agent).await {
        Ok(landed) => {
            tracing::debug!(url, landed = %landed, "expanded short link");
            landed
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "short link expansion failed; keeping original URL");
            url.to_owned()
        }
    }
}

/// `HEAD` first to skip the body; some redirectors only redirect `GET`, so
/// a `HEAD` that lands where it started is retried as `GET`.
async fn follow_redirects(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
) -> Result<String, FetchError> {
    let requested = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    let head = client
        .head(requested.clone())
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await?;
    if head.url() != &requested {
        return Ok(head.url().to_string());
    }

    tracing::debug!(url, "HEAD did not redirect; retrying with GET");
    let get = client
        .get(requested)
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await?;
    Ok(get.url().to_string())
}
