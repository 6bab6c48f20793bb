pub(crate) mod profile;
pub(crate) mod stats;

use ::scraper::ElementRef;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{LeaderboardError, Result};

/// Fetch a URL and return the response body, provided the server answered
/// 200 OK.
pub(crate) async fn get_page(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LeaderboardError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(LeaderboardError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response
        .text()
        .await
        .map_err(|e| LeaderboardError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
}

/// All text inside `element`, trimmed, with line breaks and tabs removed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .trim()
        .replace(['\n', '\t'], "")
}
