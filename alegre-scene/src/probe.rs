//! Resource existence probing

use tracing::debug;

/// HEAD-check whether a resource exists and is fetchable.
///
/// Any transport error or non-success status yields `false`; the caller
/// hides the affected element and the page stays usable. No timeout is
/// enforced; a slow probe only delays the element it gates.
pub async fn head_ok(client: &reqwest::Client, url: &str) -> bool {
    match client.head(url).send().await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            debug!(url, "Existence probe failed: {e}");
            false
        }
    }
}
