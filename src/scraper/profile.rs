use ::scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{CtfClass, PlayerStatSet};
use crate::scraper::stats::parse_class_stats;

/// Comment preceding the CTF statistics on a profile page.
pub const CTF_MARKER: &str = "<!-- CTF Stats -->";

const CONTAINER_SELECTOR: &str = "div.ctf-stats";

#[instrument(skip(client))]
pub(crate) async fn get_player_stats(
    client: &reqwest::Client,
    host: &str,
    name: &str,
) -> Result<PlayerStatSet> {
    let url = format!("http://{host}/players/{name}");
    let body = crate::scraper::get_page(client, &url).await?;
    let stats = parse_profile(&body)?;
    debug!(classes = stats.len(), "parsed player profile");
    Ok(stats)
}

/// Extract every class stat block from a profile page.
///
/// A page without the CTF marker or the stats container yields an empty set.
/// Classes whose values cannot be parsed are skipped with a warning.
pub(crate) fn parse_profile(body: &str) -> Result<PlayerStatSet> {
    let mut stats = PlayerStatSet::new();

    let Some(start) = body.find(CTF_MARKER) else {
        debug!("no CTF section on page");
        return Ok(stats);
    };
    let section = Html::parse_fragment(&body[start + CTF_MARKER.len()..]);

    let container_selector = Selector::parse(CONTAINER_SELECTOR)?;
    let Some(container) = section.select(&container_selector).next() else {
        debug!("CTF section has no stats container");
        return Ok(stats);
    };

    for class in CtfClass::all() {
        let selector = Selector::parse(&format!("#{}", class.element_id()))?;
        let Some(block) = container.select(&selector).next() else {
            continue;
        };
        match parse_class_stats(class, &block) {
            Ok(record) => {
                stats.insert(class, record);
            }
            Err(e) => warn!(%class, error = %e, "skipping unreadable class stats"),
        }
    }

    Ok(stats)
}
