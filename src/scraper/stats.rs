use ::scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use crate::error::{LeaderboardError, Result};
use crate::model::{ClassStatRecord, CtfClass};
use crate::scraper::element_text;

/// Fields every record carries even when the page does not list them.
const DEFAULT_FIELDS: [&str; 2] = ["hp_restored", "headshots"];

/// Length of the separator the profile markup renders after each label (`": "`).
const LABEL_SUFFIX_LEN: usize = 2;

/// Parse one class's stat block into a record.
///
/// Labels are the leading text of each `li`, values are the `span.killstat`
/// elements, paired by position. The first value is the playtime.
pub(crate) fn parse_class_stats(class: CtfClass, block: &ElementRef) -> Result<ClassStatRecord> {
    let label_selector = Selector::parse("li")?;
    let value_selector = Selector::parse("span.killstat")?;

    let labels: Vec<String> = block
        .select(&label_selector)
        .map(|li| {
            let text = li
                .children()
                .find_map(|node| node.value().as_text().map(|t| t.to_string()))
                .unwrap_or_default();
            strip_label_suffix(&text)
        })
        .collect();
    let values: Vec<String> = block
        .select(&value_selector)
        .map(|span| element_text(&span))
        .collect();

    pair_stats(class, &labels, &values)
}

fn strip_label_suffix(text: &str) -> String {
    let text = text.trim_start();
    let keep = text.chars().count().saturating_sub(LABEL_SUFFIX_LEN);
    text.chars().take(keep).collect()
}

/// Pair labels with values positionally and normalize them into a record.
///
/// When the lists differ in length the extra entries of the longer one are
/// dropped and a warning is emitted.
pub(crate) fn pair_stats(
    class: CtfClass,
    labels: &[String],
    values: &[String],
) -> Result<ClassStatRecord> {
    if labels.len() != values.len() {
        warn!(
            %class,
            labels = labels.len(),
            values = values.len(),
            "stat label/value count mismatch, truncating to the shorter list"
        );
    }

    let mut record = ClassStatRecord::new();
    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let parsed = if i == 0 {
            playtime_to_days(value)
        } else {
            parse_stat_value(label, value)?
        };
        record.insert(field_key(label), parsed);
    }
    for field in DEFAULT_FIELDS {
        record.insert_default(field, 0.0);
    }

    Ok(record)
}

/// `"Flags Captured"` -> `"flags_captured"`.
pub(crate) fn field_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

fn parse_stat_value(label: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| LeaderboardError::StatParse {
            label: label.to_string(),
            value: value.to_string(),
        })
}

/// Convert a duration like `"1y 3d 4h 5m 6s"` into a fractional day count.
///
/// Tokens with an unknown unit or a non-numeric amount count as zero.
pub fn playtime_to_days(duration: &str) -> f64 {
    duration.split(' ').map(token_days).sum()
}

fn token_days(token: &str) -> f64 {
    let Some(unit) = token.chars().last() else {
        return 0.0;
    };
    let Ok(amount) = token[..token.len() - unit.len_utf8()].parse::<f64>() else {
        debug!(token, "ignoring playtime token with non-numeric amount");
        return 0.0;
    };
    match unit {
        'y' => amount * 365.0,
        'd' => amount,
        'h' => amount / 24.0,
        'm' => amount / 1440.0,
        's' => amount / 86400.0,
        _ => {
            debug!(token, "ignoring playtime token with unknown unit");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use ::scraper::Html;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_playtime_to_days() {
        assert_eq!(playtime_to_days("1d 12h"), 1.5);
        assert_eq!(playtime_to_days("1y"), 365.0);
        assert_eq!(playtime_to_days(""), 0.0);
        assert_eq!(playtime_to_days("2d"), 2.0);
        assert_eq!(playtime_to_days("6h 1440m"), 1.25);
        assert_eq!(playtime_to_days("43200s"), 0.5);
        assert_eq!(playtime_to_days("3w 1d"), 1.0);
        assert_eq!(playtime_to_days("xd 1d"), 1.0);
    }

    #[test]
    fn test_field_key() {
        assert_eq!(field_key("Flags Captured"), "flags_captured");
        assert_eq!(field_key("HP Restored"), "hp_restored");
        assert_eq!(field_key("KDR"), "kdr");
    }

    #[test]
    fn test_pair_stats() {
        let labels = strings(&["Playtime", "Kills", "Deaths", "Flags Captured"]);
        let values = strings(&["1d 12h", "1,204", "50", "7"]);
        let record = pair_stats(CtfClass::Archer, &labels, &values).unwrap();

        assert_eq!(record.get("playtime"), Some(1.5));
        assert_eq!(record.get("kills"), Some(1204.0));
        assert_eq!(record.get("deaths"), Some(50.0));
        assert_eq!(record.get("flags_captured"), Some(7.0));
        // one entry per label plus the two filled defaults
        assert_eq!(record.len(), 6);
    }

    #[test]
    fn test_defaults_filled_only_when_absent() {
        let labels = strings(&["Playtime", "HP Restored"]);
        let values = strings(&["1h", "250"]);
        let record = pair_stats(CtfClass::Medic, &labels, &values).unwrap();
        assert_eq!(record.get("hp_restored"), Some(250.0));
        assert_eq!(record.get("headshots"), Some(0.0));

        assert!(ClassStatRecord::new().is_empty());
        let record = pair_stats(CtfClass::Medic, &[], &[]).unwrap();
        assert!(!record.is_empty());
        assert_eq!(record.get("hp_restored"), Some(0.0));
        assert_eq!(record.get("headshots"), Some(0.0));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_mismatched_lengths_truncate() {
        let labels = strings(&["Playtime", "Kills", "Deaths"]);
        let values = strings(&["1d", "3"]);
        let record = pair_stats(CtfClass::Heavy, &labels, &values).unwrap();
        assert_eq!(record.get("kills"), Some(3.0));
        assert_eq!(record.get("deaths"), None);
    }

    #[test]
    fn test_unparseable_value() {
        let labels = strings(&["Playtime", "Kills"]);
        let values = strings(&["1d", "lots"]);
        let err = pair_stats(CtfClass::Heavy, &labels, &values).unwrap_err();
        assert!(matches!(err, LeaderboardError::StatParse { .. }));
    }

    #[test]
    fn test_parse_class_stats_from_markup() {
        let html = Html::parse_fragment(
            r#"<div id="ctf-elf"><ul>
                <li>Playtime: <span class="killstat">2d 6h</span></li>
                <li>Kills: <span class="killstat">40</span></li>
                <li>Damage Dealt: <span class="killstat">1,500.5</span></li>
            </ul></div>"#,
        );
        let selector = Selector::parse("div#ctf-elf").unwrap();
        let block = html.select(&selector).next().unwrap();
        let record = parse_class_stats(CtfClass::Elf, &block).unwrap();

        assert_eq!(record.get("playtime"), Some(2.25));
        assert_eq!(record.get("kills"), Some(40.0));
        assert_eq!(record.get("damage_dealt"), Some(1500.5));
        assert_eq!(record.get("headshots"), Some(0.0));
    }
}
