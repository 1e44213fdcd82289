//! Front-matter parsing for MDX sources

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Split an MDX document into its YAML front-matter and body.
///
/// Documents without front-matter yield an empty map and the whole text.
pub fn parse(content: &str) -> Result<(Map<String, Value>, &str)> {
    let content = content.trim_start();

    let Some(rest) = content.strip_prefix("---") else {
        return Ok((Map::new(), content));
    };
    let rest = rest.trim_start_matches(['\n', '\r']);

    // No closing ---, treat as no front-matter
    let Some(end_pos) = rest.find("\n---") else {
        return Ok((Map::new(), content));
    };

    let yaml_content = &rest[..end_pos];
    let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

    if yaml_content.trim().is_empty() {
        return Ok((Map::new(), remaining));
    }

    // A thematic break followed by prose is not front-matter
    if !has_yaml_structure(yaml_content) {
        return Ok((Map::new(), content));
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(yaml_content)
        .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;

    match serde_json::to_value(yaml)? {
        Value::Object(fields) => Ok((fields, remaining)),
        Value::Null => Ok((Map::new(), remaining)),
        _ => Err(anyhow!("Front-matter must be a mapping")),
    }
}

/// At least one line must look like `key: value`
fn has_yaml_structure(yaml_content: &str) -> bool {
    yaml_content.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

/// Parse a front-matter date in the formats authors actually use
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}
