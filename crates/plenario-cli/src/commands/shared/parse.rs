use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a timestamp argument: RFC 3339, or a plain `YYYY-MM-DD` taken as
/// midnight UTC.
pub fn parse_datetime(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid {field} '{raw}'"))?;
        return Ok(midnight.and_utc());
    }

    anyhow::bail!("invalid {field} '{raw}': expected RFC 3339 or YYYY-MM-DD")
}
