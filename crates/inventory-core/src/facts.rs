//! Derived facts shown in the entity detail panel.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::entity::Entity;

/// Text shown when the last-seen timestamp is missing or unparseable.
pub const INVALID_DATE: &str = "Invalid Date";

/// Date-time layout for the "Last seen" row (`3/26/2019, 3:09:40 PM`).
pub const LAST_SEEN_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// The fixed facts table for one entity, already rendered to text.
///
/// Blank strings mean the underlying field was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFacts {
    pub hostname: String,
    pub ansible_host: String,
    pub uuid: String,
    pub last_seen: String,
}

impl EntityFacts {
    /// Row labels, in display order.
    pub const LABELS: [&'static str; 4] = ["Hostname:", "Ansible host:", "UUID:", "Last seen:"];

    /// Derives the facts, formatting timestamps in the local time zone.
    pub fn from_entity(entity: &Entity) -> Self {
        Self::from_entity_in(entity, &Local)
    }

    /// Derives the facts, formatting timestamps in `tz`.
    pub fn from_entity_in<Tz>(entity: &Entity, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            hostname: entity.text("fqdn").unwrap_or_default(),
            ansible_host: ansible_host(entity).unwrap_or_default(),
            uuid: entity.id().unwrap_or_default(),
            last_seen: format_last_seen(entity.get("updated"), tz),
        }
    }

    /// Values paired with their labels, in display order.
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            (Self::LABELS[0], self.hostname.as_str()),
            (Self::LABELS[1], self.ansible_host.as_str()),
            (Self::LABELS[2], self.uuid.as_str()),
            (Self::LABELS[3], self.last_seen.as_str()),
        ]
    }
}

/// The address Ansible should use for the host.
///
/// First set value of `ansible_host`, `fqdn`, `id`.
pub fn ansible_host(entity: &Entity) -> Option<String> {
    entity
        .text("ansible_host")
        .or_else(|| entity.text("fqdn"))
        .or_else(|| entity.id())
}

/// Formats the raw `updated` value as a date-time string in `tz`.
///
/// Strings are accepted as RFC 3339, RFC 2822, zone-less ISO date-times
/// (interpreted in `tz`) or bare ISO dates (UTC midnight). Numbers are epoch
/// milliseconds. Anything else, including a missing value, formats as
/// [`INVALID_DATE`].
pub fn format_last_seen<Tz>(raw: Option<&Value>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match raw.and_then(|value| parse_timestamp(value, tz)) {
        Some(dt) => dt.format(LAST_SEEN_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &Value, tz: &Tz) -> Option<DateTime<Tz>> {
    let utc = match raw {
        Value::String(s) => return parse_timestamp_str(s.trim(), tz),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis)?,
        _ => return None,
    };
    Some(utc.with_timezone(tz))
}

fn parse_timestamp_str<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(tz));
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().with_timezone(tz))
}
