use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::form::FormValue;
use crate::model::AuthorizationStatus;

/// Server-assigned identity of a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// One server authorization.
///
/// Field order matters: it is the order fields appear in a form body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Absent until the server persists the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub server_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scope: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp_millis",
        deserialize_with = "timestamp"
    )]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A draft that the endpoint would reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid server authorization: {reason}")]
pub struct InvalidRecord {
    pub reason: String,
}

impl ResourceRecord {
    /// Start a draft for `server_url`; a trailing `/` is dropped.
    pub fn draft(server_url: impl Into<String>) -> Self {
        let mut server_url = server_url.into();
        if server_url.ends_with('/') {
            server_url.pop();
        }
        Self {
            server_url,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Parse a raw collection entry.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    pub fn validate(&self) -> Result<(), InvalidRecord> {
        if self.server_url.trim().is_empty() {
            return Err(InvalidRecord {
                reason: "server URL is required".to_string(),
            });
        }
        Ok(())
    }

    pub fn status(&self, now: DateTime<Utc>) -> AuthorizationStatus {
        match self.expires_at {
            None => AuthorizationStatus::Inactive,
            Some(expires_at) if now > expires_at => AuthorizationStatus::Expired,
            Some(_) => AuthorizationStatus::Active,
        }
    }
}

/// Same field order and names as the JSON form, with the expiry kept as a date.
impl From<&ResourceRecord> for FormValue {
    fn from(record: &ResourceRecord) -> Self {
        let mut entries = Vec::with_capacity(7);
        if let Some(id) = &record.id {
            let id = match id {
                RecordId::Numeric(n) => FormValue::from(*n),
                RecordId::Text(s) => FormValue::from(s.as_str()),
            };
            entries.push(("id".to_string(), id));
        }
        entries.extend([
            ("title".to_string(), FormValue::from(record.title.as_str())),
            ("description".to_string(), FormValue::from(record.description.as_str())),
            ("serverUrl".to_string(), FormValue::from(record.server_url.as_str())),
            ("scope".to_string(), FormValue::from(record.scope.as_str())),
            ("state".to_string(), FormValue::from(record.state.as_str())),
        ]);
        if let Some(expires_at) = record.expires_at {
            entries.push(("expiresAt".to_string(), FormValue::Date(expires_at)));
        }
        FormValue::Mapping(entries)
    }
}

/// Millisecond precision with a `Z` suffix, as browsers write dates.
fn timestamp_millis<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 strings or epoch milliseconds.
fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Text(text)) if text.is_empty() => Ok(None),
        Some(Raw::Text(text)) => DateTime::parse_from_rfc3339(&text)
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
        Some(Raw::Millis(millis)) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {millis}"))),
    }
}
