pub mod client;
pub mod error;
pub mod qr;
pub mod utils;

pub use client::{normalize_alias, ApiClient, ShortenerApi};
pub use error::ApiError;
pub use reqwest::StatusCode;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
    pub alias: String,
    #[serde(default)]
    pub click_count: i64,
    #[serde(default)]
    pub created_by: Option<Creator>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UrlRecord {
    /// Expiration date as `YYYY-MM-DD`, or `Never` when the link does not expire.
    pub fn expiration_label(&self) -> String {
        match self.expiration_date.as_deref() {
            None | Some("") => "Never".to_string(),
            Some(raw) => format_date(raw),
        }
    }

    pub fn creator_label(&self) -> String {
        match &self.created_by {
            Some(creator) => full_name(&creator.first_name, &creator.last_name),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "authority_names")]
    pub authorities: Vec<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub account_non_expired: bool,
    #[serde(default)]
    pub account_non_locked: bool,
    #[serde(default)]
    pub credentials_non_expired: bool,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn roles_label(&self) -> String {
        self.authorities.join(", ")
    }
}

// Spring serializes granted authorities either as plain strings or as `{"authority": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Authority {
    Name(String),
    Granted { authority: String },
}

fn authority_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let authorities = Vec::<Authority>::deserialize(deserializer)?;
    Ok(authorities
        .into_iter()
        .map(|authority| match authority {
            Authority::Name(name) => name,
            Authority::Granted { authority } => authority,
        })
        .collect())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShortenRequest {
    pub url: String,
    pub alias: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UrlUpdate {
    pub url: String,
    pub alias: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

fn full_name(first: &Option<String>, last: &Option<String>) -> String {
    let first = first.as_deref().unwrap_or_default();
    let last = last.as_deref().unwrap_or_default();
    format!("{first} {last}").trim().to_string()
}

fn format_date(raw: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
