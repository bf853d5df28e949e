/*
[INPUT]:  Raw JSON maps returned by the Wykop API
[OUTPUT]: Typed Rust entities (Author, Profile, Notification, ConnectHandshake)
[POS]:    Data layer - entity mapping for API responses
[UPDATE]: When API schema changes or new entities added
*/

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::http::{Result, WykopError};

/// User that triggered a notification
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    /// Username. The only field Wykop guarantees.
    pub login: String,
    /// Account colour, varies with account age and activity
    #[serde(default, deserialize_with = "lenient_i64")]
    pub color: Option<i64>,
    /// Avatar URL if set
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
}

/// Signed-in user's profile, returned by `login/index`
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub login: String,
    /// Temporary login key (`userkey`), required for user operations
    pub userkey: String,
    pub color: Option<i64>,
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub signup_at: Option<NaiveDateTime>,
    pub rank: Option<i64>,
    pub background: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    userkey: String,
    profile: ProfileData,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    login: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    color: Option<i64>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default, deserialize_with = "wykop_datetime")]
    signup_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_i64")]
    rank: Option<i64>,
    #[serde(default)]
    background: Option<String>,
}

impl Profile {
    /// Build a profile from the `data` object of a `login/index` envelope
    ///
    /// The object must carry a non-empty `userkey` and a `profile` map with a
    /// non-empty `login`.
    pub fn from_login_data(data: &Value) -> Result<Self> {
        let login_data: LoginData = serde_json::from_value(data.clone())?;
        if login_data.userkey.is_empty() {
            return Err(WykopError::InvalidResponse(
                "login response carries an empty userkey".to_string(),
            ));
        }
        if login_data.profile.login.is_empty() {
            return Err(WykopError::InvalidResponse(
                "login response carries an empty login".to_string(),
            ));
        }

        let profile = login_data.profile;
        Ok(Self {
            login: profile.login,
            userkey: login_data.userkey,
            color: profile.color,
            avatar: profile.avatar,
            sex: profile.sex,
            signup_at: profile.signup_at,
            rank: profile.rank,
            background: profile.background,
        })
    }
}

/// Single notification entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "wykop_datetime")]
    pub date: Option<NaiveDateTime>,
    /// Body renderings keyed by format (`text`, `html`)
    #[serde(default, deserialize_with = "lenient_string_map")]
    pub body: Option<HashMap<String, String>>,
    /// Notification type as reported on the wire
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub item_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub subitem_id: Option<i64>,
    /// URL to view the notification
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the user has not yet marked the notification as read
    #[serde(default, rename = "new")]
    pub is_new: Option<bool>,
}

impl Notification {
    /// Body rendering for the given format, if present
    pub fn body_as(&self, format: &str) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get(format))
            .map(String::as_str)
    }
}

/// Decoded Wykop Connect callback payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConnectHandshake {
    pub appkey: String,
    pub login: String,
    /// Connection key between the user and the app
    pub token: String,
    /// MD5 signature over secret + appkey + login + token
    pub sign: String,
}

/// Accepts numbers or numeric strings; anything else maps to `None`.
///
/// Wykop is not consistent about numeric field encoding across endpoints.
fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.parse().ok(),
        _ => None,
    }))
}

/// Accepts a string-to-string map; any other shape maps to `None`.
fn lenient_string_map<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Parses Wykop's `"YYYY-MM-DD HH:MM:SS"` timestamps, with RFC 3339 as a
/// fallback. Unparseable dates map to `None` instead of failing the entity.
fn wykop_datetime<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_wykop_datetime))
}

const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn parse_wykop_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, WIRE_DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|date| date.naive_utc())
        })
}
