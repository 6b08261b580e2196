//! Inbound Alexa skill request types.
//!
//! See <https://developer.amazon.com/docs/custom-skills/request-and-response-json-reference.html#request-format>.
//! These are plain containers; the ISP helpers only read the API endpoint,
//! the API access token, the locale and the intent slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An Alexa skill request envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Session,
    #[serde(rename = "request")]
    pub body: RequestBody,
    #[serde(default)]
    pub context: Context,
}

impl Request {
    /// The intent carried by an `IntentRequest`, if any.
    pub fn intent(&self) -> Option<&Intent> {
        self.body.intent.as_ref()
    }

    /// Locale the user is speaking in, sent as `Accept-Language`.
    pub fn locale(&self) -> &Locale {
        &self.body.locale
    }
}

/// The Alexa skill session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Application,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    /// Account-linking token, present only for linked accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: String,
}

/// Request context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: System,
    #[serde(rename = "Viewport", default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

/// System section of the context: where and how to call Alexa APIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    /// Short-lived bearer token scoped to this invocation
    #[serde(default)]
    pub api_access_token: String,
    /// Base URL of the regional Alexa API, e.g. `https://api.amazonalexa.com`
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default)]
    pub device: Device,
    #[serde(default)]
    pub application: Application,
}

/// Viewport shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    Round,
    Rectangle,
}

/// Screen characteristics of devices with a display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub pixel_width: u32,
    #[serde(default)]
    pub pixel_height: u32,
    #[serde(default)]
    pub current_pixel_width: u32,
    #[serde(default)]
    pub current_pixel_height: u32,
    #[serde(default)]
    pub dpi: u32,
    #[serde(default)]
    pub touch: Vec<String>,
    #[serde(default)]
    pub keyboard: Vec<String>,
    #[serde(default)]
    pub video: Video,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub arc_minute_width: u32,
    #[serde(default)]
    pub arc_minute_height: u32,
    #[serde(default)]
    pub can_rotate: bool,
    #[serde(default)]
    pub can_resize: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub codecs: Vec<String>,
}

/// Kind of skill request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    LaunchRequest,
    CanFulfillIntentRequest,
    IntentRequest,
    SessionEndedRequest,
    /// Any request type this crate does not model (audio player, purchase results, ...)
    #[default]
    #[serde(other)]
    Other,
}

/// The request body proper (wire key `request`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type", default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<String>,
}

/// Built-in intent names.
pub mod intents {
    /// Alexa built-in Help intent.
    pub const HELP: &str = "AMAZON.HelpIntent";
    /// Alexa built-in Cancel intent.
    pub const CANCEL: &str = "AMAZON.CancelIntent";
    /// Alexa built-in Stop intent.
    pub const STOP: &str = "AMAZON.StopIntent";
}

/// A recognized intent and its slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Look up a slot by its interaction-model name.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }
}

/// A recognized slot with its entity resolutions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    /// Raw spoken value; absent when the slot was not filled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub resolutions: Resolutions,
}

impl Slot {
    /// Resolved value ids, authority by authority, in wire order.
    pub fn candidate_ids(&self) -> impl Iterator<Item = &str> {
        self.resolutions
            .resolutions_per_authority
            .iter()
            .flat_map(|authority| authority.values.iter())
            .map(|candidate| candidate.value.id.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    #[serde(default)]
    pub resolutions_per_authority: Vec<Authority>,
}

/// One resolution source for a slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authority {
    #[serde(default)]
    pub authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResolutionStatus>,
    #[serde(default)]
    pub values: Vec<ResolutionValue>,
}

/// Resolution outcome, e.g. `ER_SUCCESS_MATCH` or `ER_SUCCESS_NO_MATCH`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionStatus {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionValue {
    pub value: ResolvedValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

/// A request locale such as `en-US`. Passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the English-speaking locales.
    pub fn is_english(&self) -> bool {
        matches!(
            self.as_str(),
            locales::AMERICAN_ENGLISH
                | locales::INDIAN_ENGLISH
                | locales::BRITISH_ENGLISH
                | locales::CANADIAN_ENGLISH
                | locales::AUSTRALIAN_ENGLISH
        )
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Locales supported by Alexa custom skills.
pub mod locales {
    /// Italian.
    pub const ITALIAN: &str = "it-IT";
    /// Standard German.
    pub const GERMAN: &str = "de-DE";
    /// Australian English.
    pub const AUSTRALIAN_ENGLISH: &str = "en-AU";
    /// Canadian English.
    pub const CANADIAN_ENGLISH: &str = "en-CA";
    /// UK English.
    pub const BRITISH_ENGLISH: &str = "en-GB";
    /// Indian English.
    pub const INDIAN_ENGLISH: &str = "en-IN";
    /// US English.
    pub const AMERICAN_ENGLISH: &str = "en-US";
    /// Japanese.
    pub const JAPANESE: &str = "ja-JP";
}
