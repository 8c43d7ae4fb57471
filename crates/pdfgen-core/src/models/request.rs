use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::s3_keys;

use super::substitution::Substitutions;

pub const DEFAULT_BACKGROUND_COLOR: &str = "white";
pub const DEFAULT_FONT_COLOR: &str = "black";

/// Indicator substituted for `{ breakfast_indicator }` when breakfast is requested.
pub const BREAKFAST_INDICATOR: &str = "B";

/// The request payload as it arrives, before required fields are checked.
///
/// Every field is optional here so that a missing field can be reported by
/// its wire name instead of as a generic deserialization failure. Earlier
/// payload revisions used `template_s3_key`, `pdf_filename` and
/// `variableSubstitutions`; those names are still accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocumentRequest {
    #[serde(rename = "eventName")]
    pub event_name: Option<String>,
    pub user: Option<String>,
    #[serde(alias = "template_s3_key")]
    pub template_location: Option<String>,
    #[serde(alias = "pdf_filename")]
    pub output_filename: Option<String>,
    #[serde(alias = "variableSubstitutions")]
    pub variable_substitutions: Option<serde_json::Map<String, Value>>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub breakfast: Option<bool>,
}

/// A validated document generation request with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub event_name: String,
    pub user: String,
    pub template_location: String,
    pub output_filename: String,
    pub variable_substitutions: Substitutions,
    pub background_color: String,
    pub font_color: String,
    pub breakfast: bool,
}

impl DocumentRequest {
    /// Deserialize and validate a JSON payload.
    pub fn from_payload(payload: Value) -> Result<Self, CoreError> {
        if !payload.is_object() {
            return Err(CoreError::InvalidPayload(
                "expected a JSON object".to_string(),
            ));
        }
        let raw: RawDocumentRequest = serde_json::from_value(payload)?;
        Self::try_from(raw)
    }

    /// The caller's substitutions merged with the styling and breakfast keys.
    ///
    /// The injected keys overwrite any caller value under the same name.
    pub fn substitutions(&self) -> Substitutions {
        let mut subs = self.variable_substitutions.clone();
        subs.insert("background_color", self.background_color.as_str());
        subs.insert("font_color", self.font_color.as_str());
        subs.insert("breakfast_indicator", self.breakfast_indicator());
        subs
    }

    pub fn breakfast_indicator(&self) -> &'static str {
        if self.breakfast { BREAKFAST_INDICATOR } else { "" }
    }

    pub fn output_key(&self) -> String {
        s3_keys::output_key(&self.event_name, &self.user, &self.output_filename)
    }
}

impl TryFrom<RawDocumentRequest> for DocumentRequest {
    type Error = CoreError;

    fn try_from(raw: RawDocumentRequest) -> Result<Self, Self::Error> {
        let event_name = required(raw.event_name, "eventName")?;
        let user = required(raw.user, "user")?;
        let template_location = required(raw.template_location, "template_location")?;
        let output_filename = required(raw.output_filename, "output_filename")?;

        let variable_substitutions = match raw.variable_substitutions {
            Some(map) => Substitutions::try_from_json(map)?,
            None => Substitutions::new(),
        };

        Ok(DocumentRequest {
            event_name,
            user,
            template_location,
            output_filename,
            variable_substitutions,
            background_color: raw
                .background_color
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            font_color: raw
                .font_color
                .unwrap_or_else(|| DEFAULT_FONT_COLOR.to_string()),
            breakfast: raw.breakfast.unwrap_or(false),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, CoreError> {
    value.ok_or_else(|| CoreError::MissingField(field.to_string()))
}
