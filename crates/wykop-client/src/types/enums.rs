/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Response body format requested from the API
///
/// The client always consumes JSON; the enum exists because the format is a
/// mandatory URL segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
        }
    }
}

/// How the API renders text fields
///
/// `Clear` strips HTML, `Both` returns the HTML rendering alongside the
/// plain one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlOutput {
    Clear,
    #[default]
    Both,
}

impl HtmlOutput {
    pub fn as_str(self) -> &'static str {
        match self {
            HtmlOutput::Clear => "clear",
            HtmlOutput::Both => "both",
        }
    }
}
