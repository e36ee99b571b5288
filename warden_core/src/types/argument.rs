//! Block argument kinds.
//!
//! The identifiers here are a fixed wire contract: external extension
//! declarations reference them by value, so they must never be
//! renamed. Note the historical `Boolean` casing, which differs from
//! every other identifier in the set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The accepted argument kinds for extension block declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentKind {
    /// Numeric value with angle picker.
    #[serde(rename = "angle")]
    Angle,

    /// Boolean value with hexagonal placeholder.
    #[serde(rename = "Boolean")]
    Boolean,

    /// Numeric value with color picker.
    #[serde(rename = "color")]
    Color,

    /// Numeric value with text field.
    #[serde(rename = "number")]
    Number,

    /// String value with text field.
    #[serde(rename = "string")]
    String,

    /// String value with matrix field.
    #[serde(rename = "matrix")]
    Matrix,

    /// MIDI note number with note picker (piano) field.
    #[serde(rename = "note")]
    Note,

    /// Inline image on block (as part of the label).
    #[serde(rename = "image")]
    Image,

    /// Input with n x,y inputs.
    #[serde(rename = "polygon")]
    Polygon,

    /// Name of costume in the current target.
    #[serde(rename = "costume")]
    Costume,

    /// Name of sound in the current target.
    #[serde(rename = "sound")]
    Sound,

    /// Variable menu.
    #[serde(rename = "variable")]
    Variable,

    /// List menu.
    #[serde(rename = "list")]
    List,
}

/// Every argument kind, in declaration order.
pub const ALL_ARGUMENT_KINDS: &[ArgumentKind] = &[
    ArgumentKind::Angle,
    ArgumentKind::Boolean,
    ArgumentKind::Color,
    ArgumentKind::Number,
    ArgumentKind::String,
    ArgumentKind::Matrix,
    ArgumentKind::Note,
    ArgumentKind::Image,
    ArgumentKind::Polygon,
    ArgumentKind::Costume,
    ArgumentKind::Sound,
    ArgumentKind::Variable,
    ArgumentKind::List,
];

/// An identifier outside the fixed argument-kind set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown argument kind: {0}")]
pub struct UnknownArgumentKind(pub String);

impl ArgumentKind {
    /// The wire identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Angle => "angle",
            Self::Boolean => "Boolean",
            Self::Color => "color",
            Self::Number => "number",
            Self::String => "string",
            Self::Matrix => "matrix",
            Self::Note => "note",
            Self::Image => "image",
            Self::Polygon => "polygon",
            Self::Costume => "costume",
            Self::Sound => "sound",
            Self::Variable => "variable",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgumentKind {
    type Err = UnknownArgumentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ARGUMENT_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownArgumentKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_identifiers_are_exact() {
        let expected = [
            "angle", "Boolean", "color", "number", "string", "matrix", "note", "image",
            "polygon", "costume", "sound", "variable", "list",
        ];
        let actual: Vec<&str> = ALL_ARGUMENT_KINDS.iter().map(|k| k.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in ALL_ARGUMENT_KINDS {
            assert_eq!(kind.as_str().parse::<ArgumentKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn boolean_casing_is_preserved() {
        // The one odd duck in the contract.
        assert_eq!(ArgumentKind::Boolean.as_str(), "Boolean");
        assert!("boolean".parse::<ArgumentKind>().is_err());
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "vector".parse::<ArgumentKind>().unwrap_err();
        assert_eq!(err, UnknownArgumentKind("vector".to_string()));
    }

    #[test]
    fn serde_matches_wire_identifiers() {
        for kind in ALL_ARGUMENT_KINDS {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ArgumentKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }
}
