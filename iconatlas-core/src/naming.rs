//! Canonical identifiers from packer-assigned sprite names.
//!
//! The packer names each sprite after its source path, e.g.
//! `action-drawable-mdpi-ic_account_balance_black_48dp`. A [`NamingRule`]
//! declares which segments matter:
//!
//! ```text
//! action - drawable - mdpi - ic_account_balance_black_48dp
//! ^ prefix_segment           ^ suffix_segment
//!                            strip "ic_", drop "_black_48dp", split on '_'
//! => Action + Account + Balance = ActionAccountBalance
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AtlasError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("expected at least {expected} segments separated by `{delimiter}`, found {found}")]
    TooFewSegments {
        expected: usize,
        found: usize,
        delimiter: String,
    },
    #[error("derived name `{0}` is not a valid identifier")]
    InvalidIdentifier(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRule {
    pub delimiter: String,
    pub word_delimiter: String,
    pub min_segments: usize,
    pub prefix_segment: usize,
    pub suffix_segment: usize,
    /// Removed from the start of the suffix segment when present.
    pub strip_prefix: String,
    /// First occurrence is removed from the suffix segment.
    pub strip_token: String,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            delimiter: "-".into(),
            word_delimiter: "_".into(),
            min_segments: 4,
            prefix_segment: 0,
            suffix_segment: 3,
            strip_prefix: "ic_".into(),
            strip_token: "_black_48dp".into(),
        }
    }
}

impl NamingRule {
    pub fn validate(&self) -> Result<(), AtlasError> {
        if self.delimiter.is_empty() || self.word_delimiter.is_empty() {
            return Err(AtlasError::Rule("delimiters must not be empty".into()));
        }
        if self.delimiter == self.word_delimiter {
            return Err(AtlasError::Rule(format!(
                "segment and word delimiters are both `{}`",
                self.delimiter
            )));
        }
        let indices = [
            ("prefix_segment", self.prefix_segment),
            ("suffix_segment", self.suffix_segment),
        ];
        for (what, idx) in indices {
            if idx >= self.min_segments {
                return Err(AtlasError::Rule(format!(
                    "{} {} is out of range for min_segments {}",
                    what, idx, self.min_segments
                )));
            }
        }
        Ok(())
    }

    /// Derive the identifier for `raw`. Assumes the rule passed [`validate`](Self::validate).
    pub fn canonical_name(&self, raw: &str) -> Result<String, NamingError> {
        let segments: Vec<&str> = raw.split(self.delimiter.as_str()).collect();
        if segments.len() < self.min_segments {
            return Err(NamingError::TooFewSegments {
                expected: self.min_segments,
                found: segments.len(),
                delimiter: self.delimiter.clone(),
            });
        }

        let mut name = capitalize(segments[self.prefix_segment]);

        let suffix = segments[self.suffix_segment];
        let suffix = suffix.strip_prefix(self.strip_prefix.as_str()).unwrap_or(suffix);
        let suffix = if self.strip_token.is_empty() {
            suffix.to_string()
        } else {
            suffix.replacen(self.strip_token.as_str(), "", 1)
        };
        for word in suffix.split(self.word_delimiter.as_str()) {
            name.push_str(&capitalize(word));
        }

        if !is_identifier(&name) {
            return Err(NamingError::InvalidIdentifier(name));
        }
        Ok(name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True if `s` can be used verbatim as a Rust identifier (keywords rejected).
pub fn is_identifier(s: &str) -> bool {
    !s.starts_with("r#") && syn::parse_str::<syn::Ident>(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> NamingRule {
        NamingRule::default()
    }

    fn name(raw: &str) -> String {
        rule().canonical_name(raw).unwrap()
    }

    #[test]
    fn material_icon_names() {
        assert_eq!(
            name("action-drawable-mdpi-ic_account_balance_black_48dp"),
            "ActionAccountBalance"
        );
        assert_eq!(name("alert-drawable-mdpi-ic_error_black_48dp"), "AlertError");
        assert_eq!(name("action-drawable-mdpi-ic_3d_rotation_black_48dp"), "Action3dRotation");
    }

    #[test]
    fn token_absent_after_prefix_strip() {
        // "ic_black_48dp" loses "ic_" first, so "_black_48dp" no longer occurs.
        assert_eq!(name("icons-foo-bar-ic_black_48dp"), "IconsBlack48dp");
    }

    #[test]
    fn empty_suffix_keeps_only_the_prefix() {
        assert_eq!(name("err-drawable-mdpi-ic_"), "Err");
    }

    #[test]
    fn extra_segments_are_ignored() {
        assert_eq!(name("toggle-drawable-mdpi-ic_star_black_48dp-extra"), "ToggleStar");
    }

    #[test]
    fn too_few_segments() {
        let err = rule().canonical_name("action-drawable-ic_alarm_black_48dp").unwrap_err();
        assert_eq!(
            err,
            NamingError::TooFewSegments {
                expected: 4,
                found: 3,
                delimiter: "-".into()
            }
        );
    }

    #[test]
    fn invalid_identifiers_are_rejected() {
        let r = rule();
        let raws = [
            "3d-x-y-ic_cube_black_48dp",
            "a-x-y-ic_plus+minus_black_48dp",
            "-x-y-ic__black_48dp",
        ];
        for raw in raws {
            let res = r.canonical_name(raw);
            assert!(matches!(res, Err(NamingError::InvalidIdentifier(_))), "{}", raw);
        }
    }

    #[test]
    fn custom_rule() {
        let r = NamingRule {
            delimiter: "/".into(),
            word_delimiter: ".".into(),
            min_segments: 2,
            prefix_segment: 1,
            suffix_segment: 0,
            strip_prefix: String::new(),
            strip_token: ".png".into(),
        };
        r.validate().unwrap();
        assert_eq!(r.canonical_name("arrow.left.png/nav").unwrap(), "NavArrowLeft");
    }

    #[test]
    fn rule_validation() {
        assert!(rule().validate().is_ok());
        let bad = [
            NamingRule {
                suffix_segment: 4,
                ..rule()
            },
            NamingRule {
                word_delimiter: "-".into(),
                ..rule()
            },
            NamingRule {
                delimiter: String::new(),
                ..rule()
            },
        ];
        for r in bad {
            assert!(matches!(r.validate(), Err(AtlasError::Rule(_))), "{:?}", r);
        }
    }

    #[test]
    fn identifier_check() {
        assert!(is_identifier("ActionAlarm"));
        assert!(is_identifier("Icon"));
        assert!(!is_identifier("Self"));
        assert!(!is_identifier("match"));
        assert!(!is_identifier("r#match"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("Two Words"));
    }
}
