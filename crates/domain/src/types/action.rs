//! Policy action taken on governed content

use serde::{Deserialize, Deserializer, Serialize};

use crate::impl_domain_enum_conversions;

/// Decision reached for one piece of content.
///
/// `Allow` and `Deny` never modify content; only `Redact` rewrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Pass content through unchanged.
    Allow,
    /// Replace detected values with redaction tokens.
    #[default]
    Redact,
    /// Refuse the content; callers decide how to surface the refusal.
    Deny,
}

impl_domain_enum_conversions!(Action {
    Allow => "allow",
    Redact => "redact",
    Deny => "deny",
});

impl Action {
    /// Whether this action rewrites the output.
    pub fn modifies_content(&self) -> bool {
        matches!(self, Self::Redact)
    }
}

// Case-insensitive so `defaultAction = "REDACT"` in a config file parses.
impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_redact() {
        assert_eq!(Action::default(), Action::Redact);
    }

    #[test]
    fn only_redact_modifies_content() {
        assert!(Action::Redact.modifies_content());
        assert!(!Action::Allow.modifies_content());
        assert!(!Action::Deny.modifies_content());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Deny).unwrap(), r#""deny""#);
    }

    #[test]
    fn deserializes_any_case() {
        let action: Action = serde_json::from_str(r#""ALLOW""#).unwrap();
        assert_eq!(action, Action::Allow);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = serde_json::from_str::<Action>(r#""quarantine""#).unwrap_err();
        assert!(err.to_string().contains("Invalid Action: quarantine"));
        assert!("block".parse::<Action>().is_err());
    }
}
