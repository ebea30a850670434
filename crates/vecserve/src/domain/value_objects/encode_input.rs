//! EncodeInput - scalar-or-list text input

use serde::{Deserialize, Serialize};

/// Text input of an encode request
///
/// A single string is equivalent to a one-element batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EncodeInput {
    Single(String),
    Batch(Vec<String>),
}

impl EncodeInput {
    /// Normalize into an ordered batch
    pub fn into_batch(self) -> Vec<String> {
        match self {
            EncodeInput::Single(text) => vec![text],
            EncodeInput::Batch(texts) => texts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_string_becomes_one_element_batch() {
        let input: EncodeInput = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(input.into_batch(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_list_keeps_order() {
        let input: EncodeInput = serde_json::from_str(r#"["b", "a", "c"]"#).unwrap();
        assert_eq!(input.into_batch(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let input: EncodeInput = serde_json::from_str("[]").unwrap();
        assert_eq!(input, EncodeInput::Batch(Vec::new()));
        assert!(input.into_batch().is_empty());
    }

    #[test]
    fn test_rejects_non_string_items() {
        assert!(serde_json::from_str::<EncodeInput>("[1, 2]").is_err());
        assert!(serde_json::from_str::<EncodeInput>("42").is_err());
    }
}
