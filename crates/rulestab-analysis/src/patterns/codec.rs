//! Pattern codec: antecedent vector ⇄ canonical string key.
//!
//! `encode` writes the literal sequence form (`[0, -1, 2]`). `decode` is its
//! exact left inverse and also tolerates tuple punctuation and
//! whitespace-only separators.

use std::fmt;

use rulestab_core::errors::CodecError;
use serde::{Deserialize, Serialize};

/// Canonical, trial-independent identity of a rule.
///
/// Two rules are the same pattern iff their encodings are equal, regardless
/// of which trial or rule object produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into the antecedent vector.
    pub fn antecedents(&self) -> Result<Vec<i32>, CodecError> {
        decode(&self.0)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode an antecedent vector as a pattern key.
pub fn encode(antecedents: &[i32]) -> Pattern {
    Pattern(format!("{antecedents:?}"))
}

/// Parse a pattern string back into its antecedent vector.
pub fn decode(pattern: impl AsRef<str>) -> Result<Vec<i32>, CodecError> {
    let input = pattern.as_ref();
    input
        .split(|c: char| matches!(c, '[' | ']' | '(' | ')' | ',') || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|_| CodecError::Format {
                input: input.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_literal_sequence() {
        assert_eq!(encode(&[0, -1, 2]).as_str(), "[0, -1, 2]");
        assert_eq!(encode(&[0]).as_str(), "[0]");
        assert_eq!(encode(&[]).as_str(), "[]");
    }

    #[test]
    fn decode_inverts_encode() {
        for v in [vec![], vec![-1], vec![3, -1, 0, 12]] {
            assert_eq!(decode(encode(&v)).unwrap(), v);
        }
    }

    #[test]
    fn decode_accepts_tuple_and_space_separated_forms() {
        assert_eq!(decode("(1, 2)").unwrap(), vec![1, 2]);
        assert_eq!(decode("[ 0 -1  2]").unwrap(), vec![0, -1, 2]);
    }

    #[test]
    fn decode_rejects_non_integer_tokens() {
        let err = decode("[0, low]").unwrap_err();
        assert_eq!(
            err,
            CodecError::Format {
                input: "[0, low]".to_string(),
                token: "low".to_string(),
            }
        );
        assert!(decode("[1.5]").is_err());
    }

    #[test]
    fn equal_vectors_give_equal_patterns() {
        let a = vec![1, -1, 2];
        let b = a.clone();
        assert_eq!(encode(&a), encode(&b));
        assert_ne!(encode(&a), encode(&[1, 2, -1]));
    }
}
