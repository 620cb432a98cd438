//! Fuzzy set kinds understood by the external learner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of fuzzy set a learner builds its linguistic variables from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuzzySetKind {
    /// Classic type-1 fuzzy sets.
    #[default]
    #[serde(rename = "t1")]
    Type1,
    /// Interval type-2 fuzzy sets.
    #[serde(rename = "t2")]
    IntervalType2,
    /// General type-2 fuzzy sets.
    #[serde(rename = "gt2")]
    GeneralType2,
}

impl FuzzySetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Type1 => "t1",
            Self::IntervalType2 => "t2",
            Self::GeneralType2 => "gt2",
        }
    }
}

impl fmt::Display for FuzzySetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FuzzySetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t1" | "type1" => Ok(Self::Type1),
            "t2" | "it2" | "interval_type2" => Ok(Self::IntervalType2),
            "gt2" | "general_type2" => Ok(Self::GeneralType2),
            other => Err(format!("unknown fuzzy set kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("t1".parse::<FuzzySetKind>().unwrap(), FuzzySetKind::Type1);
        assert_eq!("IT2".parse::<FuzzySetKind>().unwrap(), FuzzySetKind::IntervalType2);
        assert_eq!("gt2".parse::<FuzzySetKind>().unwrap(), FuzzySetKind::GeneralType2);
        assert!("t3".parse::<FuzzySetKind>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for kind in [FuzzySetKind::Type1, FuzzySetKind::IntervalType2, FuzzySetKind::GeneralType2] {
            assert_eq!(kind.to_string().parse::<FuzzySetKind>().unwrap(), kind);
        }
    }
}
