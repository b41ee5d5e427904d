use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

/// Category of a published piece. Closed set; anything that does not fit
/// the three named forms is `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WritingKind {
    Poem,
    Story,
    Essay,
    Other,
}

impl WritingKind {
    /// All categories, in display order.
    pub const ALL: [WritingKind; 4] = [
        WritingKind::Poem,
        WritingKind::Story,
        WritingKind::Essay,
        WritingKind::Other,
    ];

    /// Lowercase name as it appears in the persisted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingKind::Poem => "poem",
            WritingKind::Story => "story",
            WritingKind::Essay => "essay",
            WritingKind::Other => "other",
        }
    }
}

impl fmt::Display for WritingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritingKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poem" => Ok(WritingKind::Poem),
            "story" => Ok(WritingKind::Story),
            "essay" => Ok(WritingKind::Essay),
            "other" => Ok(WritingKind::Other),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for kind in WritingKind::ALL {
            assert_eq!(kind.as_str().parse::<WritingKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Poem".parse::<WritingKind>().unwrap(), WritingKind::Poem);
        assert_eq!("ESSAY".parse::<WritingKind>().unwrap(), WritingKind::Essay);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("haiku".parse::<WritingKind>().is_err());
    }
}
