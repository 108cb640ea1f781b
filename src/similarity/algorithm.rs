//! The closed set of similarity measures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::types::AlgorithmInfo;

/// Similarity measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Path,
    Wup,
    Lch,
    Res,
    Jcn,
    Lin,
    Lesk,
    Hso,
}

impl Algorithm {
    /// Every measure in presentation order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Path,
        Algorithm::Wup,
        Algorithm::Lch,
        Algorithm::Res,
        Algorithm::Jcn,
        Algorithm::Lin,
        Algorithm::Lesk,
        Algorithm::Hso,
    ];

    pub fn all() -> &'static [Algorithm] {
        &Self::ALL
    }

    /// Case-insensitive parse of a measure name
    pub fn parse(name: &str) -> Result<Self, SimilarityError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "path" => Ok(Algorithm::Path),
            "wup" => Ok(Algorithm::Wup),
            "lch" => Ok(Algorithm::Lch),
            "res" => Ok(Algorithm::Res),
            "jcn" => Ok(Algorithm::Jcn),
            "lin" => Ok(Algorithm::Lin),
            "lesk" => Ok(Algorithm::Lesk),
            "hso" => Ok(Algorithm::Hso),
            _ => Err(SimilarityError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Lowercase name, as accepted by [`Algorithm::parse`]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Path => "path",
            Algorithm::Wup => "wup",
            Algorithm::Lch => "lch",
            Algorithm::Res => "res",
            Algorithm::Jcn => "jcn",
            Algorithm::Lin => "lin",
            Algorithm::Lesk => "lesk",
            Algorithm::Hso => "hso",
        }
    }

    /// Uppercase label used in reports
    pub fn label(self) -> String {
        self.name().to_ascii_uppercase()
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Path => "Path similarity: inverse of the shortest hypernym path length",
            Algorithm::Wup => "Wu-Palmer: depth of the least common subsumer relative to both depths",
            Algorithm::Lch => "Leacock-Chodorow: log-scaled path length over the taxonomy depth",
            Algorithm::Res => "Resnik: information content of the least common subsumer",
            Algorithm::Jcn => "Jiang-Conrath: inverse information content distance",
            Algorithm::Lin => "Lin: shared information content relative to both synsets",
            Algorithm::Lesk => "Lesk: word overlap between extended glosses",
            Algorithm::Hso => "Hirst-St-Onge: path weight penalising length and direction changes",
        }
    }

    /// Human-readable value range
    pub fn range(self) -> &'static str {
        match self {
            Algorithm::Path | Algorithm::Wup | Algorithm::Lin => "0-1",
            Algorithm::Lch => "0-ln(2D+1)",
            Algorithm::Res => "0-max IC",
            Algorithm::Jcn => "0-1e10",
            Algorithm::Lesk => "0-inf",
            Algorithm::Hso => "0-16",
        }
    }

    /// Whether scores fall in `[0, 1]`
    pub fn is_normalized(self) -> bool {
        matches!(self, Algorithm::Path | Algorithm::Wup | Algorithm::Lin)
    }

    pub fn info(self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: self.label(),
            description: self.description().to_string(),
            range: self.range().to_string(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Algorithm::parse("WUP").unwrap(), Algorithm::Wup);
        assert_eq!(" hso ".parse::<Algorithm>().unwrap(), Algorithm::Hso);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = Algorithm::parse("cosine").unwrap_err();
        assert!(matches!(err, SimilarityError::UnknownAlgorithm(name) if name == "cosine"));
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::all() {
            assert_eq!(Algorithm::parse(algorithm.name()).unwrap(), *algorithm);
        }
        assert_eq!(Algorithm::all().len(), 8);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Algorithm::Lesk).unwrap();
        assert_eq!(json, "\"lesk\"");
        let parsed: Algorithm = serde_json::from_str("\"jcn\"").unwrap();
        assert_eq!(parsed, Algorithm::Jcn);
    }
}
