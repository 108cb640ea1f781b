//! Synset and raw taxonomy record types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Part of speech of a synset.
///
/// Serialized with the WordNet single-letter codes (`n`, `v`, `a`, `r`).
/// Records may also use full names or the numeric codes `0`..`3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n", alias = "noun", alias = "NOUN", alias = "0")]
    Noun,
    #[serde(rename = "v", alias = "verb", alias = "VERB", alias = "1")]
    Verb,
    #[serde(
        rename = "a",
        alias = "adj",
        alias = "adjective",
        alias = "ADJ",
        alias = "2"
    )]
    Adjective,
    #[serde(
        rename = "r",
        alias = "adv",
        alias = "adverb",
        alias = "ADV",
        alias = "3"
    )]
    Adverb,
}

impl PartOfSpeech {
    /// All parts of speech in canonical order
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter WordNet code
    pub fn code(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::Adverb => "r",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PartOfSpeech {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "noun" | "0" => Ok(PartOfSpeech::Noun),
            "v" | "verb" | "1" => Ok(PartOfSpeech::Verb),
            "a" | "adj" | "adjective" | "2" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" | "3" => Ok(PartOfSpeech::Adverb),
            other => Err(SimilarityError::InvalidAnnotation(format!(
                "unknown part of speech '{}'",
                other
            ))),
        }
    }
}

/// A word meaning node in the taxonomy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synset {
    pub id: String,
    pub pos: PartOfSpeech,
    pub literals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

impl Synset {
    /// Create a new synset without gloss
    pub fn new(id: String, pos: PartOfSpeech, literals: Vec<String>) -> Self {
        Self {
            id,
            pos,
            literals,
            gloss: None,
        }
    }

    /// Gloss text, empty when the synset has none
    pub fn gloss_text(&self) -> &str {
        self.gloss.as_deref().unwrap_or("")
    }
}

/// Literal as it appears in a record: a bare word or a word with its sense number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralEntry {
    Plain(String),
    Ranked {
        #[serde(alias = "literal")]
        word: String,
        #[serde(default)]
        sense: Option<u32>,
    },
}

impl LiteralEntry {
    pub fn word(&self) -> &str {
        match self {
            LiteralEntry::Plain(word) => word,
            LiteralEntry::Ranked { word, .. } => word,
        }
    }

    pub fn sense(&self) -> Option<u32> {
        match self {
            LiteralEntry::Plain(_) => None,
            LiteralEntry::Ranked { sense, .. } => *sense,
        }
    }
}

/// Raw synset record handed to the taxonomy builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub pos: PartOfSpeech,
    #[serde(default)]
    pub literals: Vec<LiteralEntry>,
    #[serde(default, alias = "definition", skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hypernyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hyponyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub root: bool,
}

impl SynsetRecord {
    /// Create a record with plain literals and no edges
    pub fn new(id: &str, pos: PartOfSpeech, literals: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            pos,
            literals: literals
                .iter()
                .map(|l| LiteralEntry::Plain(l.to_string()))
                .collect(),
            gloss: None,
            hypernyms: Vec::new(),
            hyponyms: Vec::new(),
            similar: Vec::new(),
            root: false,
        }
    }

    pub fn with_gloss(mut self, gloss: &str) -> Self {
        self.gloss = Some(gloss.to_string());
        self
    }

    pub fn with_hypernyms(mut self, hypernyms: &[&str]) -> Self {
        self.hypernyms = hypernyms.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn with_similar(mut self, similar: &[&str]) -> Self {
        self.similar = similar.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn as_root(mut self) -> Self {
        self.root = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_from_str_aliases() {
        assert_eq!("n".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("Verb".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Verb);
        assert_eq!("2".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adjective);
        assert_eq!("adv".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adverb);
        assert!("x".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_record_deserialize_mixed_literals() {
        let line = r#"{"id":"s1","pos":"noun","literals":["câine",{"word":"dulău","sense":2}],"definition":"animal domestic","hypernyms":["s0"]}"#;
        let record: SynsetRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.pos, PartOfSpeech::Noun);
        assert_eq!(record.literals.len(), 2);
        assert_eq!(record.literals[0].word(), "câine");
        assert_eq!(record.literals[1].sense(), Some(2));
        assert_eq!(record.gloss.as_deref(), Some("animal domestic"));
        assert_eq!(record.hypernyms, vec!["s0".to_string()]);
        assert!(!record.root);
    }

    #[test]
    fn test_pos_serializes_as_code() {
        let json = serde_json::to_string(&PartOfSpeech::Adverb).unwrap();
        assert_eq!(json, "\"r\"");
    }
}
