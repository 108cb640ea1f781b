//! `lemma#pos#sense` word annotations

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimilarityError};
use crate::types::PartOfSpeech;

/// A token with an optional part of speech and 1-based sense rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    pub lemma: String,
    pub pos: Option<PartOfSpeech>,
    pub sense: Option<usize>,
}

impl WordQuery {
    pub fn new(lemma: &str) -> Self {
        Self {
            lemma: lemma.trim().to_lowercase(),
            pos: None,
            sense: None,
        }
    }

    /// Parse `lemma`, `lemma#pos` or `lemma#pos#sense`.
    ///
    /// An empty POS field (`lemma##2`) leaves the part of speech open.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.trim().split('#');
        let lemma = parts.next().unwrap_or_default().trim();
        if lemma.is_empty() {
            return Err(SimilarityError::InvalidAnnotation(format!(
                "missing lemma in '{}'",
                input
            )));
        }
        let mut query = Self::new(lemma);

        if let Some(pos) = parts.next().map(str::trim).filter(|p| !p.is_empty()) {
            query.pos = Some(pos.parse()?);
        }
        if let Some(sense) = parts.next().map(str::trim) {
            let rank = sense.parse::<usize>().map_err(|_| {
                SimilarityError::InvalidAnnotation(format!(
                    "sense '{}' in '{}' is not a number",
                    sense, input
                ))
            })?;
            query.sense = Some(rank);
        }
        if parts.next().is_some() {
            return Err(SimilarityError::InvalidAnnotation(format!(
                "too many '#' fields in '{}'",
                input
            )));
        }
        Ok(query)
    }
}

/// Parse a `lemma#pos#sense` annotation
pub fn parse_annotation(input: &str) -> Result<WordQuery> {
    WordQuery::parse(input)
}

impl FromStr for WordQuery {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for WordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lemma)?;
        match (self.pos, self.sense) {
            (Some(pos), Some(sense)) => write!(f, "#{}#{}", pos, sense),
            (Some(pos), None) => write!(f, "#{}", pos),
            (None, Some(sense)) => write!(f, "##{}", sense),
            (None, None) => Ok(()),
        }
    }
}
