//! Candidate synsets of a word

use crate::error::Result;
use crate::types::WordSynsets;

use super::word::synset_infos;
use super::SimilarityEngine;

pub fn lookup_synsets(engine: &SimilarityEngine, word: &str) -> Result<WordSynsets> {
    let synsets = engine.resolver().resolve(word)?;
    Ok(WordSynsets {
        word: word.to_string(),
        synsets: synset_infos(engine, &synsets),
    })
}
