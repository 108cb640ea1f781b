//! Lemmatizers mapping inflected forms to dictionary forms

use std::collections::HashMap;

/// Maps a surface form to candidate lemmas
pub trait Lemmatizer: Send + Sync {
    /// Most likely lemma
    fn lemmatize(&self, form: &str) -> String;

    /// Candidate lemmas in preference order
    fn candidates(&self, form: &str) -> Vec<String> {
        vec![self.lemmatize(form)]
    }
}

/// Leaves forms unchanged apart from case
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, form: &str) -> String {
        form.trim().to_lowercase()
    }
}

/// Romanian irregular forms
const IRREGULARS: &[(&str, &str)] = &[
    ("câinele", "câine"),
    ("câinelui", "câine"),
    ("câini", "câine"),
    ("câinii", "câine"),
    ("pisica", "pisică"),
    ("pisicii", "pisică"),
    ("pisici", "pisică"),
    ("oameni", "om"),
    ("oamenii", "om"),
    ("omul", "om"),
    ("copii", "copil"),
    ("copiii", "copil"),
    ("copilul", "copil"),
    ("femei", "femeie"),
    ("femeile", "femeie"),
    ("bărbați", "bărbat"),
    ("bărbații", "bărbat"),
    ("case", "casă"),
    ("casele", "casă"),
    ("casei", "casă"),
    ("mașini", "mașină"),
    ("mașinile", "mașină"),
    ("copaci", "copac"),
    ("copacii", "copac"),
    ("flori", "floare"),
    ("florile", "floare"),
    ("cărți", "carte"),
    ("cărțile", "carte"),
];

/// Definite articles and plurals
const NOUN_SUFFIXES: &[&str] = &[
    "ul", "le", "a", "ua", "ului", "ilor", "elor", "i", "e", "uri", "ele", "ii", "iile", "urile",
];

/// Present, past, participle and infinitive endings
const VERB_SUFFIXES: &[&str] = &[
    "ez", "ezi", "ează", "ăm", "ați", "esc", "ești", "ește", "im", "iți", "am", "ai", "a", "ară",
    "au", "eam", "eai", "ea", "eau", "iam", "iai", "ia", "iau", "at", "it", "ut", "ât", "e", "i",
    "î",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ă", "e", "i", "ul", "a", "ei", "ului", "ilor"];

/// Endings re-added after stripping a suffix
const RESTORED_ENDINGS: &[&str] = &["ă", "e", "a"];

/// Characters a stem must keep beyond the stripped suffix
const MIN_STEM_CHARS: usize = 3;

/// Rule-based Romanian lemmatizer: irregular table, then suffix stripping
#[derive(Debug, Clone)]
pub struct SuffixLemmatizer {
    irregulars: HashMap<&'static str, &'static str>,
    suffixes: Vec<&'static str>,
}

impl SuffixLemmatizer {
    pub fn new() -> Self {
        let mut suffixes: Vec<&'static str> = Vec::new();
        for &suffix in NOUN_SUFFIXES
            .iter()
            .chain(VERB_SUFFIXES)
            .chain(ADJECTIVE_SUFFIXES)
        {
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        // Longest first; stable so equal lengths keep table order
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        Self {
            irregulars: IRREGULARS.iter().copied().collect(),
            suffixes,
        }
    }

    fn stems<'w>(&'w self, word: &'w str) -> impl Iterator<Item = &'w str> + 'w {
        let length = word.chars().count();
        self.suffixes.iter().filter_map(move |suffix| {
            let stem = word.strip_suffix(suffix)?;
            (length >= suffix.chars().count() + MIN_STEM_CHARS).then_some(stem)
        })
    }
}

impl Default for SuffixLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize(&self, form: &str) -> String {
        let word = form.trim().to_lowercase();
        if let Some(lemma) = self.irregulars.get(word.as_str()) {
            return lemma.to_string();
        }
        let lemma = match self.stems(&word).next() {
            Some(stem) => stem.to_string(),
            None => word.clone(),
        };
        lemma
    }

    fn candidates(&self, form: &str) -> Vec<String> {
        let word = form.trim().to_lowercase();
        let mut candidates: Vec<String> = Vec::new();
        let mut push = |candidate: String| {
            if candidate != word && !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        };

        if let Some(lemma) = self.irregulars.get(word.as_str()) {
            push(lemma.to_string());
        }
        for stem in self.stems(&word) {
            push(stem.to_string());
            for ending in RESTORED_ENDINGS {
                push(format!("{}{}", stem, ending));
            }
        }
        candidates
    }
}
