//! Sentence similarity through token alignment

use tracing::debug;

use crate::align::{tokenize_sentence, SentenceAligner};
use crate::error::Result;
use crate::similarity::Algorithm;
use crate::types::{round_to, SentenceSimilarity};

use super::SimilarityEngine;

/// Decimals kept in sentence-level scores and matrix cells
const SENTENCE_SCORE_DECIMALS: i32 = 4;

/// Tokenize both sentences and align them
pub fn sentence_similarity(
    engine: &SimilarityEngine,
    sentence1: &str,
    sentence2: &str,
    algorithm: &str,
) -> Result<SentenceSimilarity> {
    let tokens1 = tokenize_sentence(sentence1);
    let tokens2 = tokenize_sentence(sentence2);
    token_similarity(engine, &tokens1, &tokens2, algorithm)
}

/// Align pre-tokenized input; tokens may carry `lemma#pos#sense` annotations
pub fn token_similarity(
    engine: &SimilarityEngine,
    tokens1: &[String],
    tokens2: &[String],
    algorithm: &str,
) -> Result<SentenceSimilarity> {
    let algorithm = Algorithm::parse(algorithm)?;
    let alignment = SentenceAligner::new(engine.resolver()).align(tokens1, tokens2, algorithm);

    debug!(
        algorithm = %algorithm,
        tokens1 = tokens1.len(),
        tokens2 = tokens2.len(),
        score = alignment.score,
        "sentence similarity"
    );

    let matrix = alignment
        .matrix
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(|v| round_to(v, SENTENCE_SCORE_DECIMALS)))
                .collect()
        })
        .collect();

    Ok(SentenceSimilarity {
        algorithm: algorithm.label(),
        similarity: round_to(alignment.score, SENTENCE_SCORE_DECIMALS),
        words1: tokens1.to_vec(),
        words2: tokens2.to_vec(),
        resolved1: alignment.resolved1,
        resolved2: alignment.resolved2,
        matrix,
    })
}

#[cfg(test)]
mod tests {
    use crate::engine::tests::engine;
    use crate::error::SimilarityError;

    #[test]
    fn test_identical_sentences() {
        let engine = engine();
        let result = engine
            .sentence_similarity("Câinele și pisica", "câinele și pisica", "wup")
            .unwrap();
        // "și" is not in the taxonomy and stays unresolved
        assert_eq!(result.resolved1, vec![true, false, true]);
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.algorithm, "WUP");
    }

    #[test]
    fn test_empty_sentence_scores_zero() {
        let engine = engine();
        let result = engine.sentence_similarity("", "câine", "path").unwrap();
        assert_eq!(result.similarity, 0.0);
        assert!(result.words1.is_empty());
        assert!(result.matrix.is_empty());
    }

    #[test]
    fn test_matrix_is_rounded() {
        let engine = engine();
        let result = engine.sentence_similarity("câine", "pisică casă", "path").unwrap();
        // dog-cat 1/3, dog-house 1/4
        assert_eq!(result.matrix, vec![vec![Some(0.3333), Some(0.25)]]);
    }

    #[test]
    fn test_annotated_tokens() {
        let engine = engine();
        let tokens1 = vec!["câine#n#1".to_string()];
        let tokens2 = vec!["pisică#n".to_string(), "câine#x".to_string()];
        let result = engine.token_similarity(&tokens1, &tokens2, "lin").unwrap();
        assert_eq!(result.resolved2, vec![true, false]);
    }

    #[test]
    fn test_annotations_survive_sentence_tokenizing() {
        let engine = engine();
        let result = engine
            .sentence_similarity("câine#n#1", "Câine", "wup")
            .unwrap();
        assert_eq!(result.words1, vec!["câine#n#1"]);
        assert_eq!(result.resolved1, vec![true]);
        assert_eq!(result.similarity, 1.0);

        // a sense past the candidate list leaves the token unresolved
        let result = engine.sentence_similarity("câine#n#2 pisică", "pisică", "wup").unwrap();
        assert_eq!(result.words1, vec!["câine#n#2", "pisică"]);
        assert_eq!(result.resolved1, vec![false, true]);
    }

    #[test]
    fn test_unknown_algorithm() {
        let engine = engine();
        assert!(matches!(
            engine.sentence_similarity("câine", "pisică", "bm25"),
            Err(SimilarityError::UnknownAlgorithm(name)) if name == "bm25"
        ));
    }
}
