//! Information-content measures: RES, JCN, LIN

use crate::information::InformationContent;
use crate::search::AncestorSearch;
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

use super::SynsetScore;

/// Score reported by JCN when the information-content distance vanishes
pub const JCN_MAX: f64 = 1e10;

/// Resnik: information content of the selected LCS
pub fn res(
    graph: &TaxonomyGraph,
    ic: &InformationContent,
    s1: SynsetIdx,
    s2: SynsetIdx,
) -> SynsetScore {
    match AncestorSearch::new(graph).lcs(s1, s2) {
        Some(lcs) => SynsetScore::new(ic.ic_of(lcs.synset), Some(lcs.synset)),
        None => SynsetScore::ZERO,
    }
}

/// Jiang-Conrath: `1 / (ic(s1) + ic(s2) - 2 * ic(lcs))`, capped at [`JCN_MAX`]
pub fn jcn(
    graph: &TaxonomyGraph,
    ic: &InformationContent,
    s1: SynsetIdx,
    s2: SynsetIdx,
) -> SynsetScore {
    if s1 == s2 {
        return SynsetScore::new(JCN_MAX, Some(s1));
    }
    let Some(lcs) = AncestorSearch::new(graph).lcs(s1, s2) else {
        return SynsetScore::ZERO;
    };
    let distance = ic.ic_of(s1) + ic.ic_of(s2) - 2.0 * ic.ic_of(lcs.synset);
    let value = if distance <= f64::EPSILON {
        JCN_MAX
    } else {
        (1.0 / distance).min(JCN_MAX)
    };
    SynsetScore::new(value, Some(lcs.synset))
}

/// Lin: `2 * ic(lcs) / (ic(s1) + ic(s2))`
pub fn lin(
    graph: &TaxonomyGraph,
    ic: &InformationContent,
    s1: SynsetIdx,
    s2: SynsetIdx,
) -> SynsetScore {
    if s1 == s2 {
        return SynsetScore::new(1.0, Some(s1));
    }
    let Some(lcs) = AncestorSearch::new(graph).lcs(s1, s2) else {
        return SynsetScore::ZERO;
    };
    let denominator = ic.ic_of(s1) + ic.ic_of(s2);
    if denominator == 0.0 {
        return SynsetScore::new(0.0, Some(lcs.synset));
    }
    let value = 2.0 * ic.ic_of(lcs.synset) / denominator;
    SynsetScore::new(value, Some(lcs.synset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::tests::three_level;

    fn fixture() -> (TaxonomyGraph, InformationContent) {
        let graph = three_level();
        let ic = InformationContent::uniform(&graph);
        (graph, ic)
    }

    #[test]
    fn test_res_is_ic_of_lcs() {
        let (graph, ic) = fixture();
        let a1 = graph.lookup("A1").unwrap();
        let a2 = graph.lookup("A2").unwrap();
        let b = graph.lookup("B").unwrap();

        assert!((res(&graph, &ic, a1, a2).value - (5.0f64 / 3.0).ln()).abs() < 1e-12);
        assert_eq!(res(&graph, &ic, a1, b).value, 0.0);
    }

    #[test]
    fn test_jcn_values() {
        let (graph, ic) = fixture();
        let a1 = graph.lookup("A1").unwrap();
        let a2 = graph.lookup("A2").unwrap();

        // ic(A1) = ic(A2) = ln 5, ic(A) = ln(5/3)
        let distance = 2.0 * 5.0f64.ln() - 2.0 * (5.0f64 / 3.0).ln();
        assert!((jcn(&graph, &ic, a1, a2).value - 1.0 / distance).abs() < 1e-12);
        assert_eq!(jcn(&graph, &ic, a1, a1).value, JCN_MAX);
    }

    #[test]
    fn test_jcn_against_root_is_finite() {
        let (graph, ic) = fixture();
        let root = graph.lookup("root").unwrap();
        let a = graph.lookup("A").unwrap();
        // lcs is the root: distance = ic(A)
        let expected = 1.0 / (5.0f64 / 3.0).ln();
        assert!((jcn(&graph, &ic, root, a).value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lin_values() {
        let (graph, ic) = fixture();
        let a1 = graph.lookup("A1").unwrap();
        let a2 = graph.lookup("A2").unwrap();
        let root = graph.lookup("root").unwrap();

        let expected = 2.0 * (5.0f64 / 3.0).ln() / (2.0 * 5.0f64.ln());
        assert!((lin(&graph, &ic, a1, a2).value - expected).abs() < 1e-12);
        assert_eq!(lin(&graph, &ic, a1, a1).value, 1.0);
        assert_eq!(lin(&graph, &ic, root, root).value, 1.0);
        // lcs is the root, whose ic is 0
        assert_eq!(lin(&graph, &ic, root, a1).value, 0.0);
    }
}
