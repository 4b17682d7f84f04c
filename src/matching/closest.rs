use getset::Getters;
use strsim::levenshtein;

use crate::cli::MatchOptions;
use crate::core::CandidateSet;

/*****************************************************************************/
/* Fuzzy matching                                                            */
/*****************************************************************************/

/// The stage of the matching policy that produced a match.
#[derive(Debug, PartialEq, Eq)]
pub enum MatchStage {
    Containment,
    Affix,
    EditDistance(usize),
}

/// A matched candidate together with the stage that selected it.
#[derive(Debug, Getters, PartialEq, Eq)]
pub struct CandidateMatch<'a> {
    #[getset(get = "pub")]
    candidate: &'a str,
    #[getset(get = "pub")]
    stage: MatchStage,
}

/// Find the candidate matching `query`, trying three strategies of
/// increasing looseness: containment, affix, then bounded edit distance.
///
/// Candidates are scanned in set order and the first hit wins at every
/// stage; the edit-distance stage keeps the first candidate seen at the
/// minimum distance. Empty queries never match. That rejection must happen
/// before the containment scan, since `str::contains` treats the empty
/// string as a substring of everything.
pub fn closest_candidate<'a>(
    query: &str,
    candidates: &'a CandidateSet,
    match_opts: &MatchOptions,
) -> Option<CandidateMatch<'a>> {
    if query.is_empty() {
        return None;
    }

    containment_match(query, candidates)
        .or_else(|| affix_match(query, candidates))
        .or_else(|| edit_distance_match(query, candidates, match_opts.max_edit_distance))
}

fn containment_match<'a>(query: &str, candidates: &'a CandidateSet) -> Option<CandidateMatch<'a>> {
    candidates
        .iter()
        .find(|candidate| candidate.contains(query) || query.contains(candidate))
        .map(|candidate| CandidateMatch {
            candidate,
            stage: MatchStage::Containment,
        })
}

fn affix_match<'a>(query: &str, candidates: &'a CandidateSet) -> Option<CandidateMatch<'a>> {
    candidates
        .iter()
        .find(|candidate| {
            candidate.starts_with(query)
                || candidate.ends_with(query)
                || query.starts_with(candidate)
                || query.ends_with(candidate)
        })
        .map(|candidate| CandidateMatch {
            candidate,
            stage: MatchStage::Affix,
        })
}

fn edit_distance_match<'a>(
    query: &str,
    candidates: &'a CandidateSet,
    max_distance: usize,
) -> Option<CandidateMatch<'a>> {
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates.iter() {
        let distance = edit_distance(query, candidate);

        // Strictly-less keeps the first candidate seen at the minimum.
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.filter(|&(_, distance)| distance <= max_distance)
        .map(|(candidate, distance)| CandidateMatch {
            candidate,
            stage: MatchStage::EditDistance(distance),
        })
}

/// Unit-cost Levenshtein distance between two already-normalized names.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/*****************************************************************************/
/* Testing                                                                   */
/*****************************************************************************/
