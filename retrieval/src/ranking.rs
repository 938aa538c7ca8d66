use std::cmp::Ordering;

use serde::Serialize;

use crate::embedding::Fingerprint;

/// How many candidates survive a ranking call.
pub const TOP_K: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredCandidate<I> {
    pub score: f64,
    pub id: I,
}

/// At most `TOP_K` candidates, best first.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankingResult<I>(Vec<ScoredCandidate<I>>);

impl<I> RankingResult<I> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate<I>> {
        self.0.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.0.iter().map(|candidate| &candidate.id)
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|candidate| candidate.score)
    }

    /// Swaps each id for `f(id)`, keeping scores and order.
    pub fn map_ids<J, F>(self, mut f: F) -> RankingResult<J>
    where
        F: FnMut(I) -> J,
    {
        RankingResult(
            self.0
                .into_iter()
                .map(|candidate| ScoredCandidate {
                    score: candidate.score,
                    id: f(candidate.id),
                })
                .collect(),
        )
    }

}

impl<I> IntoIterator for RankingResult<I> {
    type Item = ScoredCandidate<I>;
    type IntoIter = std::vec::IntoIter<ScoredCandidate<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a RankingResult<I> {
    type Item = &'a ScoredCandidate<I>;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Scores every candidate against `query` and keeps the `TOP_K` best.
///
/// Candidates with equal scores keep the order they were supplied in. A zero
/// fingerprint on either side scores 0 and is still eligible for the result.
pub fn rank<I, C>(query: &Fingerprint, candidates: C) -> RankingResult<I>
where
    C: IntoIterator<Item = (I, Fingerprint)>,
{
    let mut scored: Vec<ScoredCandidate<I>> = candidates
        .into_iter()
        .map(|(id, fingerprint)| ScoredCandidate {
            score: query.dot(&fingerprint),
            id,
        })
        .collect();

    tracing::trace!(candidates = scored.len(), "ranking candidates");

    // sort_by is stable, ties stay in input order
    scored.sort_by(|a, b| descending(a.score, b.score));
    scored.truncate(TOP_K);

    RankingResult(scored)
}

// Fingerprints are finite, so scores are never NaN and partial_cmp always answers.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
