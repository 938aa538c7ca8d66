//! Toy retrieval: a hashed bag-of-words fingerprint per text, cosine ranking
//! against a query, and the top few documents stitched into an answer.
//!
//! Everything here is pure and synchronous. Callers own the candidate set and
//! pass it in on every call.

pub mod answer;
pub mod embedding;
pub mod ranking;

pub use answer::{compose_answer, compose_context, ANSWER_PREFIX, CONTEXT_SEPARATOR};
pub use embedding::{embed, Fingerprint, DIMENSIONS};
pub use ranking::{rank, RankingResult, ScoredCandidate, TOP_K};

/// Ranks `documents` against `query`, each document being its own identifier.
///
/// Two identical documents can't be told apart in the result; use
/// [`retrieve_with_ids`] when that matters.
pub fn retrieve<'a>(query: &str, documents: &'a [String]) -> RankingResult<&'a str> {
    let query = embed(query);
    rank(
        &query,
        documents
            .iter()
            .map(|document| (document.as_str(), embed(document))),
    )
}

/// Ranks `(id, text)` pairs against `query`, keeping the text next to its id.
pub fn retrieve_with_ids<I, D>(query: &str, documents: D) -> RankingResult<(I, String)>
where
    D: IntoIterator<Item = (I, String)>,
{
    let query = embed(query);
    rank(
        &query,
        documents.into_iter().map(|(id, text)| {
            let fingerprint = embed(&text);
            ((id, text), fingerprint)
        }),
    )
}
