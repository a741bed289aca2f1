//! Overlap resolution for phrase matches.
//!
//! A scan keeps every match it finds, so "breaking double bottom" and the
//! "double bottom" inside it are both reported. [`PhraseContextList::super_only`]
//! keeps only the super-phrases.
//!
//! Resolution walks the matches in `(start, end)` order and lets each one
//! claim the word positions it covers. A position that is already claimed is
//! only taken over by a match that dominates the current owner:
//!
//! - a smaller start index wins;
//! - on equal start, the larger end index wins;
//! - on an identical span, the later match in sorted order wins.
//!
//! A match that loses at any of its positions is dropped entirely, and a
//! position is never handed back to a match that already lost it. Matches are
//! processed left to right, so a phrase that only partially overlaps an
//! earlier-starting one is dropped rather than splitting the span.

use crate::context::{PhraseContext, PhraseContextList};

impl<'s> PhraseContextList<'s> {
    /// Keep only matches that are not sub-phrases of another match.
    ///
    /// The result is sorted by start index and no two surviving spans overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use phrasetag::context::{PhraseContext, PhraseContextList};
    ///
    /// let sentence: Vec<String> = "its breaking double bottom today"
    ///     .split(' ')
    ///     .map(String::from)
    ///     .collect();
    ///
    /// let matches: PhraseContextList = vec![
    ///     PhraseContext::new(&sentence, 1, 3, 8).unwrap(),
    ///     PhraseContext::new(&sentence, 2, 3, 9).unwrap(),
    /// ]
    /// .into();
    ///
    /// let supers = matches.super_only();
    /// assert_eq!(supers.len(), 1);
    /// assert_eq!(supers[0].phrase_str(), "breaking double bottom");
    /// ```
    pub fn super_only(mut self) -> Self {
        if self.is_empty() {
            return PhraseContextList::new();
        }

        self.sort();

        let width = self.iter().map(|c| c.end() + 1).max().unwrap_or(0);
        let mut owners: Vec<Option<usize>> = vec![None; width];

        'candidates: for (i, candidate) in self.iter().enumerate() {
            for position in candidate.start()..=candidate.end() {
                match owners[position] {
                    None => owners[position] = Some(i),
                    Some(owner) if dominates(candidate, &self[owner]) => {
                        owners[position] = Some(i)
                    }
                    // sub-phrase, positions already claimed stay claimed
                    Some(_) => continue 'candidates,
                }
            }
        }

        let mut supers = PhraseContextList::new();
        let mut last = None;
        for owner in owners.into_iter().flatten() {
            if last != Some(owner) {
                supers.push(self[owner]);
                last = Some(owner);
            }
        }

        log::trace!(
            "resolved {} matches down to {} super-phrases",
            self.len(),
            supers.len()
        );

        supers
    }
}

/// Whether `candidate` takes a shared position away from `current`.
///
/// `>=` on the end index makes the later of two identical spans win. Keep it
/// that way: `test_identical_spans_last_sorted_wins` pins this tie-break.
fn dominates(candidate: &PhraseContext<'_>, current: &PhraseContext<'_>) -> bool {
    candidate.start() < current.start()
        || (candidate.start() == current.start() && candidate.end() >= current.end())
}

/// Free-function form of [`PhraseContextList::super_only`].
pub fn resolve_overlaps(matches: PhraseContextList<'_>) -> PhraseContextList<'_> {
    matches.super_only()
}
