//! Ambiguity resolution.
//!
//! Every tagger proposes spans; the resolver picks the cover of the whole
//! input with the lowest total [`Cost`]. Whitespace between spans is free and
//! produces no token; a whitelist key may still span it. Between equally
//! cheap covers the one whose next token is longest wins (leftmost-longest),
//! so the outcome never depends on tagger order.

use crate::{
    numy::NumyError,
    profile::LanguageProfile,
    tagger::{Candidates, Cost, TagError, Tagger},
    token::{Normalized, Token},
};
use smallvec::SmallVec;
use std::sync::Arc;

/// Best way to cover `text[i..]`.
#[derive(Clone)]
struct Step {
    total: u64,
    next: usize,
    /// `(tagger index, value)`; `None` for skipped whitespace.
    pick: Option<(usize, String)>,
}

#[derive(Default)]
pub struct Resolver {
    pub(crate) taggers: SmallVec<[Arc<dyn Tagger>; 4]>,
}

impl Resolver {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tagger. Two taggers with the same cost would tie on every span
    /// both can read, so that is rejected.
    pub fn push<T: Tagger + 'static>(self, tagger: T) -> Result<Self, NumyError> {
        self.push_arc(Arc::new(tagger))
    }

    pub fn push_arc(mut self, tagger: Arc<dyn Tagger>) -> Result<Self, NumyError> {
        if let Some(other) = self.taggers.iter().find(|t| t.cost() == tagger.cost()) {
            return Err(NumyError::CostTie(other.name(), tagger.name(), tagger.cost()));
        }
        self.taggers.push(tagger);
        Ok(self)
    }

    pub fn taggers(&self) -> impl Iterator<Item = &dyn Tagger> {
        self.taggers.iter().map(|t| t.as_ref())
    }

    pub fn resolve(&self, text: &str, profile: &LanguageProfile) -> Result<Normalized, NumyError> {
        let len = text.len();
        let mut best: Vec<Option<Step>> = vec![None; len + 1];
        best[len] = Some(Step {
            total: 0,
            next: len,
            pick: None,
        });

        let mut candidates = Candidates::new();
        for (start, c) in text.char_indices().rev() {
            if c.is_whitespace() {
                let next = start + c.len_utf8();
                best[start] = best[next].as_ref().map(|tail| Step {
                    total: tail.total,
                    next,
                    pick: None,
                });
                continue;
            }

            let mut chosen: Option<(Step, Cost)> = None;
            for (index, tagger) in self.taggers.iter().enumerate() {
                candidates.clear();
                tagger.candidates(text, start, profile, &mut candidates)?;
                for cand in candidates.drain(..) {
                    if cand.end <= start || cand.end > len || !text.is_char_boundary(cand.end) {
                        return Err(TagError::Failed(
                            tagger.name(),
                            format!("candidate {start}..{} is not a valid span", cand.end),
                        )
                        .into());
                    }
                    let Some(tail) = &best[cand.end] else {
                        continue;
                    };
                    let total = tail.total + u64::from(tagger.cost().0);
                    let better = match &chosen {
                        None => true,
                        Some((step, cost)) => (total, std::cmp::Reverse(cand.end), tagger.cost())
                            < (step.total, std::cmp::Reverse(step.next), *cost),
                    };
                    if better {
                        chosen = Some((
                            Step {
                                total,
                                next: cand.end,
                                pick: Some((index, cand.value)),
                            },
                            tagger.cost(),
                        ));
                    }
                }
            }
            best[start] = chosen.map(|(step, _)| step);
        }

        if best[0].is_none() {
            let offset = self.stuck_at(text, profile)?;
            return Err(NumyError::Uncovered { offset });
        }

        let mut tokens = Vec::new();
        let mut at = 0;
        while let Some(step) = best[at].take() {
            if let Some((index, value)) = step.pick {
                tokens.push(Token {
                    kind: self.taggers[index].kind(),
                    span: at..step.next,
                    value,
                });
            }
            if step.next == len {
                break;
            }
            at = step.next;
        }
        Ok(Normalized { tokens })
    }

    /// Furthest offset reachable from the start of `text`; every path stops
    /// there.
    fn stuck_at(&self, text: &str, profile: &LanguageProfile) -> Result<usize, NumyError> {
        let mut reached = vec![false; text.len() + 1];
        reached[0] = true;
        let mut furthest = 0;
        let mut candidates = Candidates::new();
        for (start, c) in text.char_indices() {
            if !reached[start] {
                continue;
            }
            furthest = start;
            if c.is_whitespace() {
                reached[start + c.len_utf8()] = true;
                continue;
            }
            for tagger in &self.taggers {
                candidates.clear();
                tagger.candidates(text, start, profile, &mut candidates)?;
                for cand in candidates.drain(..) {
                    reached[cand.end] = true;
                }
            }
        }
        Ok(furthest)
    }
}
