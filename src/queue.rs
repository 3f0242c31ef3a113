// src/queue.rs
//! Cursor-based browsing session over a fixed candidate snapshot
//!
//! The candidate sequence is immutable after load; only the cursor moves, and
//! only through `advance()`. The queue wraps around instead of terminating so
//! a company can re-browse the same batch. No persistence: a fresh snapshot
//! is fetched each time a session starts.

use crate::types::CandidateProfile;

/// Outcome of a single `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved to the next candidate.
    Moved,
    /// The last candidate was processed; cursor wrapped back to the start.
    Wrapped,
    /// Empty queue, nothing to advance over.
    Empty,
}

pub struct MatchQueue {
    candidates: Vec<CandidateProfile>,
    cursor: usize,
}

impl MatchQueue {
    pub fn new(candidates: Vec<CandidateProfile>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// The candidate under the cursor, or None when the batch is empty.
    pub fn current(&self) -> Option<&CandidateProfile> {
        self.candidates.get(self.cursor)
    }

    /// Move the cursor forward one position, wrapping at the end.
    pub fn advance(&mut self) -> Advance {
        if self.candidates.is_empty() {
            return Advance::Empty;
        }
        if self.cursor + 1 == self.candidates.len() {
            self.cursor = 0;
            Advance::Wrapped
        } else {
            self.cursor += 1;
            Advance::Moved
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidates left after the current one in this pass.
    pub fn remaining(&self) -> usize {
        if self.candidates.is_empty() {
            0
        } else {
            self.candidates.len() - self.cursor - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            name: format!("Candidate {id}"),
            email: format!("{id}@example.com"),
            skills: vec!["Rust".to_string()],
            experience: "2 years".to_string(),
            education: "BSc".to_string(),
            location: "Taipei".to_string(),
            profile_image: None,
            bio: None,
            projects: None,
        }
    }

    #[test]
    fn test_empty_queue_is_terminal() {
        let mut queue = MatchQueue::new(vec![]);
        assert!(queue.current().is_none());
        assert_eq!(queue.advance(), Advance::Empty);
        assert!(queue.current().is_none());
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn test_advance_wraps_after_full_pass() {
        for n in 1..=5 {
            let mut queue =
                MatchQueue::new((0..n).map(|i| candidate(&i.to_string())).collect());
            let start = queue.cursor();

            for i in 0..n {
                let outcome = queue.advance();
                if i + 1 == n {
                    assert_eq!(outcome, Advance::Wrapped);
                } else {
                    assert_eq!(outcome, Advance::Moved);
                }
            }

            // Exactly N advances return the cursor to its original position.
            assert_eq!(queue.cursor(), start);
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut queue = MatchQueue::new(vec![candidate("a"), candidate("b"), candidate("c")]);
        for _ in 0..10 {
            assert!(queue.cursor() < queue.len());
            assert!(queue.current().is_some());
            queue.advance();
        }
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut queue = MatchQueue::new(vec![candidate("a"), candidate("b"), candidate("c")]);
        assert_eq!(queue.remaining(), 2);
        queue.advance();
        assert_eq!(queue.remaining(), 1);
        queue.advance();
        assert_eq!(queue.remaining(), 0);
        queue.advance(); // wraps
        assert_eq!(queue.remaining(), 2);
    }

    #[test]
    fn test_single_candidate_always_wraps() {
        let mut queue = MatchQueue::new(vec![candidate("only")]);
        assert_eq!(queue.advance(), Advance::Wrapped);
        assert_eq!(queue.advance(), Advance::Wrapped);
        assert_eq!(queue.current().unwrap().id, "only");
    }
}
