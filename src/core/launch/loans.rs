//=========================================================================
// Loan Registry
//=========================================================================
//
// Tracks pooled actors currently on loan, one binding per actor.
//
// Architecture:
//   HashMap<ActorId, LoanBinding>
//     ├─ insert()          on acquisition
//     ├─ mark_in_flight()  on a Launched notification
//     └─ remove()          on a Landed notification (actor returned)
//
// Bulk release iterates over `snapshot()`, never over the live map.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use crate::core::collaborators::ActorId;

//=== LoanBinding =========================================================

/// Lifecycle binding of one loaned actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanBinding {
    /// Acquisition order, used to keep snapshots deterministic.
    pub sequence: u64,

    /// Set once the actor has been launched.
    pub in_flight: bool,
}

//=== LoanRegistry ========================================================

/// Registry of actors on loan from the pool.
#[derive(Debug, Default)]
pub struct LoanRegistry {
    loans: HashMap<ActorId, LoanBinding>,
    next_sequence: u64,
}

impl LoanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `actor`. Returns `false` if it was already tracked.
    pub fn insert(&mut self, actor: ActorId) -> bool {
        if self.loans.contains_key(&actor) {
            return false;
        }
        let binding = LoanBinding {
            sequence: self.next_sequence,
            in_flight: false,
        };
        self.next_sequence += 1;
        self.loans.insert(actor, binding);
        true
    }

    /// Marks a tracked actor as launched. Returns `false` if untracked.
    pub fn mark_in_flight(&mut self, actor: ActorId) -> bool {
        match self.loans.get_mut(&actor) {
            Some(binding) => {
                binding.in_flight = true;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `actor`, returning its binding.
    pub fn remove(&mut self, actor: ActorId) -> Option<LoanBinding> {
        self.loans.remove(&actor)
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, actor: ActorId) -> bool {
        self.loans.contains_key(&actor)
    }

    pub fn is_in_flight(&self, actor: ActorId) -> bool {
        self.loans.get(&actor).is_some_and(|b| b.in_flight)
    }

    /// Copy of the tracked ids in acquisition order.
    pub fn snapshot(&self) -> Vec<ActorId> {
        let mut entries: Vec<_> = self.loans.iter().map(|(id, b)| (b.sequence, *id)).collect();
        entries.sort_unstable();
        entries.into_iter().map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_tracks_once() {
        let mut loans = LoanRegistry::new();
        assert!(loans.insert(ActorId(3)));
        assert!(!loans.insert(ActorId(3)));
        assert_eq!(loans.len(), 1);
        assert!(loans.contains(ActorId(3)));
    }

    #[test]
    fn in_flight_is_per_actor() {
        let mut loans = LoanRegistry::new();
        loans.insert(ActorId(1));
        loans.insert(ActorId(2));

        assert!(loans.mark_in_flight(ActorId(2)));
        assert!(!loans.mark_in_flight(ActorId(9)));

        assert!(!loans.is_in_flight(ActorId(1)));
        assert!(loans.is_in_flight(ActorId(2)));
    }

    #[test]
    fn remove_leaves_other_loans() {
        let mut loans = LoanRegistry::new();
        loans.insert(ActorId(1));
        loans.insert(ActorId(2));
        loans.mark_in_flight(ActorId(1));

        let binding = loans.remove(ActorId(1)).unwrap();
        assert!(binding.in_flight);
        assert!(loans.remove(ActorId(1)).is_none());
        assert!(loans.contains(ActorId(2)));
    }

    #[test]
    fn snapshot_follows_acquisition_order() {
        let mut loans = LoanRegistry::new();
        for id in [5, 1, 9] {
            loans.insert(ActorId(id));
        }
        assert_eq!(loans.snapshot(), vec![ActorId(5), ActorId(1), ActorId(9)]);

        // Releasing while walking the snapshot leaves the registry empty.
        for id in loans.snapshot() {
            loans.remove(id);
        }
        assert!(loans.is_empty());
    }
}
