//! Pending Claim List
//!
//! Ordered, in-memory list of claims the user has queued up but not yet
//! submitted. Order is submission order.

use crate::error::ValidationError;
use crate::models::{PendingClaim, NOT_SET};

/// Empty input becomes the sentinel, everything else is kept as-is
pub fn effective(field: &str) -> &str {
    if field.is_empty() { NOT_SET } else { field }
}

/// Would adding (claim, vin) collide with an existing entry?
///
/// Inputs are already trimmed. A match on the effective pair, on a non-empty
/// claim number, or on a non-empty VIN all count as duplicates.
pub fn is_duplicate(claim: &str, vin: &str, list: &[PendingClaim]) -> bool {
    let eff_claim = effective(claim);
    let eff_vin = effective(vin);
    list.iter().any(|entry| {
        (entry.claim_number == eff_claim && entry.vin_number == eff_vin)
            || (!claim.is_empty() && entry.claim_number == claim)
            || (!vin.is_empty() && entry.vin_number == vin)
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingList {
    entries: Vec<PendingClaim>,
    last_id: u64,
}

impl PendingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PendingClaim] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate and append. `now_ms` seeds the id; ids stay strictly increasing
    pub fn add(&mut self, claim: &str, vin: &str, now_ms: u64) -> Result<&PendingClaim, ValidationError> {
        let claim = claim.trim();
        let vin = vin.trim();
        if claim.is_empty() && vin.is_empty() {
            return Err(ValidationError::EmptyRequest);
        }
        if is_duplicate(claim, vin, &self.entries) {
            return Err(ValidationError::Duplicate);
        }

        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.entries.push(PendingClaim {
            id,
            claim_number: effective(claim).to_string(),
            vin_number: effective(vin).to_string(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Returns whether anything was removed
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Take the entry at `from` out and reinsert it at `to`.
    /// Out-of-range indices leave the list untouched.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.entries.len();
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }
        let moved = self.entries.remove(from);
        self.entries.insert(to, moved);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One rendered row of the pending list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow {
    pub id: u64,
    /// 1-based position shown next to the row
    pub number: usize,
    pub index: usize,
    pub claim_number: String,
    pub vin_number: String,
}

pub fn project_rows(list: &[PendingClaim]) -> Vec<RequestRow> {
    list.iter()
        .enumerate()
        .map(|(index, entry)| RequestRow {
            id: entry.id,
            number: index + 1,
            index,
            claim_number: entry.claim_number.clone(),
            vin_number: entry.vin_number.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(pairs: &[(&str, &str)]) -> PendingList {
        let mut list = PendingList::new();
        for (i, (claim, vin)) in pairs.iter().enumerate() {
            list.add(claim, vin, 1_000 + i as u64).unwrap();
        }
        list
    }

    fn claims(list: &PendingList) -> Vec<&str> {
        list.entries().iter().map(|e| e.claim_number.as_str()).collect()
    }

    #[test]
    fn test_add_substitutes_sentinel() {
        let list = list_of(&[("A-1", ""), ("", "VIN2")]);
        assert_eq!(list.entries()[0].vin_number, NOT_SET);
        assert_eq!(list.entries()[1].claim_number, NOT_SET);
        assert_eq!(list.entries()[1].vin_number, "VIN2");
    }

    #[test]
    fn test_add_rejects_empty() {
        let mut list = list_of(&[("A-1", "")]);
        assert!(matches!(list.add("  ", "", 5_000), Err(ValidationError::EmptyRequest)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_and_keeps_length() {
        let mut list = list_of(&[("A-1", "VIN1")]);
        assert!(matches!(list.add("A-1", "OTHER", 5_000), Err(ValidationError::Duplicate)));
        assert!(matches!(list.add("", "VIN1", 5_001), Err(ValidationError::Duplicate)));
        assert_eq!(list.len(), 1);
        assert!(list.add("A-2", "VIN2", 5_002).is_ok());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_is_duplicate_conditions() {
        let list = list_of(&[("A-1", ""), ("", "VIN2")]);
        // Effective pair (A-1, sentinel)
        assert!(is_duplicate("A-1", "", list.entries()));
        // Claim match alone
        assert!(is_duplicate("A-1", "NEW", list.entries()));
        // VIN match alone, even with a different claim
        assert!(is_duplicate("B-9", "VIN2", list.entries()));
        // Empty input never matches a sentinel field by itself
        assert!(!is_duplicate("B-9", "", list.entries()));
        assert!(!is_duplicate("", "VIN3", list.entries()));
    }

    #[test]
    fn test_ids_strictly_increase_with_frozen_clock() {
        let mut list = PendingList::new();
        let a = list.add("A", "", 42).unwrap().id;
        let b = list.add("B", "", 42).unwrap().id;
        let c = list.add("C", "", 10).unwrap().id;
        assert!(a < b && b < c);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = list_of(&[("A", ""), ("B", ""), ("C", "")]);
        let id = list.entries()[1].id;
        assert!(list.remove(id));
        assert_eq!(claims(&list), vec!["A", "C"]);
        assert!(!list.remove(id));
    }

    #[test]
    fn test_move_to_is_stable_splice() {
        let mut list = list_of(&[("A", ""), ("B", ""), ("C", ""), ("D", "")]);
        list.move_to(0, 2);
        assert_eq!(claims(&list), vec!["B", "C", "A", "D"]);
        list.move_to(3, 0);
        assert_eq!(claims(&list), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn test_move_to_identity_and_out_of_range() {
        let mut list = list_of(&[("A", ""), ("B", ""), ("C", "")]);
        let before = list.clone();
        assert!(list.move_to(1, 1));
        assert_eq!(list, before);
        assert!(!list.move_to(0, 3));
        assert!(!list.move_to(7, 0));
        assert_eq!(list, before);
    }

    #[test]
    fn test_project_rows_numbers_from_one() {
        let list = list_of(&[("A", ""), ("B", "VIN")]);
        let rows = project_rows(list.entries());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].vin_number, "VIN");
    }
}
