//! In-memory roster index.
//!
//! Students are bucketed by their (first initial, last initial) pair in a
//! 26x26 grid, so a verification only scans the handful of students sharing
//! the claimant's initials. The index is read-only once loaded and is shared
//! between handlers behind an `Arc` without locking.

use crate::{
    error::verification::{InitialPosition, VerificationError},
    model::{claim::IdentityClaim, student::StudentRecord},
};

/// Number of letters per grid axis (A-Z).
pub const ALPHABET_LEN: usize = 26;

/// Roster grid keyed by (first initial, last initial).
#[derive(Debug, Clone)]
pub struct RosterIndex {
    /// Row-major `ALPHABET_LEN * ALPHABET_LEN` buckets.
    buckets: Vec<Vec<StudentRecord>>,
}

impl RosterIndex {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); ALPHABET_LEN * ALPHABET_LEN],
        }
    }

    /// Builds an index from a list of records.
    ///
    /// # Returns
    /// - `Ok(RosterIndex)` - Every record placed in its bucket
    /// - `Err(VerificationError::InvalidInitial)` - A record's initial is not A-Z
    pub fn from_records(
        records: impl IntoIterator<Item = StudentRecord>,
    ) -> Result<Self, VerificationError> {
        let mut index = Self::new();
        for record in records {
            index.insert(record)?;
        }
        Ok(index)
    }

    /// Adds a record to the bucket matching its own initials.
    pub fn insert(&mut self, record: StudentRecord) -> Result<(), VerificationError> {
        let slot = bucket_slot(record.first_initial, record.last_initial)?;
        self.buckets[slot].push(record);
        Ok(())
    }

    /// Records sharing the given pair of initials.
    pub fn bucket(
        &self,
        first_initial: char,
        last_initial: char,
    ) -> Result<&[StudentRecord], VerificationError> {
        let slot = bucket_slot(first_initial, last_initial)?;
        Ok(&self.buckets[slot])
    }

    /// Checks a claim against the roster.
    ///
    /// Scans the claim's bucket and stops at the first record that matches on
    /// initials, grade, and teacher initial.
    ///
    /// # Arguments
    /// - `claim` - Identity claim built from a `/verify` submission
    ///
    /// # Returns
    /// - `Ok(true)` - A matching student exists
    /// - `Ok(false)` - No student in the bucket matches
    /// - `Err(VerificationError::InvalidInitial)` - An initial is not an uppercase A-Z letter
    pub fn verify(&self, claim: &IdentityClaim) -> Result<bool, VerificationError> {
        let bucket = self.bucket(claim.first_initial, claim.last_initial)?;
        Ok(bucket.iter().any(|record| record.matches(claim)))
    }

    /// Total number of students on the roster.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

impl Default for RosterIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-based grid position of an initial, `'A'` being 0.
pub fn initial_index(initial: char, position: InitialPosition) -> Result<usize, VerificationError> {
    if initial.is_ascii_uppercase() {
        Ok((initial as u8 - b'A') as usize)
    } else {
        Err(VerificationError::InvalidInitial {
            position,
            value: initial,
        })
    }
}

fn bucket_slot(first_initial: char, last_initial: char) -> Result<usize, VerificationError> {
    let row = initial_index(first_initial, InitialPosition::First)?;
    let column = initial_index(last_initial, InitialPosition::Last)?;
    Ok(row * ALPHABET_LEN + column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first: char, last: char, grade: i64, teacher: char) -> StudentRecord {
        StudentRecord {
            first_initial: first,
            last_initial: last,
            grade,
            teacher_initial: teacher,
            student_number: 123456,
        }
    }

    fn claim(first: char, last: char, grade: i64, teacher: char) -> IdentityClaim {
        IdentityClaim {
            first_initial: first,
            last_initial: last,
            grade,
            teacher_initial: teacher,
            student_number: 999,
        }
    }

    /// Tests a claim that matches everything but the student number.
    ///
    /// Expected: Ok(true)
    #[test]
    fn verifies_matching_claim_regardless_of_student_number() {
        let roster = RosterIndex::from_records([student('J', 'S', 9, 'M')]).unwrap();

        assert_eq!(roster.verify(&claim('J', 'S', 9, 'M')), Ok(true));
    }

    /// Tests a claim with the wrong grade.
    ///
    /// Expected: Ok(false)
    #[test]
    fn rejects_claim_with_different_grade() {
        let roster = RosterIndex::from_records([student('J', 'S', 9, 'M')]).unwrap();

        assert_eq!(roster.verify(&claim('J', 'S', 10, 'M')), Ok(false));
    }

    /// Tests that the scan keeps going past non-matching records in a bucket.
    ///
    /// Expected: Ok(true) for the second record, Ok(false) for an unknown teacher
    #[test]
    fn scans_whole_bucket() {
        let roster = RosterIndex::from_records([
            student('J', 'S', 8, 'A'),
            student('J', 'S', 9, 'B'),
            student('J', 'S', 9, 'M'),
        ])
        .unwrap();

        assert_eq!(roster.verify(&claim('J', 'S', 9, 'M')), Ok(true));
        assert_eq!(roster.verify(&claim('J', 'S', 9, 'Z')), Ok(false));
        assert_eq!(roster.bucket('J', 'S').unwrap().len(), 3);
    }

    /// Tests that an empty bucket yields no match rather than an error.
    ///
    /// Expected: Ok(false) at both corners of the grid
    #[test]
    fn empty_bucket_is_no_match() {
        let roster = RosterIndex::new();

        assert_eq!(roster.verify(&claim('A', 'A', 7, 'M')), Ok(false));
        assert_eq!(roster.verify(&claim('Z', 'Z', 12, 'M')), Ok(false));
        assert!(roster.is_empty());
    }

    /// Tests every valid pair of initials against a populated index.
    ///
    /// Expected: no pair produces an error
    #[test]
    fn valid_initials_never_error() {
        let roster = RosterIndex::from_records([student('A', 'Z', 7, 'M')]).unwrap();

        for first in 'A'..='Z' {
            for last in 'A'..='Z' {
                assert!(roster.verify(&claim(first, last, 7, 'M')).is_ok());
            }
        }
    }

    /// Tests lowercase and non-letter initials.
    ///
    /// Expected: Err(VerificationError::InvalidInitial) naming the offending position
    #[test]
    fn rejects_invalid_initials() {
        let roster = RosterIndex::new();

        for bad in ['j', '1', '@', '[', 'É', ' '] {
            assert_eq!(
                roster.verify(&claim(bad, 'S', 9, 'M')),
                Err(VerificationError::InvalidInitial {
                    position: InitialPosition::First,
                    value: bad,
                })
            );
            assert_eq!(
                roster.verify(&claim('J', bad, 9, 'M')),
                Err(VerificationError::InvalidInitial {
                    position: InitialPosition::Last,
                    value: bad,
                })
            );
        }
    }

    /// Tests that records land in the bucket of their own initials.
    ///
    /// Expected: each record found only under its own pair
    #[test]
    fn buckets_by_initials() {
        let roster =
            RosterIndex::from_records([student('A', 'B', 7, 'M'), student('B', 'A', 8, 'M')])
                .unwrap();

        assert_eq!(roster.bucket('A', 'B').unwrap()[0].grade, 7);
        assert_eq!(roster.bucket('B', 'A').unwrap()[0].grade, 8);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn insert_rejects_lowercase_record() {
        let mut roster = RosterIndex::new();
        assert!(roster.insert(student('a', 'B', 7, 'M')).is_err());
        assert!(roster.is_empty());
    }
}
