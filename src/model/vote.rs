//! Vote domain models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::VerdictChoice;

/// Per-category vote tally for a case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VoteStats {
    pub person_a: i64,
    pub person_b: i64,
    pub both: i64,
    pub neither: i64,
    pub total: i64,
}

impl VoteStats {
    /// Build stats from grouped per-choice counts.
    /// `total` is always the sum of the four categories.
    pub fn tally(counts: impl IntoIterator<Item = (VerdictChoice, i64)>) -> Self {
        let mut stats = Self::default();
        for (choice, count) in counts {
            match choice {
                VerdictChoice::PersonA => stats.person_a += count,
                VerdictChoice::PersonB => stats.person_b += count,
                VerdictChoice::Both => stats.both += count,
                VerdictChoice::Neither => stats.neither += count,
            }
            stats.total += count;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_sums_to_total() {
        let stats = VoteStats::tally(vec![
            (VerdictChoice::PersonA, 3),
            (VerdictChoice::PersonB, 2),
            (VerdictChoice::Neither, 1),
        ]);

        assert_eq!(stats.person_a, 3);
        assert_eq!(stats.person_b, 2);
        assert_eq!(stats.both, 0);
        assert_eq!(stats.neither, 1);
        assert_eq!(
            stats.total,
            stats.person_a + stats.person_b + stats.both + stats.neither
        );
    }

    #[test]
    fn test_tally_empty() {
        let stats = VoteStats::tally(vec![]);
        assert_eq!(stats, VoteStats::default());
        assert_eq!(stats.total, 0);
    }
}
