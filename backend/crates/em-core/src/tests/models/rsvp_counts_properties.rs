use crate::{RsvpCounts, RsvpStatus};

use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = RsvpStatus> {
    prop_oneof![
        Just(RsvpStatus::Yes),
        Just(RsvpStatus::No),
        Just(RsvpStatus::Maybe),
    ]
}

proptest! {
    #[test]
    fn given_any_permutation_when_tallied_then_counts_identical(
        (statuses, shuffled) in prop::collection::vec(status_strategy(), 0..64)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(RsvpCounts::tally(statuses), RsvpCounts::tally(shuffled));
    }

    #[test]
    fn given_any_statuses_when_tallied_then_partitions_sum_to_total(
        statuses in prop::collection::vec(status_strategy(), 0..64)
    ) {
        let counts = RsvpCounts::tally(statuses.iter().copied());
        prop_assert_eq!(counts.yes + counts.maybe + counts.no, counts.total);
        prop_assert_eq!(counts.total as usize, statuses.len());
    }
}
