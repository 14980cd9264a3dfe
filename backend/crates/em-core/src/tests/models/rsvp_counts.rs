use crate::{RsvpCounts, RsvpStatus};

use googletest::prelude::*;

#[googletest::test]
fn given_two_yes_and_one_maybe_when_tallied_then_counts_match() {
    let counts = RsvpCounts::tally([RsvpStatus::Yes, RsvpStatus::Yes, RsvpStatus::Maybe]);

    expect_that!(counts.yes, eq(2));
    expect_that!(counts.maybe, eq(1));
    expect_that!(counts.no, eq(0));
    expect_that!(counts.total, eq(3));
}

#[test]
fn given_no_rsvps_when_tallied_then_all_zero() {
    let counts = RsvpCounts::tally(Vec::<RsvpStatus>::new());

    assert_eq!(counts, RsvpCounts::default());
    assert_eq!(counts.responses_label(), "0 Responses");
}

#[test]
fn given_single_rsvp_when_labelled_then_singular() {
    let counts = RsvpCounts::tally([RsvpStatus::No]);

    assert_eq!(counts.responses_label(), "1 Response");
    assert_eq!(counts.count(RsvpStatus::No), 1);
}
