// Proptest generators for domain types.
// Action sequences are generated valid by construction; picks of already
// chosen or post-decision answers are legal inputs and exercised on purpose.

use proptest::prelude::*;

use crate::domain::question::AnswerId;

/// One user action inside a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Pick(AnswerId),
    Pass,
}

/// Shared proptest configuration; `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    ProptestConfig {
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}

/// Any answer id of the standard fixture question.
pub fn answer_id() -> impl Strategy<Value = AnswerId> {
    1u32..=10u32
}

pub fn round_action() -> impl Strategy<Value = RoundAction> {
    prop_oneof![
        3 => answer_id().prop_map(RoundAction::Pick),
        1 => Just(RoundAction::Pass),
    ]
}

/// Up to 24 actions: enough to exhaust every answer and then some.
pub fn round_actions() -> impl Strategy<Value = Vec<RoundAction>> {
    prop::collection::vec(round_action(), 0..24)
}

/// Distinct answer ids in a random order.
pub fn pick_order() -> impl Strategy<Value = Vec<AnswerId>> {
    Just((1u32..=10u32).collect::<Vec<_>>()).prop_shuffle()
}
