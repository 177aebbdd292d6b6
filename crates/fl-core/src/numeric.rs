use crate::FlError;

/// Integer type of capacities and flow values.
///
/// Signed, so that negative user input survives parsing and can be rejected
/// by the verifier instead of wrapping.
pub type Flow = i64;

/// Sum flow values, failing instead of wrapping on overflow.
pub fn checked_flow_sum<I>(values: I, what: &'static str) -> Result<Flow, FlError>
where
    I: IntoIterator<Item = Flow>,
{
    values
        .into_iter()
        .try_fold(0, |acc: Flow, v| acc.checked_add(v))
        .ok_or(FlError::Overflow { what })
}

/// Sum flow values exactly and clamp the result into `Flow`.
///
/// For diagnostics over untrusted values, where a clamped total is still
/// more useful than no answer.
pub fn saturating_flow_sum<I>(values: I) -> Flow
where
    I: IntoIterator<Item = Flow>,
{
    let total: i128 = values.into_iter().map(i128::from).sum();
    Flow::try_from(total).unwrap_or(if total < 0 { Flow::MIN } else { Flow::MAX })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn small_sums_match_iterator_sum(values in prop::collection::vec(-1_000_i64..1_000, 0..20)) {
            let expected: Flow = values.iter().sum();
            prop_assert_eq!(checked_flow_sum(values.clone(), "prop"), Ok(expected));
            prop_assert_eq!(saturating_flow_sum(values), expected);
        }
    }
}
