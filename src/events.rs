//! Event labels and their deterministic integer coding.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A categorical label attached to a trial, either an integer or a string.
///
/// Labels of both kinds may be mixed within a single collection. The derived
/// ordering is total and deterministic: integer labels sort before string
/// labels, integers numerically, strings lexicographically.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
pub enum EventLabel {
    Int(i64),
    Str(String),
}

impl From<i64> for EventLabel {
    fn from(value: i64) -> Self {
        EventLabel::Int(value)
    }
}

impl From<&str> for EventLabel {
    fn from(value: &str) -> Self {
        EventLabel::Str(value.to_string())
    }
}

impl From<String> for EventLabel {
    fn from(value: String) -> Self {
        EventLabel::Str(value)
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventLabel::Int(value) => write!(f, "{}", value),
            EventLabel::Str(value) => write!(f, "{}", value),
        }
    }
}

/// Builds the label-to-code mapping from a collection of per-trial labels.
///
/// The unique labels are sorted and assigned sequential codes starting at 0,
/// so the mapping is reproducible across runs with the same label set,
/// regardless of the order in which the labels appear.
pub fn build_event_id(events: &[EventLabel]) -> Vec<(EventLabel, usize)> {
    events
        .iter()
        .cloned()
        .sorted()
        .dedup()
        .enumerate()
        .map(|(code, label)| (label, code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_sorted_codes() {
        let events: Vec<EventLabel> = vec!["b".into(), "a".into(), "b".into(), "a".into()];
        assert_eq!(
            build_event_id(&events),
            vec![("a".into(), 0), ("b".into(), 1)]
        );
    }

    #[test]
    fn test_event_id_ignores_insertion_order() {
        let forward: Vec<EventLabel> = vec![3.into(), 1.into(), 2.into()];
        let backward: Vec<EventLabel> = vec![2.into(), 1.into(), 3.into()];
        assert_eq!(build_event_id(&forward), build_event_id(&backward));
        assert_eq!(
            build_event_id(&forward),
            vec![(1.into(), 0), (2.into(), 1), (3.into(), 2)]
        );
    }

    #[test]
    fn test_event_id_mixed_labels() {
        // Integer labels sort before string labels
        let events: Vec<EventLabel> = vec!["go".into(), 7.into(), "stop".into()];
        assert_eq!(
            build_event_id(&events),
            vec![(7.into(), 0), ("go".into(), 1), ("stop".into(), 2)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EventLabel::from(42).to_string(), "42");
        assert_eq!(EventLabel::from("target").to_string(), "target");
    }
}
