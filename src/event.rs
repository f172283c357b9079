use std::{ops::Not, str::FromStr};

use crate::{compare::Compare, time::Time};

identifier!(WireId);

/// A discrete signal value carried by a wire.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derivative::Derivative,
    serde::Serialize,
    serde::Deserialize,
)]
#[derivative(Default)]
pub enum Level {
    #[display(fmt = "0")]
    #[serde(rename = "0")]
    Low,
    #[display(fmt = "1")]
    #[serde(rename = "1")]
    High,
    #[derivative(Default)]
    #[display(fmt = "X")]
    #[serde(rename = "X")]
    Undefined,
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
            Level::Undefined => Level::Undefined,
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Level::Low),
            "1" => Ok(Level::High),
            "X" | "x" => Ok(Level::Undefined),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid signal level `{0}`, expected one of 0, 1, X")]
pub struct ParseLevelError(String);

/// A scheduled change of a wire's level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_new::new, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub time: Time,
    pub target: WireId,
    pub level: Level,
}

/// Orders events so that the earliest time has the highest priority.
///
/// Only `time` participates; events at the same tick are unordered with respect to each other.
#[derive(Debug, Default, Copy, Clone)]
pub struct EventLess;

impl Compare<Event> for EventLess {
    fn higher(&self, a: &Event, b: &Event) -> bool {
        a.time < b.time
    }
}
