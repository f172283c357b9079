use crate::{
    event::{Level, WireId},
    time::Time,
};

/// A level transition observed on a wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_new::new, serde::Serialize, serde::Deserialize,
)]
pub struct Record {
    /// When the transition happened.
    pub time: Time,
    /// The wire that changed.
    pub wire: WireId,
    /// The level the wire settled on.
    pub level: Level,
}
