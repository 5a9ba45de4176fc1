use serde::{Deserialize, Serialize};

/// The mutually exclusive display states a render can land in.
///
/// Exactly one is selected per render, as a total function of the fetch
/// result and the theme flag. No prior render influences the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    NoCommuteWeekday,
    NoCommuteWeekend,
    LeaveNow,
    CountdownUrgent,
    CountdownNormal,
    NoSuitableTrain,
    ConnectionError,
}
