use serde::{Deserialize, Serialize};

/// Status payload as emitted by the commute server.
///
/// The server has shipped two schema generations: the legacy `best_train`
/// shape and the newer `commute` block. Both are modeled here and collapsed
/// into a single [`CommutePlan`](crate::plan::CommutePlan) before rendering.
/// Every field except `active` is optional on the wire.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatusPayload {
    /// Whether "now" falls inside a commute window
    pub active: bool,

    /// Human-readable reason label when inactive (e.g. "Weekend — no schedule")
    #[serde(default)]
    pub schedule_status: String,

    /// Transit line name, present when active
    #[serde(default)]
    pub line: String,

    /// Legacy shape: shift start time, shown when no suitable train exists
    #[serde(default)]
    pub work_start: Option<String>,

    /// Legacy shape: the train worth catching, if any
    #[serde(default)]
    pub best_train: Option<BestTrain>,

    /// Newer shape: precomputed leave-home countdown
    #[serde(default)]
    pub commute: Option<CommuteBlock>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BestTrain {
    pub countdown_seconds: i64,
    pub countdown_minutes: i64,
    pub train_departs: String,
    pub arrival_at_work: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommuteBlock {
    pub minutes_until_leave: i64,
    pub should_have_left: bool,
    pub leave_home: String,
    pub target_train: String,
    pub arrival_target: String,
}
