use crate::error::{FetchError, FetchResult};
use crate::payload::{BestTrain, CommuteBlock, StatusPayload};

/// Domain view of a status payload: one variant per renderable situation.
///
/// The two wire schema generations dispatch through here exactly once, so
/// the renderer never has to know which generation the server is running.
#[derive(Debug, Clone, PartialEq)]
pub enum CommutePlan {
    /// Outside commute hours
    Inactive { schedule_status: String },

    /// Active window, newer `commute` block
    Commute { line: String, block: CommuteBlock },

    /// Active window, legacy `best_train` shape
    BestTrain { line: String, train: BestTrain },

    /// Active window, legacy shape, but every train arrives too late
    NoSuitableTrain { line: String, work_start: String },
}

impl StatusPayload {
    /// Collapse the wire payload into a [`CommutePlan`].
    ///
    /// When both sub-shapes are present, `commute` wins. An active payload
    /// with neither sub-shape and no `work_start` fallback is a contract
    /// violation from the server, not a renderable state.
    pub fn plan(&self) -> FetchResult<CommutePlan> {
        if !self.active {
            return Ok(CommutePlan::Inactive {
                schedule_status: self.schedule_status.clone(),
            });
        }

        if let Some(block) = &self.commute {
            return Ok(CommutePlan::Commute {
                line: self.line.clone(),
                block: block.clone(),
            });
        }

        if let Some(train) = &self.best_train {
            return Ok(CommutePlan::BestTrain {
                line: self.line.clone(),
                train: train.clone(),
            });
        }

        // "No suitable train" is a documented server state, distinguished
        // from a malformed payload by the presence of `work_start`.
        if let Some(work_start) = &self.work_start {
            return Ok(CommutePlan::NoSuitableTrain {
                line: self.line.clone(),
                work_start: work_start.clone(),
            });
        }

        Err(FetchError::ContractViolation(
            "active payload carries neither `commute` nor `best_train` nor `work_start`"
                .to_string(),
        ))
    }
}
