pub mod error;
pub mod payload;
pub mod plan;

pub use error::{FetchError, FetchResult};
pub use payload::{BestTrain, CommuteBlock, StatusPayload};
pub use plan::CommutePlan;
