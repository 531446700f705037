pub mod decimal;
pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "investments")]
pub mod investments;

#[cfg(feature = "insurance")]
pub mod insurance;

pub use error::{FinPlanError, NumericError};
pub use types::*;

/// Standard result type for all finplan operations
pub type FinPlanResult<T> = Result<T, FinPlanError>;
