//! Pricing engine: turns cost and margin inputs into hourly rates.

pub mod error;
pub mod rates;

pub use error::{ComputeError, Result};
pub use rates::{REDISTRIBUTION_SHARE, compute_rates, round_cents};
