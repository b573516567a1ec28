use chrono::{DateTime, Utc};

/// Price value
///
/// Plain `f64`: the price process is a closed-form exponential and is
/// reproduced bit for bit against reference outputs.
pub type Price = f64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
