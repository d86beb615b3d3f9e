use std::time::Duration;

use crate::table::Round;

// search
pub const EXPLORATION: f64 = 1.0;
pub const EXPLOITATION: f64 = 0.0;
pub const FIRST_ROUND: Round = 1;

// player
/// Stop starting new rounds this long before the deadline.
pub const DEADLINE_MARGIN: Duration = Duration::from_millis(50);
