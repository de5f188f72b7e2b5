//! DTOs for link statistics.

use serde::{Deserialize, Serialize};

/// Visit count of a single short link.
#[derive(Debug, Deserialize, Serialize)]
pub struct StatsResponse {
    pub visits: u64,
}
