use serde::{Deserialize, Serialize};

/// Public counters for the about section, `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicStats {
    pub total_clients: u64,
    pub awards_won: u64,
    pub success_rate: f64,
    pub years_experience: u64,
}
