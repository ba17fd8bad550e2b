//! Id sequence row.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Key of the single sequence row.
pub const SEQUENCE_KEY: &str = "ids";

/// Next id to hand out. One sequence serves every table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 6, version = 1)]
#[native_db]
pub struct StoredSequence {
    /// Always "ids" - single row.
    #[primary_key]
    pub id: String,
    pub next: u64,
}

impl StoredSequence {
    pub fn starting_at(next: u64) -> Self {
        Self {
            id: SEQUENCE_KEY.to_string(),
            next,
        }
    }
}
