//! Errors raised while loading world data tables.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("malformed registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("block state {state} is mapped by both {first} and {second}")]
    DuplicateBlockState {
        state: u32,
        first: String,
        second: String,
    },

    #[error("item id {id} is mapped by both {first} and {second}")]
    DuplicateItemId { id: i32, first: String, second: String },
}
