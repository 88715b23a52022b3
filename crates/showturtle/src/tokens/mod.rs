// src/tokens/mod.rs
pub mod pool;
pub mod shuffle;

pub use pool::{build_pool, Token, TokenPool, TURTLE_COMMANDS};
pub use shuffle::{shuffle, ShuffledPool};
