//! Bedrock → Java packet translators.

pub mod block_pick;
