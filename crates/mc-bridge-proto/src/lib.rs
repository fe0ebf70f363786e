//! Wire types and packet definitions for both sides of the bridge.
//!
//! `packets` holds the Bedrock (front) packets, `java` the Java (back) ones.

pub mod codec;
pub mod error;
pub mod java;
pub mod packets;
pub mod types;
