//! Per-session translation between Bedrock clients and a Java server.

pub mod config;
pub mod entity_cache;
pub mod inventory;
pub mod logging;
pub mod session;
pub mod translators;

pub use config::BridgeConfig;
pub use session::Session;
