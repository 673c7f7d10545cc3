//! Provider implementations for different gateways.

pub mod portkey;

// Re-export commonly used provider types
pub use portkey::PortkeyProvider;
