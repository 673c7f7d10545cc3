//! A minimal chat-completion client for the Portkey AI gateway.
//!
//! The library builds gateway configuration from the environment, sends an
//! OpenAI-compatible chat-completion request and extracts the text of the
//! first choice. The `portkey-chat` binary wires these together.

pub mod dispatcher;
pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod response;
pub mod types;

// Re-export core types for easy usage
pub use error::Error;
pub use factory::ProviderFactory;
pub use provider::ChatProvider;
pub use providers::*;
pub use response::*;
pub use types::*;
