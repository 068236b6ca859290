//! Integration Alerts Agent
//!
//! Polls a remote JSON feed of known integration-breaking alerts and
//! reconciles matches against currently-loaded components into
//! resolution-center issues.
//!
//! # Design Principles
//! - Deterministic: the issue set is a pure function of the last successful fetch
//! - Lenient: malformed feed records are skipped, never fatal
//! - Traceable: every issue create/delete is logged via tracing

pub mod client;
pub mod engine;
pub mod error;
pub mod poller;
pub mod registry;

// Re-export contracts
#[path = "../contracts/mod.rs"]
pub mod contracts;

pub use contracts::*;
pub use error::{AgentError, Result};
