//! Integration Alerts Agent Contracts
//!
//! Defines the alert feed records and the resolution-center issues exchanged
//! between the poller and the issue registry.

mod feed;
mod issues;

pub use feed::*;
pub use issues::*;
