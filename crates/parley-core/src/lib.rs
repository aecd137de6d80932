//! parley-core
//!
//! Domain types and local persistence: generation settings, the credential
//! file, chat messages and the invocation result envelope.
//! No AWS SDK dependency.

pub mod credentials;
pub mod error;
pub mod models;
pub mod settings;
