//! parley-bedrock
//!
//! Bedrock model invocation: request envelopes, the `InvokeModel` client
//! binding, and normalization of responses and errors.

pub mod client;
pub mod error;
pub mod gateway;
pub mod request;
pub mod response;
