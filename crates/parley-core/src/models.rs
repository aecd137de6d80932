pub mod catalog;
pub mod chat;
pub mod invocation;
