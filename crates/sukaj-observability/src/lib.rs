//! Observability for the Sukaj catalog tools.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one invocation
//! - `StructuredLogger` - JSON or human structured logging with session context
//! - `LogBuilder` - Fluent construction of entries with extra fields

mod logging;

pub use logging::*;
