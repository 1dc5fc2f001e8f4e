//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (pretty format, level via RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, template, error) on every event, so failures
//!   contained at a boundary still leave a trace
//! - The subscriber is installed once by the binary; the library only emits

pub mod logging;
