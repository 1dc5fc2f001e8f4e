//! Page capability subsystem.
//!
//! # Data Flow
//! ```text
//! Router / FormValidator
//!     → surface.rs (content injection, titles, inline errors, notices)
//!     → fetch.rs (template text by path: filesystem or HTTP GET)
//!     → storage.rs (key-value persistence: memory or JSON file)
//!     → notice.rs (self-cancelling transient-notice removal)
//! ```
//!
//! # Design Decisions
//! - The browser globals (`document`, `window`, `fetch`, storage, timers)
//!   are modeled as small traits so every consumer is testable headless
//! - Trait objects are shared via `Arc`; implementations use interior
//!   mutability rather than `&mut` receivers, matching how a DOM behaves
//! - Fetch and storage failures are typed; callers decide containment

pub mod fetch;
pub mod notice;
pub mod storage;
pub mod surface;

pub use fetch::{FetchError, FsFetcher, HttpFetcher, TemplateFetcher};
pub use notice::NoticeScheduler;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use surface::{FormSurface, NullSurface, PageSurface};
