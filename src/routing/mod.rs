//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (link click, hash change, initial load)
//!     → link.rs (href → logical route path, origin check)
//!     → router.rs (idempotence check, sequence bump, render)
//!     → table.rs (exact-match lookup, not-found fallback)
//!     → page::fetch (template text)
//!     → page::surface (content, title, scroll, menu)
//!
//! Table construction (at startup):
//!     RouteConfig[] + ScriptRegistry
//!     → RouteEntry per route (template, title, optional on_enter)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Matching is exact-string and case-sensitive; no wildcards, no params
//! - Unknown keys silently resolve to the not-found entry (not an error)
//! - The table is immutable after construction; only `NavigationState`
//!   mutates, and only the router owns it

pub mod link;
pub mod router;
pub mod table;

pub use link::{normalize_route, route_from_href};
pub use router::{NavigationState, Router, RouterPhase};
pub use table::{RouteEntry, RouteTable, ScriptRegistry};
