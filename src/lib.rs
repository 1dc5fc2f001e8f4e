//! Single-Page Application Shell Library

pub mod config;
pub mod form;
pub mod observability;
pub mod page;
pub mod prefs;
pub mod projects;
pub mod routing;
pub mod template;

pub use config::schema::AppConfig;
pub use routing::router::Router;
pub use routing::table::RouteTable;
