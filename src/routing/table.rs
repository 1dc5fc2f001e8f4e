//! Route table.
//!
//! # Responsibilities
//! - Hold the static path → {template, title, on_enter} mapping
//! - Resolve paths by exact match, falling back to the not-found entry
//! - Build entries from config, binding script names to callbacks
//!
//! # Design Decisions
//! - `resolve` never fails: an unregistered key is a page-not-found page,
//!   not an error
//! - TOML cannot carry closures, so route configs name scripts and a
//!   `ScriptRegistry` maps names to callbacks; unknown names log a warning
//!   and the route renders without one

use crate::config::schema::AppConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Post-render callback for a route.
pub type OnEnter = Arc<dyn Fn() + Send + Sync>;

/// One route: path key, template reference, page title, optional callback.
/// Immutable once registered.
#[derive(Clone)]
pub struct RouteEntry {
    pub path: String,
    pub template_ref: String,
    pub title: String,
    pub on_enter: Option<OnEnter>,
}

impl RouteEntry {
    pub fn new(path: &str, template_ref: &str, title: &str) -> Self {
        Self {
            path: path.to_string(),
            template_ref: template_ref.to_string(),
            title: title.to_string(),
            on_enter: None,
        }
    }

    pub fn with_on_enter(mut self, on_enter: OnEnter) -> Self {
        self.on_enter = Some(on_enter);
        self
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("template_ref", &self.template_ref)
            .field("title", &self.title)
            .field("on_enter", &self.on_enter.is_some())
            .finish()
    }
}

/// Named `on_enter` callbacks referenced by route configs.
#[derive(Clone, Default)]
pub struct ScriptRegistry {
    scripts: HashMap<String, OnEnter>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback under a script name.
    pub fn register(&mut self, name: &str, script: impl Fn() + Send + Sync + 'static) {
        self.scripts.insert(name.to_string(), Arc::new(script));
    }

    pub fn get(&self, name: &str) -> Option<OnEnter> {
        self.scripts.get(name).cloned()
    }
}

/// Static mapping from route path to entry, with a designated not-found
/// entry for everything else.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, RouteEntry>,
    not_found: RouteEntry,
}

impl RouteTable {
    pub fn new(not_found: RouteEntry) -> Self {
        Self {
            routes: HashMap::new(),
            not_found,
        }
    }

    /// Register a route. The not-found entry may also be registered under
    /// its own path so it is directly navigable.
    pub fn register(&mut self, entry: RouteEntry) {
        self.routes.insert(entry.path.clone(), entry);
    }

    /// Exact-match, case-sensitive lookup; unregistered keys resolve to the
    /// not-found entry.
    pub fn resolve(&self, path: &str) -> &RouteEntry {
        self.routes.get(path).unwrap_or(&self.not_found)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the table from a validated config, binding script names
    /// through the registry.
    pub fn from_config(config: &AppConfig, scripts: &ScriptRegistry) -> Self {
        let mut routes = HashMap::new();
        for route in &config.routes {
            let mut entry = RouteEntry::new(&route.path, &route.template, &route.title);
            if let Some(name) = &route.script {
                match scripts.get(name) {
                    Some(script) => entry.on_enter = Some(script),
                    None => {
                        tracing::warn!(
                            path = %route.path,
                            script = %name,
                            "Unknown route script, rendering without callback"
                        );
                    }
                }
            }
            routes.insert(entry.path.clone(), entry);
        }

        let not_found = routes
            .get(&config.shell.not_found_path)
            .cloned()
            .unwrap_or_else(|| {
                RouteEntry::new("/404", "templates/404.html", "Página não encontrada")
            });

        Self { routes, not_found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn table() -> RouteTable {
        let mut table = RouteTable::new(RouteEntry::new(
            "/404",
            "templates/404.html",
            "Página não encontrada",
        ));
        table.register(RouteEntry::new("/", "templates/home.html", "Início"));
        table.register(RouteEntry::new(
            "/projetos",
            "templates/projetos.html",
            "Projetos",
        ));
        table
    }

    #[test]
    fn test_resolve_exact_match() {
        let table = table();
        assert_eq!(table.resolve("/").template_ref, "templates/home.html");
        assert_eq!(table.resolve("/projetos").title, "Projetos");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let table = table();
        assert_eq!(table.resolve("/Projetos").path, "/404");
    }

    #[test]
    fn test_unregistered_key_resolves_to_not_found() {
        let table = table();
        assert_eq!(table.resolve("/nada").path, "/404");
        assert_eq!(table.resolve("").path, "/404");
    }

    #[test]
    fn test_from_config_binds_scripts() {
        let config = AppConfig::default();
        let mut scripts = ScriptRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        scripts.register("modals", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let table = RouteTable::from_config(&config, &scripts);
        let entry = table.resolve("/");
        entry.on_enter.as_ref().unwrap()();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Unknown script names leave the route callback-less.
        assert!(table.resolve("/projetos").on_enter.is_none());

        // The configured not-found path backs unknown keys.
        assert_eq!(table.resolve("/inexistente").path, "/404");
    }
}
