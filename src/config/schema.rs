//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shell settings (container, origin, template source).
    pub shell: ShellConfig,

    /// Route definitions mapping paths to templates.
    pub routes: Vec<RouteConfig>,

    /// Storage keys and notice timing.
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shell: ShellConfig::default(),
            routes: default_routes(),
            storage: StorageConfig::default(),
        }
    }
}

/// Shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Container element the router injects fragments into.
    pub container_id: String,

    /// Page origin used for link interception checks.
    pub origin: String,

    /// Where template references are resolved against: a directory for
    /// `fs`, a base URL for `http`.
    pub template_root: String,

    /// How templates are fetched.
    pub fetch_mode: FetchMode,

    /// Route served when no key matches.
    pub not_found_path: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            container_id: "app".to_string(),
            origin: "http://localhost:8000".to_string(),
            template_root: ".".to_string(),
            fetch_mode: FetchMode::Fs,
            not_found_path: "/404".to_string(),
        }
    }
}

/// Template fetch transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Read templates from the filesystem.
    #[default]
    Fs,
    /// Fetch templates with HTTP GET.
    Http,
}

/// Route configuration mapping a path to a template.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Exact route key (e.g. "/projetos").
    pub path: String,

    /// Template reference, resolved by the fetcher.
    pub template: String,

    /// Document title set after render.
    pub title: String,

    /// Name of a registered page script to run after render.
    #[serde(default)]
    pub script: Option<String>,
}

fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            path: "/".to_string(),
            template: "templates/home.html".to_string(),
            title: "EloSocial - Início".to_string(),
            script: Some("modals".to_string()),
        },
        RouteConfig {
            path: "/projetos".to_string(),
            template: "templates/projetos.html".to_string(),
            title: "EloSocial - Projetos".to_string(),
            script: Some("filters".to_string()),
        },
        RouteConfig {
            path: "/cadastro".to_string(),
            template: "templates/cadastro.html".to_string(),
            title: "EloSocial - Cadastro".to_string(),
            script: Some("registration".to_string()),
        },
        RouteConfig {
            path: "/404".to_string(),
            template: "templates/404.html".to_string(),
            title: "Página não encontrada".to_string(),
            script: None,
        },
    ]
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the registration snapshot is persisted under.
    pub registration_key: String,

    /// Key for the theme preference ("light"/"dark").
    pub theme_key: String,

    /// Key for the contrast preference ("on"/"off").
    pub contrast_key: String,

    /// Session key for the one-shot welcome modal flag.
    pub modal_seen_key: String,

    /// How long the success notice stays visible, in milliseconds.
    pub notice_lifetime_ms: u64,

    /// Optional path for the file-backed local store. In-memory when unset.
    pub local_store_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            registration_key: "cadastro".to_string(),
            theme_key: "elosocial:theme".to_string(),
            contrast_key: "elosocial:contrast".to_string(),
            modal_seen_key: "modalVisto".to_string(),
            notice_lifetime_ms: 3_000,
            local_store_path: None,
        }
    }
}
