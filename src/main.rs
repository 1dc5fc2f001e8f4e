//! Single-Page Application Shell (demo driver)
//!
//! Drives the EloSocial shell headless, with a console surface standing in
//! for the page container.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                  SPA SHELL                   │
//!                       │                                              │
//!   Navigation event    │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ────────────────────┼─▶│  link   │───▶│ router  │───▶│  route   │  │
//!   (click, hash, init) │  │ derive  │    │  core   │    │  table   │  │
//!                       │  └─────────┘    └────┬────┘    └──────────┘  │
//!                       │                      │                       │
//!                       │                      ▼                       │
//!                       │               ┌──────────────┐               │
//!                       │               │   template   │               │
//!                       │               │ fetch+render │               │
//!                       │               └──────┬───────┘               │
//!                       │                      │                       │
//!   Rendered fragment   │  ┌─────────┐         ▼                       │
//!   ◀───────────────────┼──│ surface │◀── content, title, scroll       │
//!                       │  └─────────┘                                 │
//!                       │                                              │
//!                       │  ┌────────────────────────────────────────┐  │
//!                       │  │          Cross-Cutting Concerns        │  │
//!                       │  │  ┌────────┐ ┌───────┐ ┌─────┐ ┌─────┐  │  │
//!                       │  │  │ config │ │ form  │ │prefs│ │ log │  │  │
//!                       │  │  └────────┘ └───────┘ └─────┘ └─────┘  │  │
//!                       │  └────────────────────────────────────────┘  │
//!                       └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use spa_shell::config::schema::FetchMode;
use spa_shell::config::{load_config, AppConfig};
use spa_shell::form::rules::default_rules;
use spa_shell::form::validator::{FormValidator, RegistrationForm};
use spa_shell::observability;
use spa_shell::page::fetch::{FsFetcher, HttpFetcher, TemplateFetcher};
use spa_shell::page::storage::{FileStore, KeyValueStore, MemoryStore};
use spa_shell::page::surface::{FormSurface, PageSurface};
use spa_shell::prefs::Preferences;
use spa_shell::projects::{self, ProjectCard, ProjectFilters};
use spa_shell::routing::router::Router;
use spa_shell::routing::table::{RouteTable, ScriptRegistry};

#[derive(Parser, Debug)]
#[command(name = "spa-shell", about = "Headless demo of the EloSocial page shell")]
struct Args {
    /// TOML config file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Routes or hrefs to visit after the initial load.
    targets: Vec<String>,
}

/// Prints everything the page would show.
struct ConsoleSurface {
    container_id: String,
}

impl ConsoleSurface {
    fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }
}

impl PageSurface for ConsoleSurface {
    fn set_content(&self, html: &str) {
        println!("[#{}] {}", self.container_id, html);
    }
    fn set_title(&self, title: &str) {
        println!("[title] {}", title);
    }
    fn scroll_to_top(&self) {}
    fn close_menu_toggle(&self) {}
}

impl FormSurface for ConsoleSurface {
    fn show_field_error(&self, field_id: &str, message: &str) {
        println!("[erro #{}] {}", field_id, message);
    }
    fn clear_field_error(&self, _field_id: &str) {}
    fn show_notice(&self, message: &str) {
        println!("[alerta] {}", message);
    }
    fn remove_notice(&self) {
        println!("[alerta removido]");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("spa-shell v0.1.0 starting");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        routes = config.routes.len(),
        template_root = %config.shell.template_root,
        fetch_mode = ?config.shell.fetch_mode,
        "Configuration loaded"
    );

    // Stores: local survives runs when a path is configured, session does not.
    let local: Arc<dyn KeyValueStore> = match &config.storage.local_store_path {
        Some(path) => Arc::new(FileStore::open(path)?),
        None => Arc::new(MemoryStore::new()),
    };
    let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let prefs = Arc::new(Preferences::new(
        Arc::clone(&local),
        session,
        &config.storage,
    ));
    tracing::info!(
        theme = prefs.theme().as_str(),
        contrast = prefs.contrast().as_str(),
        "Preferences restored"
    );

    // Page scripts referenced by the route configs.
    let mut scripts = ScriptRegistry::new();
    {
        let prefs = Arc::clone(&prefs);
        scripts.register("modals", move || {
            if prefs.modal_should_open() {
                tracing::info!("Opening welcome modal");
            }
        });
    }
    {
        let cards = Arc::new(demo_projects());
        scripts.register("filters", move || {
            let all = projects::apply(&cards, &ProjectFilters::default());
            tracing::info!(
                resultado = %projects::results_count_label(all.len()),
                "Project filters armed"
            );
            if let Some(preset) = ProjectFilters::from_tag("urgentes") {
                let visible = projects::apply(&cards, &preset);
                tracing::info!(
                    tag = "urgentes",
                    resultado = %projects::results_count_label(visible.len()),
                    "Quick filter applied"
                );
            }
        });
    }
    scripts.register("registration", || {
        tracing::debug!("Registration form validation armed");
    });

    let fetcher: Arc<dyn TemplateFetcher> = match config.shell.fetch_mode {
        FetchMode::Fs => Arc::new(FsFetcher::new(&config.shell.template_root)),
        FetchMode::Http => Arc::new(HttpFetcher::new(&config.shell.template_root)),
    };
    let surface = Arc::new(ConsoleSurface::new(&config.shell.container_id));

    let table = RouteTable::from_config(&config, &scripts);
    let page_surface: Arc<dyn PageSurface> = surface.clone();
    let router = Router::new(table, fetcher, page_surface, config.shell.origin.clone());

    // First ready state: no hash yet, so the root hash is assigned.
    router.start(None).await;

    for target in &args.targets {
        if !router.handle_link_click(target).await {
            tracing::warn!(href = %target, "Link outside application origin, skipping");
        }
    }

    // Landing on the registration page runs the form demo.
    if router.current_path() == "/cadastro" {
        demo_registration(&config, surface, local).await;
    }

    tracing::info!(
        path = %router.current_path(),
        phase = ?router.phase(),
        "Demo finished"
    );
    Ok(())
}

/// The card set the projects page would carry in its markup.
fn demo_projects() -> Vec<ProjectCard> {
    vec![
        ProjectCard::new(
            "Horta Comunitária",
            "meio-ambiente",
            "sp",
            "criancas",
            "ativo",
        ),
        ProjectCard::new("Reforço Escolar", "educacao", "sp", "criancas", "urgente"),
        ProjectCard::new("Apoio a Idosos", "saude", "rj", "idosos", "ativo"),
        ProjectCard::new("Mutirão de Saúde", "saude", "mg", "familias", "urgente"),
    ]
}

/// Fill the registration form the way a user would (masks applied per
/// keystroke), submit it, and wait out the success notice.
async fn demo_registration(
    config: &AppConfig,
    surface: Arc<ConsoleSurface>,
    store: Arc<dyn KeyValueStore>,
) {
    let validator = FormValidator::new(
        default_rules(),
        surface,
        store,
        config.storage.registration_key.clone(),
        Duration::from_millis(config.storage.notice_lifetime_ms),
    );
    let mut form = RegistrationForm::registration();

    validator.input(&mut form, "nome", "Ana Clara");
    validator.input(&mut form, "email", "ana@exemplo.com");
    validator.input(&mut form, "cpf", "12345678901");
    validator.input(&mut form, "telefone", "11987654321");
    validator.input(&mut form, "cep", "01310100");

    if validator.submit(&mut form) {
        tracing::info!("Registration submitted");
        tokio::time::sleep(Duration::from_millis(config.storage.notice_lifetime_ms + 100)).await;
    }
}
