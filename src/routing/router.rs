//! Navigation core.
//!
//! # Responsibilities
//! - Resolve the current navigation target to a route entry
//! - Fetch the route's template and hand it to the page surface
//! - Suppress redundant reloads of the already-active route
//! - Discard stale fetch completions when navigations overlap
//!
//! # Design Decisions
//! - `current_path` is committed before the fetch: a broken template must
//!   not cause a retry loop, it renders the error fragment instead
//! - Every navigation bumps a monotonic sequence; a completion whose
//!   sequence is no longer current is dropped, so the last requested route
//!   always wins regardless of fetch completion order
//! - Fetch failures are contained here: logged, error fragment shown,
//!   nothing propagates past `render`

use crate::page::fetch::TemplateFetcher;
use crate::page::surface::PageSurface;
use crate::routing::link::{normalize_route, route_from_href};
use crate::routing::table::{RouteEntry, RouteTable};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

const ERROR_FRAGMENT: &str = "<h1>Erro ao carregar página</h1>";

/// Router lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterPhase {
    Idle,
    Resolving,
    Rendered,
    Error,
}

/// The single mutable navigation field, owned by the router. Empty until
/// the first navigation.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_path: String,
}

/// Resolves navigation targets and renders route templates into the page
/// surface.
pub struct Router {
    table: RouteTable,
    fetcher: Arc<dyn TemplateFetcher>,
    surface: Arc<dyn PageSurface>,
    origin: String,
    state: Mutex<NavigationState>,
    phase: Mutex<RouterPhase>,
    nav_seq: AtomicU64,
}

impl Router {
    pub fn new(
        table: RouteTable,
        fetcher: Arc<dyn TemplateFetcher>,
        surface: Arc<dyn PageSurface>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            table,
            fetcher,
            surface,
            origin: origin.into(),
            state: Mutex::new(NavigationState::default()),
            phase: Mutex::new(RouterPhase::Idle),
            nav_seq: AtomicU64::new(0),
        }
    }

    /// Map a path to its route entry (not-found fallback included).
    pub fn resolve(&self, path: &str) -> &RouteEntry {
        self.table.resolve(path)
    }

    /// The last committed navigation target.
    pub fn current_path(&self) -> String {
        self.state.lock().unwrap().current_path.clone()
    }

    pub fn phase(&self) -> RouterPhase {
        *self.phase.lock().unwrap()
    }

    /// Initial load. In hash mode with no hash present the root hash is
    /// assigned before the first resolve/render cycle.
    pub async fn start(&self, location: Option<&str>) {
        let target = match location {
            Some(loc) if !loc.is_empty() => normalize_route(loc.trim_start_matches('#')),
            _ => "/".to_string(),
        };
        self.navigate(&target).await;
    }

    /// Navigate to a logical route path. A no-op when the path is already
    /// active: no re-fetch, no title or content churn.
    pub async fn navigate(&self, target: &str) {
        let path = normalize_route(target);
        {
            let mut state = self.state.lock().unwrap();
            if state.current_path == path {
                tracing::debug!(path = %path, "Navigation suppressed: route already active");
                return;
            }
            state.current_path = path.clone();
        }

        let seq = self.nav_seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.phase.lock().unwrap() = RouterPhase::Resolving;

        let entry = self.table.resolve(&path).clone();
        tracing::debug!(path = %path, template = %entry.template_ref, "Resolving route");
        self.render(&entry, seq).await;
    }

    /// Delegated click handler. Returns true when the click was claimed
    /// (default navigation prevented), false when the browser should
    /// follow the link.
    pub async fn handle_link_click(&self, href: &str) -> bool {
        match route_from_href(href, &self.origin) {
            Some(path) => {
                self.navigate(&path).await;
                true
            }
            None => false,
        }
    }

    async fn render(&self, entry: &RouteEntry, seq: u64) {
        match self.fetcher.fetch(&entry.template_ref).await {
            Ok(html) => {
                if self.nav_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(path = %entry.path, "Discarding stale render");
                    return;
                }

                self.surface.set_content(&html);
                self.surface.set_title(&entry.title);
                if let Some(on_enter) = &entry.on_enter {
                    on_enter();
                }
                self.surface.scroll_to_top();
                self.surface.close_menu_toggle();

                *self.phase.lock().unwrap() = RouterPhase::Rendered;
                tracing::info!(path = %entry.path, title = %entry.title, "Route rendered");
            }
            Err(error) => {
                if self.nav_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(path = %entry.path, "Discarding stale failure");
                    return;
                }

                tracing::error!(
                    path = %entry.path,
                    template = %entry.template_ref,
                    error = %error,
                    "Failed to load page"
                );
                self.surface.set_content(ERROR_FRAGMENT);
                *self.phase.lock().unwrap() = RouterPhase::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fetch::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingSurface {
        content: Mutex<String>,
        title: Mutex<String>,
        scrolls: AtomicUsize,
        menu_resets: AtomicUsize,
    }

    impl PageSurface for RecordingSurface {
        fn set_content(&self, html: &str) {
            *self.content.lock().unwrap() = html.to_string();
        }
        fn set_title(&self, title: &str) {
            *self.title.lock().unwrap() = title.to_string();
        }
        fn scroll_to_top(&self) {
            self.scrolls.fetch_add(1, Ordering::SeqCst);
        }
        fn close_menu_toggle(&self) {
            self.menu_resets.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Serves canned templates, optionally with a per-template delay, and
    /// counts fetches.
    #[derive(Default)]
    struct FakeFetcher {
        templates: HashMap<String, String>,
        delays: HashMap<String, Duration>,
        fetches: AtomicUsize,
    }

    impl FakeFetcher {
        fn with(mut self, template_ref: &str, html: &str) -> Self {
            self.templates
                .insert(template_ref.to_string(), html.to_string());
            self
        }

        fn delayed(mut self, template_ref: &str, delay: Duration) -> Self {
            self.delays.insert(template_ref.to_string(), delay);
            self
        }
    }

    #[async_trait]
    impl TemplateFetcher for FakeFetcher {
        async fn fetch(&self, path: &str) -> Result<String, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(path) {
                tokio::time::sleep(*delay).await;
            }
            self.templates
                .get(path)
                .cloned()
                .ok_or(FetchError::Status(404))
        }
    }

    fn table() -> RouteTable {
        let mut table = RouteTable::new(RouteEntry::new(
            "/404",
            "templates/404.html",
            "Página não encontrada",
        ));
        table.register(RouteEntry::new(
            "/",
            "templates/home.html",
            "EloSocial - Início",
        ));
        table.register(RouteEntry::new(
            "/projetos",
            "templates/projetos.html",
            "EloSocial - Projetos",
        ));
        table
    }

    fn router(fetcher: FakeFetcher) -> (Arc<Router>, Arc<RecordingSurface>, Arc<FakeFetcher>) {
        let surface = Arc::new(RecordingSurface::default());
        let fetcher = Arc::new(fetcher);
        let router = Arc::new(Router::new(
            table(),
            fetcher.clone(),
            surface.clone(),
            "http://localhost:8000",
        ));
        (router, surface, fetcher)
    }

    #[tokio::test]
    async fn test_start_assigns_root_when_no_hash() {
        let (router, surface, _) =
            router(FakeFetcher::default().with("templates/home.html", "<h1>Início</h1>"));

        router.start(None).await;
        assert_eq!(router.current_path(), "/");
        assert_eq!(*surface.content.lock().unwrap(), "<h1>Início</h1>");
        assert_eq!(*surface.title.lock().unwrap(), "EloSocial - Início");
        assert_eq!(router.phase(), RouterPhase::Rendered);
    }

    #[tokio::test]
    async fn test_start_with_hash_location() {
        let (router, surface, _) =
            router(FakeFetcher::default().with("templates/projetos.html", "<h1>P</h1>"));

        router.start(Some("#/projetos")).await;
        assert_eq!(router.current_path(), "/projetos");
        assert_eq!(*surface.content.lock().unwrap(), "<h1>P</h1>");
    }

    #[tokio::test]
    async fn test_navigate_is_idempotent() {
        let (router, _, fetcher) =
            router(FakeFetcher::default().with("templates/projetos.html", "<h1>Projetos</h1>"));

        router.navigate("/projetos").await;
        router.navigate("/projetos").await;
        assert_eq!(fetcher.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found() {
        let (router, surface, _) =
            router(FakeFetcher::default().with("templates/404.html", "<h1>404</h1>"));

        router.navigate("/nao-existe").await;
        assert_eq!(*surface.content.lock().unwrap(), "<h1>404</h1>");
        assert_eq!(*surface.title.lock().unwrap(), "Página não encontrada");
        // The candidate path is what sticks, not the 404 key.
        assert_eq!(router.current_path(), "/nao-existe");
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_error_fragment() {
        // No templates registered at all: every fetch fails.
        let (router, surface, _) = router(FakeFetcher::default());

        router.navigate("/projetos").await;
        assert_eq!(*surface.content.lock().unwrap(), ERROR_FRAGMENT);
        assert_eq!(router.phase(), RouterPhase::Error);
        // The failed path is still committed, so there is no retry loop.
        assert_eq!(router.current_path(), "/projetos");
    }

    #[tokio::test]
    async fn test_failure_does_not_block_future_navigation() {
        let (router, surface, _) =
            router(FakeFetcher::default().with("templates/home.html", "<h1>Início</h1>"));

        router.navigate("/projetos").await;
        assert_eq!(router.phase(), RouterPhase::Error);

        router.navigate("/").await;
        assert_eq!(router.phase(), RouterPhase::Rendered);
        assert_eq!(*surface.content.lock().unwrap(), "<h1>Início</h1>");
    }

    #[tokio::test]
    async fn test_render_resets_scroll_and_menu() {
        let (router, surface, _) =
            router(FakeFetcher::default().with("templates/home.html", "<h1>Início</h1>"));

        router.navigate("/").await;
        assert_eq!(surface.scrolls.load(Ordering::SeqCst), 1);
        assert_eq!(surface.menu_resets.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_on_enter_invoked_on_render() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut table = table();
        table.register(
            RouteEntry::new("/cadastro", "templates/cadastro.html", "Cadastro").with_on_enter(
                Arc::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            ),
        );

        let surface = Arc::new(RecordingSurface::default());
        let fetcher =
            Arc::new(FakeFetcher::default().with("templates/cadastro.html", "<form></form>"));
        let router = Router::new(table, fetcher, surface, "http://localhost:8000");

        router.navigate("/cadastro").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Idempotent navigation does not re-run the callback.
        router.navigate("/cadastro").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_link_click_same_origin_navigates() {
        let (router, _, _) =
            router(FakeFetcher::default().with("templates/projetos.html", "<h1>P</h1>"));

        let claimed = router
            .handle_link_click("http://localhost:8000/projetos.html")
            .await;
        assert!(claimed);
        assert_eq!(router.current_path(), "/projetos");
    }

    #[tokio::test]
    async fn test_link_click_cross_origin_passes_through() {
        let (router, _, fetcher) = router(FakeFetcher::default());

        let claimed = router.handle_link_click("https://example.com/fora").await;
        assert!(!claimed);
        assert_eq!(router.current_path(), "");
        assert_eq!(fetcher.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_completion_is_discarded() {
        let (router, surface, _) = router(
            FakeFetcher::default()
                .with("templates/home.html", "<h1>Início</h1>")
                .with("templates/projetos.html", "<h1>Projetos</h1>")
                .delayed("templates/home.html", Duration::from_millis(50)),
        );

        // First navigation stalls in flight; the second completes first.
        let slow = {
            let router = Arc::clone(&router);
            tokio::spawn(async move { router.navigate("/").await })
        };
        tokio::task::yield_now().await;
        router.navigate("/projetos").await;

        assert_eq!(*surface.content.lock().unwrap(), "<h1>Projetos</h1>");

        // Let the stalled fetch complete; its render must be dropped.
        tokio::time::advance(Duration::from_millis(60)).await;
        slow.await.unwrap();

        assert_eq!(*surface.content.lock().unwrap(), "<h1>Projetos</h1>");
        assert_eq!(*surface.title.lock().unwrap(), "EloSocial - Projetos");
        assert_eq!(router.current_path(), "/projetos");
        assert_eq!(router.phase(), RouterPhase::Rendered);
    }
}
