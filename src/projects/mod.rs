//! Project filtering for the projects page.
//!
//! # Responsibilities
//! - Decide which project cards a filter selection keeps visible
//! - Map the quick-filter tags to their filter presets
//! - Produce the pluralized result-count label
//!
//! # Design Decisions
//! - A filter criterion left empty matches every card; the four criteria
//!   combine as a conjunction
//! - Tag presets reset the dropdown criteria first, so "Urgentes" means
//!   status=urgente and nothing else
//! - Unknown tags select nothing: the caller keeps the current selection

/// One project card, with the attributes the filters inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub titulo: String,
    pub categoria: String,
    pub estado: String,
    pub publico: String,
    pub status: String,
}

impl ProjectCard {
    pub fn new(titulo: &str, categoria: &str, estado: &str, publico: &str, status: &str) -> Self {
        Self {
            titulo: titulo.to_string(),
            categoria: categoria.to_string(),
            estado: estado.to_string(),
            publico: publico.to_string(),
            status: status.to_string(),
        }
    }
}

/// The four dropdown criteria. An empty string means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    pub categoria: String,
    pub estado: String,
    pub publico: String,
    pub status: String,
}

impl ProjectFilters {
    /// True when the card satisfies every non-empty criterion.
    pub fn matches(&self, card: &ProjectCard) -> bool {
        let criterion = |wanted: &str, actual: &str| wanted.is_empty() || wanted == actual;
        criterion(&self.categoria, &card.categoria)
            && criterion(&self.estado, &card.estado)
            && criterion(&self.publico, &card.publico)
            && criterion(&self.status, &card.status)
    }

    /// Reset every criterion to "no restriction".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The preset a quick-filter tag stands for. "Todos" clears the
    /// selection; unrecognized tags select nothing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let mut filters = Self::default();
        match tag.to_lowercase().as_str() {
            "todos" => {}
            "urgentes" => filters.status = "urgente".to_string(),
            "precisa de voluntários" => filters.status = "ativo".to_string(),
            _ => return None,
        }
        Some(filters)
    }
}

/// The cards the current selection keeps visible, in card order.
pub fn apply<'a>(cards: &'a [ProjectCard], filters: &ProjectFilters) -> Vec<&'a ProjectCard> {
    cards.iter().filter(|card| filters.matches(card)).collect()
}

/// "N projeto(s) encontrado(s)", singular only for exactly one.
pub fn results_count_label(count: usize) -> String {
    let plural = if count != 1 { "s" } else { "" };
    format!("{count} projeto{plural} encontrado{plural}")
}
