//! Rendering surfaces.
//!
//! # Responsibilities
//! - Abstract the page container the router injects fragments into
//! - Abstract the form chrome the validator decorates (inline errors,
//!   transient notices)
//!
//! # Design Decisions
//! - `&self` methods with interior mutability on implementations: the DOM
//!   these traits stand in for is a shared mutable resource
//! - `NullSurface` implements both traits so consumers that only care about
//!   one seam can ignore the other

/// The page shell a router renders into.
pub trait PageSurface: Send + Sync {
    /// Replace the container's content with the given HTML fragment.
    fn set_content(&self, html: &str);

    /// Set the document title.
    fn set_title(&self, title: &str);

    /// Reset scroll position to the top of the page.
    fn scroll_to_top(&self);

    /// Close the mobile-menu toggle if it is open.
    fn close_menu_toggle(&self);
}

/// The form chrome a validator decorates.
pub trait FormSurface: Send + Sync {
    /// Attach an inline error message next to a field.
    fn show_field_error(&self, field_id: &str, message: &str);

    /// Remove any inline error attached to a field.
    fn clear_field_error(&self, field_id: &str);

    /// Display a transient notice above the form.
    fn show_notice(&self, message: &str);

    /// Remove the transient notice, if present.
    fn remove_notice(&self);
}

/// A surface that swallows everything. Useful when a consumer only needs
/// the navigation side effects, not the presentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl PageSurface for NullSurface {
    fn set_content(&self, _html: &str) {}
    fn set_title(&self, _title: &str) {}
    fn scroll_to_top(&self) {}
    fn close_menu_toggle(&self) {}
}

impl FormSurface for NullSurface {
    fn show_field_error(&self, _field_id: &str, _message: &str) {}
    fn clear_field_error(&self, _field_id: &str) {}
    fn show_notice(&self, _message: &str) {}
    fn remove_notice(&self) {}
}
