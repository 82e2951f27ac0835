//! UI state of the single page
//!
//! Every piece here is a plain value type. The server renders from it and
//! the page script mirrors the same transitions in the browser.

pub mod constants;
pub mod form;
pub mod modal;
pub mod navigation;
pub mod projects;
pub mod theme;
pub mod widgets;

pub use form::{FormState, FormStatus};
pub use modal::{BodyOverflow, ClickTarget, ProjectModal};
pub use navigation::{MobileMenu, NAV_ITEMS, NavItem, SectionBox, active_section};
pub use projects::ProjectsView;
pub use theme::ThemePreference;
pub use widgets::{ButtonSize, ButtonVariant, ExpandableTabs, GlareState, liquid_button_class};
