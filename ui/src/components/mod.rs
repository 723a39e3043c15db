//! Report chrome and chart cards.

pub mod app_navbar;
pub mod chart_panel;
pub mod theme_toggle;

pub use app_navbar::AppNavbar;
pub use chart_panel::ChartPanel;
pub use theme_toggle::ThemeToggle;
