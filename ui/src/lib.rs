//! Shared UI crate for Review Explorer: chart geometry, dashboard components
//! and the localized navbar.

pub mod charts;
pub mod core;
pub mod explorer;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

#[cfg(test)]
mod tests;
