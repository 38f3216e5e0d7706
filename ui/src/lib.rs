//! Shared UI crate for SheetLens. All logic and views live here; the `web`
//! crate only mounts the router.

pub mod api;
pub mod core;
pub mod report;
pub mod views;

pub mod components {
    // Premium capture overlay (components/upsell.rs)
    pub mod upsell;
    pub use upsell::PremiumModal;
}
