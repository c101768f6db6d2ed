use log::Level;

pub const BRAND_NAME: &str = "African Palace";
pub const BRAND_SUBTITLE: &str = "tamale's best airbnb";
pub const MENU_TAGLINE: &str = "Tamale's Finest Stay";

/// Vertical scroll offset (px) past which the header condenses.
pub const CONDENSE_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
