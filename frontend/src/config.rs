use log::Level;

/// Strategy-session booking page every call-to-action points at.
pub const BOOKING_URL: &str = "https://go.juliangoldie.com/strategy-session";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Shows engine multipliers when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
