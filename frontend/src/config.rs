use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Form transitions are logged at debug while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Promised response time shown after the contact form is sent.
pub const CONTACT_REPLY_HOURS: u32 = 24;
