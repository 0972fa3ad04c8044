use log::Level;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The concept section waits until a fifth of it is on screen.
pub const CONCEPT_REVEAL_THRESHOLD: f64 = 0.2;

pub const TYPEWRITER_TARGET: &str = "INVISTA EM CULTURA";
pub const TYPEWRITER_INTERVAL_MS: u32 = 100;

/// Scroll offset (px) past which the navigation bar gets its backdrop.
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
pub const MENU_STAGGER_STEP_MS: u32 = 50;

/// Hero split: the left panel spans `BASE + RANGE * x` percent of the width.
pub const PARALLAX_SPLIT_BASE: f64 = 30.0;
pub const PARALLAX_SPLIT_RANGE: f64 = 40.0;
/// Maximum background shift in px at the hero edges.
pub const PARALLAX_SHIFT_PX: f64 = 20.0;

/// Gameplay card tilt at the card edge, and the resting angle.
pub const CARD_TILT_DEG: f64 = 10.0;
pub const CARD_REST_DEG: f64 = 5.0;

pub const PRONAC: &str = "2514086";
pub const CONTACT_EMAIL: &str = "mrcsmcl@live.com";
pub const CONTACT_PHONE: &str = "+5544991238445";
pub const CONTACT_PHONE_DISPLAY: &str = "(44) 9912-38445";

pub const MINISTRY_URL: &str = "https://www.gov.br/cultura/pt-br";
pub const ROUANET_URL: &str = "https://www.gov.br/cultura/pt-br/assuntos/incentivo-a-cultura";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn tel() -> String {
    format!("tel:{}", CONTACT_PHONE)
}
