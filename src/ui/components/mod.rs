//! Reusable overlay components.

mod gauge;
mod toast;

pub use gauge::render_mining_gauge;
pub use toast::render_toast;
