//! Modal popup overlays.

pub mod confirm;
pub mod help;
pub mod message;
pub mod wallet_form;
