//! Core value types: player identifiers and validated game settings.
//!
//! These are the game-agnostic building blocks. The board shape and win
//! condition are configured via `Settings` rather than hardcoded.

pub mod player;
pub mod settings;

pub use player::PlayerId;
pub use settings::Settings;
