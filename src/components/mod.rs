//! Reusable UI components.

pub mod audio_player;
pub mod briefing_card;
pub mod persona_selector;
pub mod sidebar;
