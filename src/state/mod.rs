//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `briefings`, `player`) so individual
//! components can depend on small focused models. Each is provided as an
//! `RwSignal` context from the app root; the session store additionally owns
//! the durable-storage and cookie mirrors.

pub mod briefings;
pub mod player;
pub mod session;
