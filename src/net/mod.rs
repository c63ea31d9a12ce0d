//! Networking modules for the external Briefly HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the wire schema, and
//! `error` is the failure taxonomy shared by every endpoint wrapper.

pub mod api;
pub mod error;
pub mod types;
