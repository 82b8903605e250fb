//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in `RwSignal` contexts provided by `App`; this module holds the
//! helpers that read and write those signals.

pub mod auth;
