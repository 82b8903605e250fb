//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` fetches to the shared `session::Transport` seam so
//! probe, submit, and logout logic is the same code the CLI runs.

pub mod api;
