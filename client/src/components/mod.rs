//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth store and transport from Leptos context providers
//! set up in `App`.

pub mod auth_form;
pub mod error_list;
pub mod nav_bar;
