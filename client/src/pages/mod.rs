//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates rendering details
//! to `components`.

pub mod home;
pub mod login;
pub mod signup;
