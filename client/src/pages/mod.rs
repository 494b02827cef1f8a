//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Page copy lives in `catalog`; each route component only picks its entry
//! and delegates layout to `info_page`.

pub mod catalog;
pub mod home;
pub mod info_page;
pub mod tools;
