//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`flights`, `ui`, `viewport`) so individual
//! components can depend on small focused models.

pub mod flights;
pub mod ui;
pub mod viewport;
