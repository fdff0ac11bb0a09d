//! UI components.
//!
//! ARCHITECTURE
//! ============
//! `page_shell` owns layout and knows nothing about flights; the remaining
//! components are the concrete regions composed into it by the home page.

pub mod dashboard;
pub mod flight_table;
pub mod header;
pub mod page_shell;
pub mod sidebar;
pub mod stat_card;
