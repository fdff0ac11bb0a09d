//! HTTP access to the flight API.

pub mod api;
