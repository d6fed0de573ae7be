//! Domain services used by HTTP routes.
//!
//! Each module is the async surface of one marketplace area. Every call
//! awaits the store's artificial latency before touching data, so callers
//! see the same timing a remote API would give them.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod chat;
pub mod dashboard;
pub mod notification;
pub mod provider;
pub mod report;
pub mod review;
