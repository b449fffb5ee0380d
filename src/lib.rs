//! urlbar-suggest: the URL-bar suggestion engine of a desktop browser.
//!
//! Ranks and merges history, bookmark, about-page, open-tab, search and
//! top-site suggestions per keystroke. This library crate exposes all
//! modules for use by the RPC binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod suggestion;
pub mod types;
