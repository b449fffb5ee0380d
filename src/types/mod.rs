// Shared type definitions for the URL-bar suggestion engine
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod errors;
pub mod history;
pub mod search;
pub mod settings;
pub mod site;
pub mod suggestion;
pub mod tab;
