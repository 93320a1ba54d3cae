//! Marquee Web - HTMX search UI and JSON API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Server-rendered movie and TV search with HTMX partial updates, a
//! favorites page, and JSON endpoints for external clients.

pub mod components;
pub mod handlers;
pub mod htmx;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, run_server};
