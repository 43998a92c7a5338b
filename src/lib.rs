//! Presence dot
//!
//! A ratatui widget that shows a chat participant's availability as a small
//! colored dot, plus the configuration, logging and preview shell around it.

pub mod config;
pub mod logging;
pub mod model;
pub mod preview;
pub mod view;
