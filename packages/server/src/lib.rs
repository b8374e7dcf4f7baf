// Keyword Extraction System - API Core
//
// This crate provides the HTTP API in front of the keyword extraction
// gateway: request validation, method dispatch, response shaping.

pub mod config;
pub mod server;

pub use config::*;
