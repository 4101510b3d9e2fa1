//! Terminal client for a YouTube video summary service.
//!
//! Paste a link, press Enter, read the summary. The video identifier is
//! extracted locally ([`extractor`]); the summary comes from an external
//! HTTP service ([`service`]); the screen and its state machine live in
//! [`ui`].

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod extractor;
pub mod headless;
pub mod logging;
pub mod service;
pub mod ui;
