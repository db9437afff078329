//! Image encoding pipeline for Backdrop.
//!
//! This module provides functionality for:
//! - Encoding composed scenes to PNG format
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.

mod png;

pub use png::{encode_png, EncodeError};
