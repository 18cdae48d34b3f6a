//! WebAssembly bindings for the symbolic trace engine.
//!
//! This module provides JavaScript-callable interfaces so a browser-based
//! trace viewer can annotate each instruction with the engine's state line.

pub mod api;

pub use api::TraceSession;
