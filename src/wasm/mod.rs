//! WebAssembly bindings for the nes6502 core.
//!
//! This module provides a JavaScript-callable wrapper around a CPU attached to the
//! NES memory map, enabling browser-based front ends.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::NesCpu;
