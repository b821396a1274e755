//! Forces dynamic linking of `cave-gfx` when the `dynamic_linking` feature is enabled.
//!
//! This crate should not be used directly.

#![allow(unused_imports)]
use cavegfx_internal;
