//! System information collection modules
//!
//! Leaf providers: each function queries one OS subsystem and returns a
//! snapshot. None of them keep state between calls.

pub mod battery;
pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod system;
