//! Response types for tool results

mod battery;
mod cpu;
mod files;
mod gpu;
mod memory;
mod network;
mod process;
mod system;

pub use battery::*;
pub use cpu::*;
pub use files::*;
pub use gpu::*;
pub use memory::*;
pub use network::*;
pub use process::*;
pub use system::*;
