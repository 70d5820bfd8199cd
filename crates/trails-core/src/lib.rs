pub mod chain;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod oscillator;
pub mod surface;
pub mod trail;

pub use chain::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use frame_loop::*;
pub use input::*;
pub use oscillator::*;
pub use surface::*;
pub use trail::*;
