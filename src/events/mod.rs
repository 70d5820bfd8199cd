pub mod focus;
pub mod pointer;

pub use focus::wire_focus_handlers;
pub use pointer::wire_pointer_handlers;
