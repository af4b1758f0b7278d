//! Pointer input: host-written event queue, folded into a per-frame state.

mod pointer;
mod queue;

pub use pointer::PointerState;
pub use queue::{InputEvent, InputQueue};
