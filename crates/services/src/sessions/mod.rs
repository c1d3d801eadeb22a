mod handle;
mod runner;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionLoopError;
pub use handle::SessionHandle;
pub use workflow::SessionLoopService;
