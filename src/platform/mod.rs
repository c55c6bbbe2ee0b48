//! Platform abstraction layer
//!
//! Collaborators the game loop talks to once per tick:
//! - Time (`Clock`): current time and the end-of-tick sleep
//! - Input (`InputSource`): key snapshot and the quit signal

pub mod clock;
pub mod input;
pub mod terminal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{InputSource, ScriptedInput};
pub use terminal::TerminalInput;
