//! Interactive terminal surface for EOMS.
//!
//! The console owns the input/output collaborators; the menu and workflows
//! are thin dialogs over the pure domain crates, so tests can drive the
//! whole system with scripted transcripts.

pub mod console;
pub mod menu;
pub mod workflows;

pub use console::{Console, ConsoleError, ConsoleResult};
pub use menu::run;
