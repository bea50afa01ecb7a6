//! Multiplex scheduler
//!
//! Cycles the lit digit on every refresh tick and decides when the next
//! tick is due.

pub mod deadline;
pub mod multiplexer;

pub use deadline::RefreshDeadline;
pub use multiplexer::Multiplexer;
