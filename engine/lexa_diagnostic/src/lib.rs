//! Lexa diagnostics - Positioning and Presentation
//!
//! Turns the flat byte offsets carried by engine errors into rows and
//! columns, and renders finished scans for humans and tools:
//! - [`position`]: row/column resolution, linear and table-backed
//! - [`report`]: unified [`EngineError`] plus [`position_errors`]
//! - [`emitter`]: terminal and JSON presentation of a [`ScanReport`]
//!
//! The crate consumes `lexa_core` types and never scans anything itself;
//! it is the seam between the engine and a front end.

pub mod emitter;
pub mod position;
pub mod report;

pub use emitter::{ColorMode, JsonEmitter, ReportEmitter, ScanReport, TerminalEmitter};
pub use position::{locate, Position, PositionMap};
pub use report::{position_errors, EngineError, PositionedError};
