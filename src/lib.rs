//! Renderer for HP85662A display-processor memory dumps.
//!
//! The HP85662A (top half of the HP8566/HP8568 spectrum analyzers) draws its
//! CRT from a 4096-word "vector list program" in screen memory. This crate
//! replays such a dump against a pluggable drawing sink, so the picture
//! (including anything added through display programming) can be reproduced
//! off the instrument.
//!
//! ## Design
//!
//! * screen memory is captured elsewhere; we only take the 4096 words
//! * each word decodes once into an `Instruction`; dispatch is on that enum
//! * the interpreter knows nothing about how strokes end up on screen; it
//!   talks to a `DrawingSink`
//! * characters come from a constant character ROM of glyph micro-programs
//! * two passes: the counter/threshold register is loaded late in the stock
//!   program, so a silent priming pass runs first
//! * malformed programs halt the pass and are reported, never panic
//!
//! Model
//!
//! render(memory, sink, options)
//!  |-- sink.begin(bbox, background), pen width
//!  |-- priming pass (sink calls suppressed)
//!  |    `-- step() until end bit / stray bits / runaway glyph / step ceiling
//!  |-- real pass
//!  `-- sink.end()
use std::io;
use thiserror::Error;

pub mod charrom;
pub mod display;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod memory;
pub mod options;

pub use display::{BoundingBox, Color, DrawingSink, RecordingSink, SinkCall};
pub use interpreter::{render, Halt, PassReport, RenderReport};
pub use memory::{ScreenMemory, WordOrder, SCREEN_WORDS};
pub use options::RenderOptions;

/// Errors surfaced while loading or rendering a screen memory dump.
#[derive(Error, Debug)]
pub enum Error {
    #[error("screen memory must hold exactly {expected} words, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("screen memory dump must be {expected} bytes, got {actual}")]
    InvalidDumpSize { expected: usize, actual: usize },
    #[error("glyph chain for character 0x{code:02x} does not terminate")]
    RunawayGlyph { code: u8 },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid render options: {0}")]
    Options(#[from] serde_json::Error),
}
