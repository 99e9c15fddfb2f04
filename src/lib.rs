//! Declarative turtle graphics: assemble a command program, compile it into
//! polyline strokes, and translate those into renderable path operations.
//!
//! The crate draws nothing itself. An external renderer consumes the
//! [`PathOp`] list; everything here is pure, synchronous, and free of I/O.
//!
//! ```
//! use turtle_path::{build_path, compile, PathConfig, ProgramBuilder};
//!
//! let program = ProgramBuilder::new()
//!     .pen_down()
//!     .repeat(4, |b| b.forward(40).left(90))
//!     .build();
//!
//! let strokes = compile(&program)?;
//! let ops = build_path(&strokes, &PathConfig::default());
//! assert!(!ops.is_empty());
//! # Ok::<(), turtle_path::CompileError>(())
//! ```

pub mod builder;
pub mod command;
pub mod compiler;
pub mod error;
pub mod geometry;
pub mod path;

pub use builder::ProgramBuilder;
pub use command::{Command, Program};
pub use compiler::{compile, compile_with_limits, Limits, Stroke};
pub use error::CompileError;
pub use geometry::{Point, Rect};
pub use path::{bounds, build_path, PathConfig, PathOp, YAxis};
