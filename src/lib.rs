#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

pub mod canvas;
pub mod command_history;
pub mod error;
pub mod logging;
pub mod shape;
pub mod shape_command;
pub mod traits;

pub mod prelude {
	pub use crate::canvas::Canvas;
	pub use crate::command_history::CommandHistory;
	pub use crate::error::CanvasError;
	pub use crate::shape::{Geometry, Shape, ShapeRef};
	pub use crate::shape_command::ReversibleCommand;
	pub use crate::traits::command::Command;
	pub use crate::traits::history::{History, Step};
}
