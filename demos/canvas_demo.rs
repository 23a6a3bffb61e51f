//! Adds two shapes, moves one far away, then undoes and redoes the last two steps,
//! drawing the canvas after each stage.
//!
//! Run with `cargo run --example canvas_demo`.

use shape_history::{
    logging::{self, Profile},
    prelude::*,
};
use tracing::info;

fn main() -> Result<(), CanvasError> {
    logging::init(Profile::Development);

    let mut canvas = Canvas::new();
    let mut history = CommandHistory::new();

    info!("adding a circle");
    let circle = ShapeRef::new(Shape::circle(50, 50, 20, "blue"));
    history.execute(ReversibleCommand::add_shape(&circle), &mut canvas)?;
    canvas.draw_all();

    info!("adding a rectangle");
    let rectangle = ShapeRef::new(Shape::rectangle(100, 100, 60, 40, "red"));
    history.execute(ReversibleCommand::add_shape(&rectangle), &mut canvas)?;
    canvas.draw_all();

    info!("moving the circle far away");
    history.execute(ReversibleCommand::move_shape(&circle, 1000, 1000), &mut canvas)?;
    canvas.draw_all();

    info!("undoing the last two commands");
    for _ in 0..2 {
        let step = history.undo(&mut canvas)?;
        info!(?step, "undo");
    }
    canvas.draw_all();

    info!("redoing them, plus one redo too many");
    for _ in 0..3 {
        match history.redo(&mut canvas)? {
            Step::NothingToRedo => info!("nothing left to redo"),
            step => info!(?step, "redo"),
        }
    }
    canvas.draw_all();

    Ok(())
}
