use std::borrow::Cow;

use crate::{canvas::Canvas, error::CanvasError, shape::ShapeRef, traits::command::Command};

/// Editor operations on a [`Canvas`].
///
/// Each variant captures, when it is built, everything it needs to undo itself. Moving
/// and recoloring snapshot the shape's current coordinates or color; building a command
/// never touches the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReversibleCommand {
    AddShape {
        shape: ShapeRef,
    },
    RemoveShape {
        shape: ShapeRef,
    },
    MoveShape {
        shape: ShapeRef,
        dx: i32,
        dy: i32,
        original_x: i32,
        original_y: i32,
    },
    ChangeColor {
        shape: ShapeRef,
        new_color: String,
        original_color: String,
    },
}

impl ReversibleCommand {
    #[must_use]
    pub fn add_shape(shape: &ShapeRef) -> Self {
        Self::AddShape {
            shape: shape.clone(),
        }
    }

    #[must_use]
    pub fn remove_shape(shape: &ShapeRef) -> Self {
        Self::RemoveShape {
            shape: shape.clone(),
        }
    }

    #[must_use]
    pub fn move_shape(shape: &ShapeRef, dx: i32, dy: i32) -> Self {
        let (original_x, original_y) = {
            let current = shape.borrow();
            (current.x, current.y)
        };

        Self::MoveShape {
            shape: shape.clone(),
            dx,
            dy,
            original_x,
            original_y,
        }
    }

    #[must_use]
    pub fn change_color(shape: &ShapeRef, new_color: impl Into<String>) -> Self {
        let original_color = shape.borrow().color.clone();

        Self::ChangeColor {
            shape: shape.clone(),
            new_color: new_color.into(),
            original_color,
        }
    }

    /// The shape this command acts on.
    #[must_use]
    pub fn shape(&self) -> &ShapeRef {
        match self {
            Self::AddShape { shape }
            | Self::RemoveShape { shape }
            | Self::MoveShape { shape, .. }
            | Self::ChangeColor { shape, .. } => shape,
        }
    }
}

impl Command for ReversibleCommand {
    type Context = Canvas;
    type Error = CanvasError;

    fn apply(&self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        match self {
            Self::AddShape { shape } => canvas.add_shape(shape.clone()),
            Self::RemoveShape { shape } => canvas.remove_shape(shape),
            Self::MoveShape {
                shape,
                dx,
                dy,
                original_x,
                original_y,
            } => {
                // Coordinates saturate at the i32 bounds.
                let mut shape = shape.borrow_mut();
                shape.x = original_x.saturating_add(*dx);
                shape.y = original_y.saturating_add(*dy);
                Ok(())
            }
            Self::ChangeColor {
                shape, new_color, ..
            } => {
                shape.borrow_mut().color.clone_from(new_color);
                Ok(())
            }
        }
    }

    fn reverse(&self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        match self {
            Self::AddShape { shape } => canvas.remove_shape(shape),
            Self::RemoveShape { shape } => canvas.add_shape(shape.clone()),
            Self::MoveShape {
                shape,
                original_x,
                original_y,
                ..
            } => {
                let mut shape = shape.borrow_mut();
                shape.x = *original_x;
                shape.y = *original_y;
                Ok(())
            }
            Self::ChangeColor {
                shape,
                original_color,
                ..
            } => {
                shape.borrow_mut().color.clone_from(original_color);
                Ok(())
            }
        }
    }

    fn description(&self) -> Cow<'_, str> {
        let kind = self.shape().borrow().kind();
        match self {
            Self::AddShape { .. } => Cow::Owned(format!("Add {kind}")),
            Self::RemoveShape { .. } => Cow::Owned(format!("Remove {kind}")),
            Self::MoveShape { dx, dy, .. } => Cow::Owned(format!("Move {kind} by ({dx}, {dy})")),
            Self::ChangeColor { new_color, .. } => {
                Cow::Owned(format!("Change {kind} color to {new_color}"))
            }
        }
    }
}
