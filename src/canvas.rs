use tracing::info;

use crate::{
    error::{CanvasError, Result},
    shape::ShapeRef,
};

/// The collection of shapes the editor commands operate on.
///
/// Membership is by handle identity, so two structurally equal shapes can both live
/// on the canvas, but the same handle can never be added twice.
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<ShapeRef>,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `shape` to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::AlreadyPresent`] if this exact shape is already on the canvas.
    pub fn add_shape(&mut self, shape: ShapeRef) -> Result<()> {
        if self.contains(&shape) {
            return Err(CanvasError::AlreadyPresent(shape.to_string()));
        }

        self.shapes.push(shape);
        Ok(())
    }

    /// Removes `shape` from the canvas, keeping the order of the remaining shapes.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::NotFound`] if the shape is not on the canvas.
    pub fn remove_shape(&mut self, shape: &ShapeRef) -> Result<()> {
        let Some(index) = self.shapes.iter().position(|s| s.ptr_eq(shape)) else {
            return Err(CanvasError::NotFound(shape.to_string()));
        };

        self.shapes.remove(index);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, shape: &ShapeRef) -> bool {
        self.shapes.iter().any(|s| s.ptr_eq(shape))
    }

    #[must_use]
    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Draws every shape in insertion order.
    ///
    /// There is no real renderer yet: each shape is logged and its description returned.
    pub fn draw_all(&self) -> Vec<String> {
        if self.shapes.is_empty() {
            info!("canvas is empty");
            return Vec::new();
        }

        self.shapes
            .iter()
            .map(|shape| {
                let line = shape.to_string();
                info!(shape = %line, "draw");
                line
            })
            .collect()
    }
}
