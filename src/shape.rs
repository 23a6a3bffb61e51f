//! Shapes drawn on the canvas.
//!
//! Every shape carries the shared `x`, `y` and `color` fields; what makes it a circle,
//! a rectangle or a line lives in [`Geometry`]. Commands hold shapes through
//! [`ShapeRef`] so the canvas and the history see the same object.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    Circle { radius: i32 },
    Rectangle { width: i32, height: i32 },
    /// `x`/`y` of the owning shape are the start point.
    Line { x2: i32, y2: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub x: i32,
    pub y: i32,
    pub color: String,
    pub geometry: Geometry,
}

impl Shape {
    #[must_use]
    pub fn circle(x: i32, y: i32, radius: i32, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            color: color.into(),
            geometry: Geometry::Circle { radius },
        }
    }

    #[must_use]
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            color: color.into(),
            geometry: Geometry::Rectangle { width, height },
        }
    }

    #[must_use]
    pub fn line(x1: i32, y1: i32, x2: i32, y2: i32, color: impl Into<String>) -> Self {
        Self {
            x: x1,
            y: y1,
            color: color.into(),
            geometry: Geometry::Line { x2, y2 },
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self.geometry {
            Geometry::Circle { .. } => "circle",
            Geometry::Rectangle { .. } => "rectangle",
            Geometry::Line { .. } => "line",
        }
    }
}

/// Placeholder rendering: the line a real renderer would draw from.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.geometry {
            Geometry::Circle { radius } => write!(
                f,
                "circle at ({}, {}) with radius {}, color {}",
                self.x, self.y, radius, self.color
            ),
            Geometry::Rectangle { width, height } => write!(
                f,
                "rectangle at ({}, {}) sized {}x{}, color {}",
                self.x, self.y, width, height, self.color
            ),
            Geometry::Line { x2, y2 } => write!(
                f,
                "line from ({}, {}) to ({}, {}), color {}",
                self.x, self.y, x2, y2, self.color
            ),
        }
    }
}

/// Shared handle to a shape.
///
/// Clones point at the same shape. Equality is identity: two handles are equal only
/// when they refer to the same allocation, never because their fields match.
#[derive(Clone)]
pub struct ShapeRef(Rc<RefCell<Shape>>);

impl ShapeRef {
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self(Rc::new(RefCell::new(shape)))
    }

    /// # Panics
    ///
    /// Panics if the shape is currently borrowed mutably.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Shape> {
        self.0.borrow()
    }

    /// # Panics
    ///
    /// Panics if the shape is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Shape> {
        self.0.borrow_mut()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A copy of the shape's current state.
    #[must_use]
    pub fn snapshot(&self) -> Shape {
        self.borrow().clone()
    }
}

impl From<Shape> for ShapeRef {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ShapeRef {}

impl fmt::Debug for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(shape) => write!(f, "ShapeRef({:?})", *shape),
            Err(_) => write!(f, "ShapeRef(<borrowed>)"),
        }
    }
}

impl fmt::Display for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(shape) => fmt::Display::fmt(&*shape, f),
            Err(_) => write!(f, "<borrowed shape>"),
        }
    }
}
