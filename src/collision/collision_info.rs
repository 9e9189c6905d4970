use crate::math::Vector2;

/// The status of a collision between two shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Whether the two shapes are colliding
    pub collided: bool,

    /// The collision axis: a unit vector pointing from the first shape towards
    /// the second. Impulses are applied along this axis. Only meaningful when
    /// `collided` is true.
    pub axis: Vector2,
}

impl CollisionInfo {
    /// A result describing two separated shapes
    pub fn separated() -> Self {
        Self {
            collided: false,
            axis: Vector2::zero(),
        }
    }

    /// A result describing two overlapping shapes
    pub fn colliding(axis: Vector2) -> Self {
        Self {
            collided: true,
            axis,
        }
    }

    /// Returns the axis if the shapes collided
    pub fn axis(&self) -> Option<Vector2> {
        self.collided.then_some(self.axis)
    }
}
