pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod forces;

/// Re-export common types for easier usage
pub use crate::core::{Scene, SimulationConfig, BodyHandle, EffectHandle};
pub use crate::bodies::{Body, Color};
pub use crate::collision::{find_collision, CollisionInfo};
pub use crate::math::Vector2;
pub use crate::shapes::Polygon;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Degenerate shape: {0}")]
        DegenerateShape(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("A collision needs two distinct bodies, got {0} twice")]
        SameBody(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
