mod effect;
mod gravity;
mod spring;
mod drag;
mod collision;

pub use self::effect::{Effect, TickContext, ConstantForce, FnEffect};
pub use self::gravity::NewtonianGravity;
pub use self::spring::Spring;
pub use self::drag::Drag;
pub use self::collision::{
    CollisionEffect, CollisionHandler, DestructiveCollision, HalfDestructiveCollision,
    PhysicsCollision, collision_impulse, reduced_mass,
};
