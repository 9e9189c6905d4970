use crate::bodies::Body;
use crate::collision::find_collision;
use crate::core::{BodyHandle, CollisionEvent, CollisionEventType};
use crate::forces::{Effect, TickContext};
use crate::math::Vector2;
use log::debug;
use std::any::Any;
use std::fmt;

/// Reacts to two bodies starting to overlap.
///
/// `axis` is the unit collision axis pointing from `body_a` towards `body_b`.
pub trait CollisionHandler: 'static {
    /// Called once when the bodies begin overlapping
    fn on_collision(&mut self, body_a: &mut Body, body_b: &mut Body, axis: Vector2);

    /// Returns a name for debugging output
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> CollisionHandler for F
where
    F: FnMut(&mut Body, &mut Body, Vector2) + 'static,
{
    fn on_collision(&mut self, body_a: &mut Body, body_b: &mut Body, axis: Vector2) {
        self(body_a, body_b, axis)
    }
}

/// Reduced mass of a two-body collision.
///
/// An immovable (infinite mass) partner leaves the other body's mass; two
/// immovable bodies exchange nothing.
pub fn reduced_mass(mass_a: f64, mass_b: f64) -> f64 {
    match (mass_a.is_infinite(), mass_b.is_infinite()) {
        (true, true) => 0.0,
        (true, false) => mass_b,
        (false, true) => mass_a,
        (false, false) => mass_a * mass_b / (mass_a + mass_b),
    }
}

/// Magnitude of the collision impulse along `axis`:
/// `J = (1 + e) * (v_b . axis - v_a . axis) * reduced_mass`.
///
/// Adding `J * axis` to `body_a` and `-J * axis` to `body_b` resolves the
/// collision.
pub fn collision_impulse(body_a: &Body, body_b: &Body, axis: Vector2, elasticity: f64) -> f64 {
    let u_a = body_a.velocity().dot(&axis);
    let u_b = body_b.velocity().dot(&axis);
    (1.0 + elasticity) * (u_b - u_a) * reduced_mass(body_a.mass(), body_b.mass())
}

/// Removes both bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct DestructiveCollision;

impl CollisionHandler for DestructiveCollision {
    fn on_collision(&mut self, body_a: &mut Body, body_b: &mut Body, _axis: Vector2) {
        body_a.remove();
        body_b.remove();
    }

    fn name(&self) -> &'static str {
        "DestructiveCollision"
    }
}

/// Removes the first body and bounces the second off it
#[derive(Debug, Clone, Copy)]
pub struct HalfDestructiveCollision {
    /// Coefficient of restitution
    pub elasticity: f64,
}

impl HalfDestructiveCollision {
    /// Creates the handler with coefficient of restitution `elasticity`
    pub fn new(elasticity: f64) -> Self {
        Self { elasticity }
    }
}

impl CollisionHandler for HalfDestructiveCollision {
    fn on_collision(&mut self, body_a: &mut Body, body_b: &mut Body, axis: Vector2) {
        let impulse = collision_impulse(body_a, body_b, axis, self.elasticity);
        body_a.remove();
        body_b.add_impulse(axis * -impulse);
    }

    fn name(&self) -> &'static str {
        "HalfDestructiveCollision"
    }
}

/// Resolves the collision with equal and opposite impulses
#[derive(Debug, Clone, Copy)]
pub struct PhysicsCollision {
    /// Coefficient of restitution
    pub elasticity: f64,
}

impl PhysicsCollision {
    /// Creates the handler; `elasticity` 1 is perfectly elastic, 0 perfectly inelastic
    pub fn new(elasticity: f64) -> Self {
        Self { elasticity }
    }
}

impl CollisionHandler for PhysicsCollision {
    fn on_collision(&mut self, body_a: &mut Body, body_b: &mut Body, axis: Vector2) {
        let impulse = axis * collision_impulse(body_a, body_b, axis, self.elasticity);
        body_a.add_impulse(impulse);
        body_b.add_impulse(-impulse);
    }

    fn name(&self) -> &'static str {
        "PhysicsCollision"
    }
}

/// Runs a [`CollisionHandler`] once per overlap episode of two bodies.
///
/// The handler fires on the first tick the bodies overlap and stays quiet
/// while they remain overlapped; separating re-arms it.
pub struct CollisionEffect {
    /// The two bodies tested against each other
    affected_bodies: [BodyHandle; 2],

    /// What to do when they start overlapping
    handler: Box<dyn CollisionHandler>,

    /// Whether the bodies overlapped on the previous tick
    colliding: bool,
}

impl CollisionEffect {
    /// Creates a new collision effect between two bodies
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, handler: impl CollisionHandler) -> Self {
        Self::from_boxed(body_a, body_b, Box::new(handler))
    }

    /// Creates a new collision effect from an already boxed handler
    pub fn from_boxed(body_a: BodyHandle, body_b: BodyHandle, handler: Box<dyn CollisionHandler>) -> Self {
        Self {
            affected_bodies: [body_a, body_b],
            handler,
            colliding: false,
        }
    }

    /// Returns whether the bodies overlapped on the last tick
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Returns the handler's name
    pub fn handler_name(&self) -> &'static str {
        self.handler.name()
    }
}

impl fmt::Debug for CollisionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionEffect")
            .field("bodies", &self.affected_bodies)
            .field("handler", &self.handler.name())
            .field("colliding", &self.colliding)
            .finish()
    }
}

impl Effect for CollisionEffect {
    fn effect_type(&self) -> &'static str {
        "Collision"
    }

    fn apply(&mut self, ctx: &mut TickContext<'_>) {
        let [handle_a, handle_b] = self.affected_bodies;
        let Some((a, b)) = ctx.body_pair_mut(handle_a, handle_b) else {
            return;
        };

        let info = find_collision(a.shape(), b.shape());
        let event_type = if info.collided {
            if self.colliding {
                return;
            }
            self.colliding = true;
            self.handler.on_collision(a, b, info.axis);
            debug!("{} fired between {:?} and {:?}", self.handler.name(), handle_a, handle_b);
            CollisionEventType::Begin
        } else {
            if !self.colliding {
                return;
            }
            self.colliding = false;
            CollisionEventType::End
        };

        ctx.emit_collision(CollisionEvent {
            event_type,
            body_a: handle_a,
            body_b: handle_b,
            axis: info.axis,
        });
    }

    fn bodies(&self) -> &[BodyHandle] {
        &self.affected_bodies
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
