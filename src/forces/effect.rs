use crate::bodies::Body;
use crate::core::{BodyHandle, BodyStorage, CollisionEvent, EventQueue};
use crate::math::Vector2;
use std::any::Any;
use std::fmt;

/// What an effect sees while the scene runs it: the bodies and the event queue.
pub struct TickContext<'a> {
    bodies: &'a mut BodyStorage,
    events: &'a mut EventQueue,
}

impl<'a> TickContext<'a> {
    pub(crate) fn new(bodies: &'a mut BodyStorage, events: &'a mut EventQueue) -> Self {
        Self { bodies, events }
    }

    /// Returns a body, or `None` if the handle is stale
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Returns a body mutably, or `None` if the handle is stale
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Returns two distinct bodies mutably
    pub fn body_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut Body, &mut Body)> {
        self.bodies.get2_mut(a, b)
    }

    /// Iterates over every body in the scene in insertion order.
    ///
    /// Bodies can be flagged with [`Body::remove`] but not dropped here; the
    /// scene drops them, with their effects, once the tick's effects have run.
    pub fn bodies_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> + '_ {
        self.bodies.iter_mut()
    }

    /// Records a collision event for the driver
    pub fn emit_collision(&mut self, event: CollisionEvent) {
        self.events.add_collision_event(event);
    }
}

/// A unit of per-tick behavior that reads body state and writes forces or
/// impulses into bodies.
///
/// Every effect is bound to the bodies returned by [`Effect::bodies`]; when
/// the scene sweeps one of those bodies it drops the effect as well.
pub trait Effect: fmt::Debug + 'static {
    /// Returns the type name of the effect
    fn effect_type(&self) -> &'static str;

    /// Applies the effect for the current tick
    fn apply(&mut self, ctx: &mut TickContext<'_>);

    /// Returns the bodies this effect is bound to
    fn bodies(&self) -> &[BodyHandle];

    /// Returns true if the effect is bound to the given body
    fn involves_body(&self, body: BodyHandle) -> bool {
        self.bodies().contains(&body)
    }

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// An effect that adds the same force to one body every tick
#[derive(Debug, Clone)]
pub struct ConstantForce {
    /// The force to apply
    force: Vector2,

    /// The body to apply the force to
    affected_bodies: [BodyHandle; 1],
}

impl ConstantForce {
    /// Creates a new constant force acting on `body`
    pub fn new(force: Vector2, body: BodyHandle) -> Self {
        Self {
            force,
            affected_bodies: [body],
        }
    }

    /// Gets the current force
    pub fn force(&self) -> Vector2 {
        self.force
    }

    /// Sets the force to apply
    pub fn set_force(&mut self, force: Vector2) {
        self.force = force;
    }
}

impl Effect for ConstantForce {
    fn effect_type(&self) -> &'static str {
        "ConstantForce"
    }

    fn apply(&mut self, ctx: &mut TickContext<'_>) {
        if let Some(body) = ctx.body_mut(self.affected_bodies[0]) {
            body.add_force(self.force);
        }
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

/// An effect backed by a closure.
///
/// The closure's captured variables are the effect's state and are dropped
/// with it. An empty body list means the effect is never swept with a body.
pub struct FnEffect<F> {
    bodies: Vec<BodyHandle>,
    func: F,
}

impl<F> FnEffect<F>
where
    F: FnMut(&mut TickContext<'_>) + 'static,
{
    /// Creates a closure effect bound to `bodies`
    pub fn new(bodies: Vec<BodyHandle>, func: F) -> Self {
        Self { bodies, func }
    }
}

impl<F> fmt::Debug for FnEffect<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEffect")
            .field("bodies", &self.bodies)
            .finish_non_exhaustive()
    }
}

impl<F> Effect for FnEffect<F>
where
    F: FnMut(&mut TickContext<'_>) + 'static,
{
    fn effect_type(&self) -> &'static str {
        "Fn"
    }

    fn apply(&mut self, ctx: &mut TickContext<'_>) {
        (self.func)(ctx);
    }

    fn bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
