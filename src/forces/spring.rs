use crate::core::BodyHandle;
use crate::forces::{Effect, TickContext};
use std::any::Any;

/// A zero-rest-length spring between two bodies' centroids (Hooke's law)
#[derive(Debug, Clone)]
pub struct Spring {
    /// The spring stiffness coefficient (higher values mean stiffer springs)
    stiffness: f64,

    /// The two bodies connected by the spring
    affected_bodies: [BodyHandle; 2],
}

impl Spring {
    /// Creates a new spring between two bodies
    pub fn new(stiffness: f64, body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self {
            stiffness,
            affected_bodies: [body_a, body_b],
        }
    }

    /// Gets the spring stiffness coefficient
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Sets the spring stiffness coefficient
    pub fn set_stiffness(&mut self, stiffness: f64) {
        self.stiffness = stiffness;
    }
}

impl Effect for Spring {
    fn effect_type(&self) -> &'static str {
        "Spring"
    }

    fn apply(&mut self, ctx: &mut TickContext<'_>) {
        let [handle_a, handle_b] = self.affected_bodies;
        let Some((a, b)) = ctx.body_pair_mut(handle_a, handle_b) else {
            return;
        };

        // F = k * x, pulling each body towards the other
        let force = (b.position() - a.position()) * self.stiffness;
        a.add_force(force);
        b.add_force(-force);
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
