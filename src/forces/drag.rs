use crate::core::BodyHandle;
use crate::forces::{Effect, TickContext};
use std::any::Any;

/// Linear drag on one body: `F = -gamma * v`
#[derive(Debug, Clone)]
pub struct Drag {
    /// Linear drag coefficient
    gamma: f64,

    /// The body slowed by this drag
    affected_bodies: [BodyHandle; 1],
}

impl Drag {
    /// Creates a new drag effect on `body`
    pub fn new(gamma: f64, body: BodyHandle) -> Self {
        Self {
            gamma,
            affected_bodies: [body],
        }
    }

    /// Gets the drag coefficient
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Sets the drag coefficient
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }
}

impl Effect for Drag {
    fn effect_type(&self) -> &'static str {
        "Drag"
    }

    fn apply(&mut self, ctx: &mut TickContext<'_>) {
        let Some(body) = ctx.body_mut(self.affected_bodies[0]) else {
            return;
        };
        let drag_force = body.velocity() * -self.gamma;
        body.add_force(drag_force);
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
