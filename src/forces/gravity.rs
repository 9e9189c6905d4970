use crate::core::BodyHandle;
use crate::forces::{Effect, TickContext};
use crate::math::EPSILON;
use log::warn;
use std::any::Any;

/// Newtonian attraction between two bodies: `F = G * m1 * m2 / r^2`
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    /// The gravitational constant
    g: f64,

    /// The two attracting bodies
    affected_bodies: [BodyHandle; 2],

    /// Separations below this are replaced by `reset_distance`
    min_distance: f64,

    /// Separation used when the bodies are closer than `min_distance`
    reset_distance: f64,
}

impl NewtonianGravity {
    /// Creates a new gravity effect between two bodies
    pub fn new(g: f64, body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self {
            g,
            affected_bodies: [body_a, body_b],
            min_distance: 5.0,
            reset_distance: 30.0,
        }
    }

    /// Sets the distance clamp used to avoid the singularity at `r = 0`
    pub fn with_distance_clamp(mut self, min_distance: f64, reset_distance: f64) -> Self {
        self.min_distance = min_distance.max(0.0);
        self.reset_distance = reset_distance.max(EPSILON);
        self
    }

    /// Gets the gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Sets the gravitational constant
    pub fn set_g(&mut self, g: f64) {
        self.g = g;
    }

    /// Gets the minimum trusted separation
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Gets the fallback separation
    pub fn reset_distance(&self) -> f64 {
        self.reset_distance
    }
}

impl Effect for NewtonianGravity {
    fn effect_type(&self) -> &'static str {
        "NewtonianGravity"
    }

    fn apply(&mut self, ctx: &mut TickContext<'_>) {
        let [handle_a, handle_b] = self.affected_bodies;
        let (Some(a), Some(b)) = (ctx.body(handle_a), ctx.body(handle_b)) else {
            warn!("gravity between {:?} and {:?} references a missing body", handle_a, handle_b);
            return;
        };

        let offset = b.position() - a.position();
        let mut distance = offset.length();
        if distance < EPSILON {
            // Coincident centroids have no direction to pull along
            return;
        }
        let direction = offset / distance;

        if distance < self.min_distance {
            distance = self.reset_distance;
        }

        let magnitude = self.g * a.mass() * b.mass() / (distance * distance);
        if !magnitude.is_finite() {
            return;
        }
        let force = direction * magnitude;

        // Equal and opposite; a body with gravity disabled sits this tick out
        if let Some(a) = ctx.body_mut(handle_a) {
            if !a.is_gravity_disabled() {
                a.add_force(force);
            }
        }
        if let Some(b) = ctx.body_mut(handle_b) {
            if !b.is_gravity_disabled() {
                b.add_force(-force);
            }
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
