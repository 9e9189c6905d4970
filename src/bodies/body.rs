use crate::bodies::{body_flags::BodyFlags, Color};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::shapes::Polygon;
use crate::Result;

use std::any::Any;
use std::f64::consts::TAU;

/// A rigid polygon moving in the plane.
///
/// The body's position is the centroid of its shape and is kept in sync with
/// it: every operation that moves the shape moves the position by the same
/// transform. Rotation is cosmetic; only linear motion is integrated.
#[derive(Debug)]
pub struct Body {
    /// The body's shape in world space
    shape: Polygon,

    /// The body's mass; `f64::INFINITY` for immovable bodies
    mass: f64,

    /// The centroid of `shape`
    position: Vector2,

    /// The rotation last applied through `set_fake_rotation`
    angle: f64,

    /// The body's linear velocity
    velocity: Vector2,

    /// Force accumulated for the next integration step
    force: Vector2,

    /// Impulse accumulated for the next integration step
    impulse: Vector2,

    /// The body's display color
    color: Color,

    /// Collaborator-defined payload
    info: Option<Box<dyn Any>>,

    /// The body's flags
    flags: BodyFlags,
}

impl Body {
    /// Creates a new body from its shape, mass and color.
    ///
    /// The mass must be positive (use `f64::INFINITY` for walls and
    /// platforms) and the shape must have at least three vertices enclosing
    /// a non-zero area.
    pub fn new(shape: Polygon, mass: f64, color: Color) -> Result<Self> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "body mass must be positive, got {mass}"
            )));
        }
        if shape.len() < 3 {
            return Err(PhysicsError::InvalidParameter(format!(
                "body shape needs at least 3 vertices, got {}",
                shape.len()
            )));
        }

        if shape.is_degenerate() {
            return Err(PhysicsError::DegenerateShape(format!(
                "shape with {} vertices has area {}",
                shape.len(),
                shape.area()
            )));
        }
        let position = shape.centroid();

        Ok(Self {
            shape,
            mass,
            position,
            angle: 0.0,
            velocity: Vector2::zero(),
            force: Vector2::zero(),
            impulse: Vector2::zero(),
            color,
            info: None,
            flags: BodyFlags::empty(),
        })
    }

    /// Creates a new body carrying a collaborator-defined payload
    pub fn with_info<T: Any>(shape: Polygon, mass: f64, color: Color, info: T) -> Result<Self> {
        let mut body = Self::new(shape, mass, color)?;
        body.info = Some(Box::new(info));
        Ok(body)
    }

    /// Returns the body's shape
    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    /// Returns an owned copy of the body's shape
    pub fn shape_copy(&self) -> Polygon {
        self.shape.clone()
    }

    /// Returns the body's mass
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns true if the body has infinite mass
    pub fn is_immovable(&self) -> bool {
        self.mass.is_infinite()
    }

    /// Returns the body's position (the centroid of its shape)
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Moves the body so its centroid lands on `position`
    pub fn set_position(&mut self, position: Vector2) {
        let delta = position - self.position;
        self.translate(delta);
    }

    /// Moves the body by `delta`
    pub fn translate(&mut self, delta: Vector2) {
        self.shape.translate(delta);
        self.position += delta;
    }

    /// Returns the body's linear velocity
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's linear velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the rotation last applied through [`Body::set_fake_rotation`]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Overrides the recorded rotation angle without touching the shape
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Rotates the shape by `angle` about the centroid.
    ///
    /// Successive calls compound.
    pub fn set_rotation(&mut self, angle: f64) {
        self.shape.rotate(angle, self.position);
    }

    /// Orients the shape at `angle` relative to its original orientation.
    ///
    /// The previously applied angle is undone first, so repeated calls do not
    /// compound.
    pub fn set_fake_rotation(&mut self, angle: f64) {
        self.shape.rotate(TAU - self.angle, self.position);
        self.shape.rotate(angle, self.position);
        self.angle = angle;
    }

    /// Returns the force accumulated for the next step
    pub fn force(&self) -> Vector2 {
        self.force
    }

    /// Adds a force for the next integration step
    pub fn add_force(&mut self, force: Vector2) {
        self.force += force;
    }

    /// Subtracts a previously added force
    pub fn remove_force(&mut self, force: Vector2) {
        self.force -= force;
    }

    /// Clears the accumulated force
    pub fn reset_force(&mut self) {
        self.force = Vector2::zero();
    }

    /// Returns the impulse accumulated for the next step
    pub fn impulse(&self) -> Vector2 {
        self.impulse
    }

    /// Adds an impulse for the next integration step
    pub fn add_impulse(&mut self, impulse: Vector2) {
        self.impulse += impulse;
    }

    /// Returns the body's color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the body's color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the payload if it is a `T`
    pub fn info<T: Any>(&self) -> Option<&T> {
        self.info.as_ref().and_then(|info| info.downcast_ref::<T>())
    }

    /// Returns the payload mutably if it is a `T`
    pub fn info_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.info.as_mut().and_then(|info| info.downcast_mut::<T>())
    }

    /// Replaces the payload, dropping the previous one
    pub fn set_info<T: Any>(&mut self, info: T) {
        self.info = Some(Box::new(info));
    }

    /// Removes and returns the payload
    pub fn take_info(&mut self) -> Option<Box<dyn Any>> {
        self.info.take()
    }

    /// Returns the body's flags
    pub fn flags(&self) -> BodyFlags {
        self.flags
    }

    /// Marks the body for removal at the next scene sweep
    pub fn remove(&mut self) {
        self.flags.insert(BodyFlags::REMOVED);
    }

    /// Returns whether the body is marked for removal
    pub fn is_removed(&self) -> bool {
        self.flags.contains(BodyFlags::REMOVED)
    }

    /// Returns whether Newtonian gravity skips this body
    pub fn is_gravity_disabled(&self) -> bool {
        self.flags.contains(BodyFlags::GRAVITY_DISABLED)
    }

    /// Sets whether Newtonian gravity skips this body
    pub fn set_gravity_disabled(&mut self, disabled: bool) {
        self.flags.set(BodyFlags::GRAVITY_DISABLED, disabled);
    }

    /// Returns the collaborator's previous-collision flag
    pub fn prev_collision(&self) -> bool {
        self.flags.contains(BodyFlags::PREV_COLLISION)
    }

    /// Sets the collaborator's previous-collision flag
    pub fn set_prev_collision(&mut self, prev: bool) {
        self.flags.set(BodyFlags::PREV_COLLISION, prev);
    }

    /// Advances the body by `dt` seconds.
    ///
    /// The accumulated force produces an acceleration over `dt`; the
    /// accumulated impulse changes the velocity instantly. The body moves by
    /// the average of its old and new velocity, which is exact for a constant
    /// force. Both accumulators are cleared afterwards.
    pub fn integrate(&mut self, dt: f64) {
        let acceleration = self.force / self.mass;
        let old_velocity = self.velocity;
        let new_velocity = old_velocity + acceleration * dt + self.impulse / self.mass;

        let displacement = (old_velocity + new_velocity) * 0.5 * dt;
        self.translate(displacement);
        self.velocity = new_velocity;

        self.force = Vector2::zero();
        self.impulse = Vector2::zero();
    }
}
