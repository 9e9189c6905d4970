use crate::bodies::Body;
use crate::core::{
    BodyHandle, BodyStorage, EffectHandle, EffectStorage, EventQueue, RemovedBody,
    SimulationConfig,
};
use crate::error::PhysicsError;
use crate::forces::{
    CollisionEffect, CollisionHandler, ConstantForce, DestructiveCollision, Drag, Effect,
    FnEffect, HalfDestructiveCollision, NewtonianGravity, PhysicsCollision, Spring, TickContext,
};
use crate::math::Vector2;
use crate::Result;

use log::{debug, trace};

/// Owns a set of bodies and the effects acting on them, and advances them in
/// lock-step.
///
/// Each [`Scene::tick`] runs in three phases: every effect is applied in
/// registration order, every body is integrated in insertion order, and
/// finally bodies marked as removed are dropped along with every effect bound
/// to them.
pub struct Scene {
    /// All bodies in the scene
    bodies: BodyStorage,

    /// All effects in the scene
    effects: EffectStorage,

    /// Configuration for the scene
    config: SimulationConfig,

    /// Events produced by the last tick
    events: EventQueue,

    /// The total elapsed simulation time
    time: f64,
}

impl Scene {
    /// Creates a new empty scene with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new empty scene with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        let mut events = EventQueue::new();
        events.set_enabled(config.record_events);

        Self {
            bodies: BodyStorage::with_capacity(config.initial_body_capacity),
            effects: EffectStorage::new(),
            config,
            events,
            time: 0.0,
        }
    }

    /// Returns the total simulated time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns a reference to the scene configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the scene configuration.
    ///
    /// Gravity effects already registered keep the distance clamp they were
    /// created with.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.events.set_enabled(config.record_events);
        self.config = config;
    }

    /// Adds a body to the scene and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = self.bodies.add(body);
        debug!("added body {:?}", handle);
        handle
    }

    /// Returns the number of bodies in the scene
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the handle of the `index`-th body in insertion order
    pub fn body_handle(&self, index: usize) -> Option<BodyHandle> {
        self.bodies.handle_at(index)
    }

    /// Returns the `index`-th body in insertion order
    pub fn body_at(&self, index: usize) -> Option<&Body> {
        let handle = self.bodies.handle_at(index)?;
        self.bodies.get(handle)
    }

    /// Returns whether the handle refers to a body still in the scene
    pub fn contains_body(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns an iterator over all bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Returns a mutable iterator over all bodies in insertion order
    pub fn bodies_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> + '_ {
        self.bodies.iter_mut()
    }

    /// Marks a body for removal at the end of the next tick
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<()> {
        self.bodies.get_body_mut(handle)?.remove();
        Ok(())
    }

    /// Removes a body right away, together with every effect bound to it
    pub fn remove_body_immediate(&mut self, handle: BodyHandle) -> Result<Body> {
        self.bodies.get_body(handle)?;
        let effects_removed = self.remove_effects_for_body(handle);
        debug!("removed body {:?} immediately ({} effects dropped)", handle, effects_removed);

        self.bodies
            .remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Adds an effect to the scene.
    ///
    /// Every body the effect is bound to must be in the scene.
    pub fn add_effect(&mut self, effect: Box<dyn Effect>) -> Result<EffectHandle> {
        for &body in effect.bodies() {
            self.bodies.get_body(body)?;
        }

        let effect_type = effect.effect_type();
        let handle = self.effects.add(effect);
        debug!("added {} effect {:?}", effect_type, handle);
        Ok(handle)
    }

    /// Adds a closure effect bound to `bodies`
    pub fn add_effect_fn<F>(&mut self, bodies: Vec<BodyHandle>, func: F) -> Result<EffectHandle>
    where
        F: FnMut(&mut TickContext<'_>) + 'static,
    {
        self.add_effect(Box::new(FnEffect::new(bodies, func)))
    }

    /// Removes an effect from the scene
    pub fn remove_effect(&mut self, handle: EffectHandle) -> Result<Box<dyn Effect>> {
        self.effects.get_effect(handle)?;
        self.effects
            .remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Effect with handle {:?} not found", handle)))
    }

    /// Returns the number of effects in the scene
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Returns whether the handle refers to an effect still in the scene
    pub fn contains_effect(&self, handle: EffectHandle) -> bool {
        self.effects.contains(handle)
    }

    /// Gets a reference to an effect by its handle
    pub fn get_effect(&self, handle: EffectHandle) -> Result<&dyn Effect> {
        self.effects.get_effect(handle).map(|effect| &**effect)
    }

    /// Gets an effect downcast to its concrete type
    pub fn get_effect_as<T: Effect>(&self, handle: EffectHandle) -> Result<&T> {
        self.get_effect(handle)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| PhysicsError::InvalidParameter(format!(
                "effect {:?} is not a {}",
                handle,
                std::any::type_name::<T>()
            )))
    }

    /// Gets an effect mutably, downcast to its concrete type
    pub fn get_effect_as_mut<T: Effect>(&mut self, handle: EffectHandle) -> Result<&mut T> {
        self.effects
            .get_effect_mut(handle)?
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| PhysicsError::InvalidParameter(format!(
                "effect {:?} is not a {}",
                handle,
                std::any::type_name::<T>()
            )))
    }

    /// Adds Newtonian gravity between two bodies, clamped as configured
    pub fn create_newtonian_gravity(&mut self, g: f64, body_a: BodyHandle, body_b: BodyHandle) -> Result<EffectHandle> {
        let gravity = NewtonianGravity::new(g, body_a, body_b).with_distance_clamp(
            self.config.gravity_min_distance,
            self.config.gravity_reset_distance,
        );
        self.add_effect(Box::new(gravity))
    }

    /// Adds a spring of stiffness `k` between two bodies
    pub fn create_spring(&mut self, k: f64, body_a: BodyHandle, body_b: BodyHandle) -> Result<EffectHandle> {
        self.add_effect(Box::new(Spring::new(k, body_a, body_b)))
    }

    /// Adds linear drag to a body
    pub fn create_drag(&mut self, gamma: f64, body: BodyHandle) -> Result<EffectHandle> {
        self.add_effect(Box::new(Drag::new(gamma, body)))
    }

    /// Adds a constant force to a body
    pub fn create_constant_force(&mut self, force: Vector2, body: BodyHandle) -> Result<EffectHandle> {
        self.add_effect(Box::new(ConstantForce::new(force, body)))
    }

    /// Runs `handler` once each time the two bodies begin overlapping
    pub fn create_collision(
        &mut self,
        body_a: BodyHandle,
        body_b: BodyHandle,
        handler: impl CollisionHandler,
    ) -> Result<EffectHandle> {
        if body_a == body_b {
            return Err(PhysicsError::SameBody(format!("{:?}", body_a)));
        }
        self.add_effect(Box::new(CollisionEffect::new(body_a, body_b, handler)))
    }

    /// Removes both bodies when they collide
    pub fn create_destructive_collision(&mut self, body_a: BodyHandle, body_b: BodyHandle) -> Result<EffectHandle> {
        self.create_collision(body_a, body_b, DestructiveCollision)
    }

    /// Removes `body_a` and bounces `body_b` when they collide
    pub fn create_half_destructive_collision(
        &mut self,
        elasticity: f64,
        body_a: BodyHandle,
        body_b: BodyHandle,
    ) -> Result<EffectHandle> {
        self.create_collision(body_a, body_b, HalfDestructiveCollision::new(elasticity))
    }

    /// Bounces the two bodies off each other when they collide
    pub fn create_physics_collision(
        &mut self,
        elasticity: f64,
        body_a: BodyHandle,
        body_b: BodyHandle,
    ) -> Result<EffectHandle> {
        self.create_collision(body_a, body_b, PhysicsCollision::new(elasticity))
    }

    /// Bounces the two bodies off each other with the configured
    /// [`SimulationConfig::default_elasticity`]
    pub fn create_default_physics_collision(
        &mut self,
        body_a: BodyHandle,
        body_b: BodyHandle,
    ) -> Result<EffectHandle> {
        self.create_physics_collision(self.config.default_elasticity, body_a, body_b)
    }

    /// Advances the scene by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        self.events.clear();

        // Effects all observe the pre-integration state
        {
            let mut ctx = TickContext::new(&mut self.bodies, &mut self.events);
            for (_, effect) in self.effects.iter_mut() {
                effect.apply(&mut ctx);
            }
        }

        for (_, body) in self.bodies.iter_mut() {
            body.integrate(dt);
        }

        let swept = self.sweep_removed();
        self.time += dt;

        trace!(
            "tick dt={} bodies={} effects={} swept={}",
            dt,
            self.bodies.len(),
            self.effects.len(),
            swept
        );
    }

    /// Drops every body marked as removed, and the effects bound to it.
    /// Returns the number of bodies dropped.
    fn sweep_removed(&mut self) -> usize {
        let removed: Vec<BodyHandle> = self.bodies
            .iter()
            .filter(|(_, body)| body.is_removed())
            .map(|(handle, _)| handle)
            .collect();

        for &handle in &removed {
            let effects_removed = self.remove_effects_for_body(handle);
            if let Some(body) = self.bodies.remove(handle) {
                debug!("swept body {:?} ({} effects dropped)", handle, effects_removed);
                self.events.add_removed_body(RemovedBody {
                    handle,
                    body,
                    effects_removed,
                });
            }
        }

        removed.len()
    }

    /// Removes every effect bound to `body`, returning how many were removed
    fn remove_effects_for_body(&mut self, body: BodyHandle) -> usize {
        let bound: Vec<EffectHandle> = self.effects
            .iter()
            .filter(|(_, effect)| effect.involves_body(body))
            .map(|(handle, _)| handle)
            .collect();

        for &handle in &bound {
            self.effects.remove(handle);
        }
        bound.len()
    }

    /// Returns the events produced by the last tick
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns the events produced by the last tick, mutably (for draining)
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Removes every body and effect
    pub fn clear(&mut self) {
        self.effects.clear();
        self.bodies.clear();
        self.events.clear();
        self.time = 0.0;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
