use crate::bodies::Body;
use crate::core::BodyHandle;
use crate::math::Vector2;
use std::collections::VecDeque;

/// Types of collision events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEventType {
    /// A collision effect's bodies started overlapping and its handler fired
    Begin,

    /// A collision effect's bodies stopped overlapping
    End,
}

/// A collision event between two bodies
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    /// The type of collision event
    pub event_type: CollisionEventType,

    /// The first body in the collision
    pub body_a: BodyHandle,

    /// The second body in the collision
    pub body_b: BodyHandle,

    /// The collision axis, from `body_a` towards `body_b` (zero for `End`)
    pub axis: Vector2,
}

/// A body dropped by the scene's removal sweep
#[derive(Debug)]
pub struct RemovedBody {
    /// The handle the body had in the scene (no longer valid)
    pub handle: BodyHandle,

    /// The body itself, so drivers can inspect its payload before it is dropped
    pub body: Body,

    /// How many effects were dropped along with it
    pub effects_removed: usize,
}

/// A queue of events produced by one scene tick
#[derive(Debug)]
pub struct EventQueue {
    /// Collision events
    collision_events: VecDeque<CollisionEvent>,

    /// Bodies swept during the tick
    removed_bodies: VecDeque<RemovedBody>,

    /// Whether events are recorded at all
    enabled: bool,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
            removed_bodies: VecDeque::new(),
            enabled: true,
        }
    }

    /// Returns whether the queue records events
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the queue records events
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        if self.enabled {
            self.collision_events.push_back(event);
        }
    }

    /// Adds a swept body to the queue
    pub fn add_removed_body(&mut self, removed: RemovedBody) {
        if self.enabled {
            self.removed_bodies.push_back(removed);
        }
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Gets the next swept body from the queue
    pub fn next_removed_body(&mut self) -> Option<RemovedBody> {
        self.removed_bodies.pop_front()
    }

    /// Returns the pending collision events
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Returns the pending swept bodies
    pub fn removed_bodies(&self) -> impl Iterator<Item = &RemovedBody> {
        self.removed_bodies.iter()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        !self.collision_events.is_empty()
    }

    /// Returns whether there are any swept bodies in the queue
    pub fn has_removed_bodies(&self) -> bool {
        !self.removed_bodies.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty() && self.removed_bodies.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
        self.removed_bodies.clear();
    }

    /// Gets all collision events of a specific type
    pub fn get_collision_events_of_type(&self, event_type: CollisionEventType) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
