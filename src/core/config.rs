#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for a scene
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Centroid distance below which Newtonian gravity stops trusting the
    /// real separation
    pub gravity_min_distance: f64,

    /// Separation used by Newtonian gravity in place of distances below
    /// `gravity_min_distance`
    pub gravity_reset_distance: f64,

    /// Coefficient of restitution for `Scene::create_default_physics_collision`
    pub default_elasticity: f64,

    /// Number of bodies the scene reserves room for up front
    pub initial_body_capacity: usize,

    /// Whether the scene records collision and removal events
    pub record_events: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_min_distance: 5.0,
            gravity_reset_distance: 30.0,
            default_elasticity: 1.0,
            initial_body_capacity: 30,
            record_events: true,
        }
    }
}
