pub mod scene;
pub mod config;
pub mod storage;
pub mod events;

pub use self::scene::Scene;
pub use self::config::SimulationConfig;
pub use self::storage::{Handle, Storage};
pub use self::events::{EventQueue, CollisionEvent, CollisionEventType, RemovedBody};

use crate::bodies::Body;
use crate::forces::Effect;

/// A unique identifier for a body in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl Handle for BodyHandle {
    fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn generation(&self) -> u32 {
        self.generation
    }
}

/// A unique identifier for an effect in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectHandle {
    index: u32,
    generation: u32,
}

impl Handle for EffectHandle {
    fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn generation(&self) -> u32 {
        self.generation
    }
}

/// Storage for the bodies of a scene
pub type BodyStorage = Storage<BodyHandle, Body>;

/// Storage for the effects of a scene
pub type EffectStorage = Storage<EffectHandle, Box<dyn Effect>>;
