mod collision_info;
mod sat;

pub use self::collision_info::CollisionInfo;
pub use self::sat::{edge_normal, find_collision, interval_overlap, project};
