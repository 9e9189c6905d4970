mod body;
mod color;

pub use self::body::Body;
pub use self::color::Color;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// State bits carried by every body
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct BodyFlags: u32 {
            /// Body is marked for removal at the next scene sweep
            const REMOVED = 0x01;

            /// Body does not receive Newtonian gravity
            const GRAVITY_DISABLED = 0x02;

            /// Collaborator slot: the body was colliding on the previous tick
            const PREV_COLLISION = 0x04;
        }
    }
}
