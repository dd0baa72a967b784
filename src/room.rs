use glam::IVec2;

/// Rectangular room the robot moves in.
///
/// Valid cells are `[0, width) x [0, depth)`. A `RoomSize` is not checked on construction;
/// [`RoomSize::is_valid`] (and the validator) reject non-positive dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomSize {
    pub width: i32,
    pub depth: i32,
}

impl RoomSize {
    pub fn new(width: i32, depth: i32) -> Self {
        Self { width, depth }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.depth > 0
    }

    /// Whether `position` lies inside the room.
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.depth
    }
}
