/// What stands behind a door.
///
/// A freshly built layout hides exactly one `Car`; every other door hides a `Goat`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DoorContent {
    /// The losing prize.
    Goat = 1,
    /// The winning prize.
    Car = 2,
}

impl DoorContent {
    /// Returns `true` if the door hides the car.
    pub const fn is_car(self) -> bool {
        matches!(self, DoorContent::Car)
    }
}
