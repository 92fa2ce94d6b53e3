/// A two component vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub z: T,
}

impl<T> Vector2<T> {
    #[must_use]
    pub const fn new(x: T, z: T) -> Self {
        Self { x, z }
    }
}
