/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect whether `T` lies within `Self`, boundary included.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}
