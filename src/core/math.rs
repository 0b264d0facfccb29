// Math utilities and helper functions

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp both components of a vector into the box spanned by `min` and `max`
pub fn clamp_vec2(value: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(
        clamp(value.x, min.x, max.x),
        clamp(value.y, min.y, max.y),
    )
}
