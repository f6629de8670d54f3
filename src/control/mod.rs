pub mod speed_estimator;
pub mod speed_control;
pub mod position_control;
pub mod open_loop;
pub mod drive;

pub use speed_estimator::*;
pub use speed_control::*;
pub use position_control::*;
pub use open_loop::*;
pub use drive::*;

/// Symmetric saturation. Unlike `f32::clamp` it never panics. A NaN value
/// saturates to zero, a NaN bound lets the value through.
pub(crate) fn limit(value: f32, bound: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }

    if value > bound {
        return bound;
    }

    if value < -bound {
        return -bound;
    }

    return value;
}
