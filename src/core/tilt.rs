use super::constants::{TILT_HOVER_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};
use glam::Vec2;

pub const NEUTRAL_TILT_TRANSFORM: &str =
    "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";
pub const TILT_TRANSITION: &str = "transform 0.1s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

/// Rotation for a pointer at `local` (relative to the card's top-left) over a
/// card of `size`. The card edges map to ±`TILT_MAX_DEG`.
pub fn tilt_for_pointer(local: Vec2, size: Vec2) -> Tilt {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Tilt::default();
    }
    let center = size / 2.0;
    let offset = (local - center) / center;
    let max = TILT_MAX_DEG as f32;
    Tilt {
        rotate_x_deg: offset.y * -max,
        rotate_y_deg: offset.x * max,
    }
}

impl Tilt {
    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            TILT_PERSPECTIVE_PX,
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = TILT_HOVER_SCALE
        )
    }
}
