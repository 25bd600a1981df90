use super::constants::{
    GRAVITY_DIVISOR, HOVER_SCALE, SHINE_CORE_ALPHA, SHINE_FADE_PCT, TILT_DIVISOR,
    TILT_PERSPECTIVE_PX,
};
use glam::Vec2;

pub const REST_TRANSFORM: &str = "translateZ(0)";

/// Card bounding box in viewport px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Small pull toward the pointer.
    pub gravity: Vec2,
}

impl Tilt {
    /// Tilt for a pointer at `pointer` (viewport px) over `rect`.
    pub fn toward(rect: &CardRect, pointer: Vec2) -> Self {
        let center = rect.center();
        let d = pointer - center;
        Self {
            // Pointer above center tips the top edge away.
            rotate_x_deg: (center.y - pointer.y) / TILT_DIVISOR,
            rotate_y_deg: d.x / TILT_DIVISOR,
            gravity: d / GRAVITY_DIVISOR,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "{REST_TRANSFORM} perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) translate3d({}px, {}px, 0)",
            self.rotate_x_deg, self.rotate_y_deg, self.gravity.x, self.gravity.y
        )
    }
}

pub fn hover_css() -> String {
    format!("{REST_TRANSFORM} scale({HOVER_SCALE})")
}

/// Pointer position inside `rect` as percentages of its size. Degenerate
/// boxes report the center.
pub fn shine_origin(rect: &CardRect, pointer: Vec2) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::splat(50.0);
    }
    (pointer - rect.origin()) / rect.size() * 100.0
}

pub fn shine_css(origin: Vec2) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, rgba(255,255,255,{SHINE_CORE_ALPHA}) 0%, rgba(255,255,255,0) {SHINE_FADE_PCT}%)",
        origin.x, origin.y
    )
}
