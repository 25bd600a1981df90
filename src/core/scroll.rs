use super::constants::{
    BACK_TO_TOP_OFFSET_PX, GRADIENT_ANGLE_DEG, HEADER_SCROLLED_OFFSET_PX, HUE_PER_PX,
    HUE_STEP_DEG, SATURATION_BASE, SATURATION_FREQ_PER_PX, SATURATION_SWING, STOP_LIGHTNESS,
};

/// Everything the scroll handler writes, derived from the vertical offset alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub back_to_top_visible: bool,
    pub header_scrolled: bool,
    pub backdrop: Backdrop,
}

impl ScrollFrame {
    pub fn at(offset: f64) -> Self {
        Self {
            offset,
            back_to_top_visible: offset > BACK_TO_TOP_OFFSET_PX,
            header_scrolled: offset > HEADER_SCROLLED_OFFSET_PX,
            backdrop: Backdrop::at(offset),
        }
    }

    pub fn back_to_top_display(&self) -> &'static str {
        if self.back_to_top_visible {
            "block"
        } else {
            "none"
        }
    }
}

/// Hue-rotating three-stop body gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub hue: f64,
    pub saturation: f64,
}

impl Backdrop {
    pub fn at(offset: f64) -> Self {
        Self {
            hue: wrap_hue(offset * HUE_PER_PX),
            saturation: SATURATION_BASE + (offset * SATURATION_FREQ_PER_PX).sin() * SATURATION_SWING,
        }
    }

    /// `(hue, lightness)` for each stop.
    pub fn stops(&self) -> [(f64, f64); 3] {
        let mut out = [(0.0, 0.0); 3];
        for (i, stop) in out.iter_mut().enumerate() {
            *stop = (
                wrap_hue(self.hue + HUE_STEP_DEG * i as f64),
                STOP_LIGHTNESS[i],
            );
        }
        out
    }

    pub fn css(&self) -> String {
        let stops = self
            .stops()
            .iter()
            .map(|(h, l)| format!("hsl({h}, {s}%, {l}%)", s = self.saturation))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({GRADIENT_ANGLE_DEG}deg, {stops})")
    }
}

#[inline]
fn wrap_hue(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}
