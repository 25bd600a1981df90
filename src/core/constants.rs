// Shared tuning constants for the page effects.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SIZE_MIN_PX: f64 = 1.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 3.0; // sizes fall in [1, 4)
pub const PARTICLE_DELAY_MAX_SEC: f64 = 15.0;

// Cursor trail
pub const TRAIL_CAPACITY: usize = 15;
pub const TRAIL_LIFETIME_MS: u32 = 1000;

// Scroll thresholds (px of vertical offset)
pub const BACK_TO_TOP_OFFSET_PX: f64 = 300.0;
pub const HEADER_SCROLLED_OFFSET_PX: f64 = 50.0;

// Backdrop gradient
pub const HUE_PER_PX: f64 = 0.1;
pub const HUE_STEP_DEG: f64 = 60.0; // spacing between the three stops
pub const SATURATION_BASE: f64 = 50.0;
pub const SATURATION_SWING: f64 = 20.0;
pub const SATURATION_FREQ_PER_PX: f64 = 0.01;
pub const STOP_LIGHTNESS: [f64; 3] = [10.0, 15.0, 20.0];
pub const GRADIENT_ANGLE_DEG: u32 = 135;

// Entrance animations
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.75;
pub const SKILL_STAGGER_MS: u32 = 100;
pub const PROJECT_STAGGER_MS: u32 = 150;

// Card tilt
pub const TILT_DIVISOR: f32 = 30.0; // smaller divisor -> steeper tilt
pub const GRAVITY_DIVISOR: f32 = 100.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const HOVER_SCALE: f32 = 1.02;
pub const SHINE_OPACITY_ACTIVE: f32 = 0.7;
pub const SHINE_OPACITY_IDLE: f32 = 0.0;
pub const SHINE_CORE_ALPHA: f32 = 0.4;
pub const SHINE_FADE_PCT: u32 = 70;

// Notifications
pub const NOTICE_LIFETIME_MS: u32 = 5000;
