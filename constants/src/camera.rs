/// Initial camera eye position, chosen so a default-sized terrain fills the view
pub const CAMERA_START_EYE: [f32; 3] = [1000.0, 240.0, 0.0];

/// Yaw sensitivity for orbit drag (radians per pixel of mouse motion)
pub const ORBIT_YAW_SENSITIVITY: f32 = 0.005;

/// Pitch sensitivity for orbit drag (radians per pixel of mouse motion)
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.004;

/// Pitch is clamped short of the poles to keep the orbit stable
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

/// Fraction of the current orbit distance travelled per scroll line
pub const ORBIT_ZOOM_STEP: f32 = 0.1;

/// Closest the camera may dolly towards the focus point (world units)
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;

/// Furthest the camera may dolly from the focus point (world units)
pub const ORBIT_MAX_DISTANCE: f32 = 8000.0;

/// Per-second interpolation rate for camera transform smoothing
pub const CAMERA_LERP_SPEED: f32 = 12.0;
