// Shared camera and scene tuning constants used by the core and the web frontend.

// Scene layout
pub const SPHERE_RADIUS: f32 = 500.0; // radius of the panorama sphere the camera looks at

// Elevation limits (degrees); keeps the look-at vector away from the poles
pub const LAT_MIN_DEG: f32 = -85.0;
pub const LAT_MAX_DEG: f32 = 85.0;

// Vertical field of view (degrees)
pub const FOV_MIN_DEG: f32 = 10.0;
pub const FOV_MAX_DEG: f32 = 75.0;
pub const DEFAULT_FOV_DEG: f32 = 75.0;

// Drag sensitivity: degrees of rotation per pixel of pointer travel
pub const SPEED_MIN: f32 = 0.01;
pub const SPEED_MAX: f32 = 0.1;
pub const DEFAULT_SPEED: f32 = 0.1;

// Wheel zoom rates, applied per unit of wheel deltaY
pub const FOV_PER_WHEEL_UNIT: f32 = 0.05;
pub const SPEED_PER_WHEEL_UNIT: f32 = 0.0001;

// Clip planes; far must enclose the sphere
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 1100.0;
