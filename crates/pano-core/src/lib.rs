//! Platform-free core of the panorama viewer.
//!
//! Everything here is plain Rust over `glam`: the orbit camera, hotspot
//! registry, screen projection, frustum culling and the sync loop that drives
//! marker elements through the [`MarkerElement`] capability trait. The web
//! frontend owns a [`ViewerSession`] and forwards DOM events into it.

pub mod camera;
pub mod constants;
pub mod frustum;
pub mod hotspot;
pub mod panorama;
pub mod popup;
pub mod projection;
pub mod session;
pub mod state;
pub mod sync;

pub static PANORAMA_WGSL: &str = include_str!("../shaders/panorama.wgsl");

pub use camera::*;
pub use constants::*;
pub use frustum::*;
pub use hotspot::*;
pub use panorama::*;
pub use popup::*;
pub use projection::*;
pub use session::*;
pub use state::*;
pub use sync::*;
