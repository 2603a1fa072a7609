/// DOM names and browser-side tuning for the viewer.
///
/// Camera and projection constants live in `pano_core::constants`; this
/// module only holds what the web layer needs to find and drive elements.
// Elements
pub const CANVAS_ID: &str = "app-canvas";
pub const CONTAINER_ID: &str = "container";
pub const HOTSPOT_SELECTOR: &str = ".hotspot";

// Attributes
pub const POSITION_ATTR: &str = "data-position";
pub const PANO_SRC_ATTR: &str = "data-pano-src";
pub const DEFAULT_PANO_SRC: &str = "pano.jpg";

// Class toggled on markers and popups
pub const HIDDEN_CLASS: &str = "hidden";

// Child index holding popup content inside a hotspot element
pub const POPUP_CHILD_INDEX: u32 = 2;

// Body opacity while a file is dragged over the page
pub const DRAG_OVER_OPACITY: &str = "0.5";

// Largest panorama edge uploaded to the GPU (WebGPU default limit)
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;
