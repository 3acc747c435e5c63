// DOM wiring and caption timing

pub const CANVAS_ID: &str = "scene-canvas";

pub const CAPTION_TITLE_ID: &str = "caption-title";
pub const CAPTION_SUBTITLE_ID: &str = "caption-subtitle";

// Captions fade in after the field has settled on screen
pub const CAPTION_TITLE_DELAY_MS: i32 = 4000;
pub const CAPTION_SUBTITLE_DELAY_MS: i32 = 6000;

// Canvas attributes forming the configuration surface
pub const COUNT_ATTR: &str = "data-count";
pub const DEPTH_ATTR: &str = "data-depth";
