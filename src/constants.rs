pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: f32 = 1.0;     // Slide offset transition (seconds)
pub const REVEAL_DURATION: f32 = 0.6;         // Fade-in on first view (seconds)
pub const SLIDE_FILL: f32 = 0.85;             // Largest share of the screen an image may cover

pub const DEFAULT_HOVER_OPACITY: f32 = 0.5;   // Opacity of sibling controls while one is hovered
pub const DEFAULT_LAZY_MARGIN: f32 = 0.2;     // Viewport widening for lazy loading (fraction of width)

pub const BUTTON_SIZE: f32 = 56.0;            // Previous / next button edge
pub const BUTTON_MARGIN: f32 = 24.0;          // Gap between buttons and the screen edge
pub const DOT_RADIUS: f32 = 7.0;
pub const DOT_SPACING: f32 = 28.0;            // Distance between dot centers
pub const DOT_STRIP_OFFSET: f32 = 40.0;       // Dot strip distance from the bottom edge
pub const CAPTION_FONT_SIZE: i32 = 20;
