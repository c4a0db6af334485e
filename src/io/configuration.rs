//! Pipeline constants and runtime configuration defaults

// Defaults for configurable parameters
/// Rule written into generated documents
pub const DEFAULT_RULE: &str = "B3/S23";
/// Grayscale value (0-255) a pixel must exceed to place a pattern
pub const DEFAULT_THRESHOLD: u8 = 128;
/// Default repeat of the base pattern along each axis before stencil tiling
pub const DEFAULT_REPEAT: usize = 1;

// Input discovery
/// Image file extensions picked up when the target is a directory
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

// Output settings
/// Extension of generated pattern files
pub const OUTPUT_EXTENSION: &str = "rle";

// Console preview limits
/// Stencil rows echoed after loading an image
pub const PREVIEW_ROWS: usize = 5;
/// Leading characters of the generated document echoed after composition
pub const PREVIEW_CHARS: usize = 300;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
