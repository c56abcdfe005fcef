/// Millimeters in one inch.
pub const MM_PER_INCH: f32 = 25.4;

/// Logical DPI assumed when the platform does not report one.
pub const DEFAULT_LOGICAL_DPI: f32 = 96.0;

/// Smallest diameter the sizing slider reaches (mm).
pub const SLIDER_MIN_MM: f32 = 10.0;

/// Largest diameter the sizing slider reaches: 4.00 in.
pub const SLIDER_MAX_MM: f32 = 101.6;

/// Slider resolution. One tick is a tenth of a millimeter.
pub const SLIDER_TICKS_PER_MM: f32 = 10.0;

/// Diameter shown when the sizing screen first opens (inches).
pub const DEFAULT_DIAMETER_IN: f32 = 1.5;

/// Space kept clear on every side of the reference circle (px).
pub const DEFAULT_CANVAS_MARGIN: f32 = 30.0;

/// Outline width of the reference circle (px).
pub const CIRCLE_PEN_WIDTH: f32 = 3.0;

/// Median blur kernel applied before circle detection. Must be odd.
pub const DEFAULT_MEDIAN_KSIZE: usize = 21;

/// Inverse ratio of accumulator resolution to image resolution.
pub const DEFAULT_HOUGH_DP: f32 = 1.0;

/// Minimum distance between detected circle centers (px).
pub const DEFAULT_HOUGH_MIN_DIST: f32 = 100.0;

/// Upper Canny threshold. The lower one is half of it.
pub const DEFAULT_HOUGH_PARAM1: f32 = 300.0;

/// Accumulator votes needed for a center to count as a circle.
pub const DEFAULT_HOUGH_PARAM2: f32 = 15.0;

/// Smallest radius searched (px).
pub const DEFAULT_HOUGH_MIN_RADIUS: u32 = 250;

/// Largest radius searched (px). Zero means "up to the image size".
pub const DEFAULT_HOUGH_MAX_RADIUS: u32 = 400;

/// Gaussian sigma (accumulator cells) used to smooth Hough votes before
/// peak picking.
pub const HOUGH_ACCUM_SIGMA: f32 = 2.0;

/// An edge pixel supports a center only if its gradient is within ~25° of
/// the line to that center.
pub const HOUGH_ALIGN_COS: f64 = 0.9;

/// Circle fit iterations run on each accumulator peak.
pub const HOUGH_REFINE_PASSES: usize = 3;

/// Detected centers must lie within this many pixels of the image center
/// on each axis.
pub const DEFAULT_CENTER_TOLERANCE: f32 = 70.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of grey levels used by the histogram median filter.
pub const GRAY_LEVELS: usize = 256;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Overlay colour of the center tolerance ring.
pub const OVERLAY_TOLERANCE_COLOR: [u8; 3] = [200, 0, 0];

/// Overlay colour of the min/max radius bounds.
pub const OVERLAY_BOUNDS_COLOR: [u8; 3] = [200, 200, 0];

/// Overlay colour of accepted circles and their centers.
pub const OVERLAY_CIRCLE_COLOR: [u8; 3] = [0, 0, 255];

pub const OVERLAY_TOLERANCE_THICKNESS: u32 = 3;
pub const OVERLAY_BOUNDS_THICKNESS: u32 = 10;
pub const OVERLAY_CIRCLE_THICKNESS: u32 = 10;
pub const OVERLAY_CENTER_THICKNESS: u32 = 15;
