use ndarray::Array2;

/// A single grayscale image.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Geometric center of the image, using integer division.
    pub fn center(&self) -> ImageCenter {
        ImageCenter::of(self.width() as u32, self.height() as u32)
    }
}

/// Pixel coordinates of an image's geometric center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCenter {
    pub x: u32,
    pub y: u32,
}

impl ImageCenter {
    pub fn of(width: u32, height: u32) -> Self {
        Self {
            x: width / 2,
            y: height / 2,
        }
    }
}

/// A circle reported by the detector, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleCandidate {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl CircleCandidate {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Snap all three components to the nearest whole pixel.
    pub fn rounded(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            radius: self.radius.round(),
        }
    }
}

impl std::fmt::Display for CircleCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.radius)
    }
}
