use ndarray::Array2;

/// tan(22.5°) and tan(67.5°), the bucket limits for gradient direction.
const TAN_22_5: f32 = 0.414_213_56;
const TAN_67_5: f32 = 2.414_213_6;

/// Horizontal and vertical Sobel responses for an image.
pub struct Gradients {
    pub dx: Array2<f32>,
    pub dy: Array2<f32>,
}

impl Gradients {
    /// L1 magnitude `|dx| + |dy|` at a pixel.
    pub fn magnitude(&self, row: usize, col: usize) -> f32 {
        self.dx[[row, col]].abs() + self.dy[[row, col]].abs()
    }
}

/// Thin edges plus the gradients they were computed from.
pub struct EdgeMap {
    pub gradients: Gradients,
    /// Edge pixels as `(row, col)`, in raster order.
    pub points: Vec<(usize, usize)>,
}

/// 3x3 Sobel operator with replicated borders.
///
/// Input is expected in [0.0, 1.0] and is scaled to 8-bit range first, so
/// thresholds can be given on the familiar 0..255 scale.
pub fn sobel(data: &Array2<f32>) -> Gradients {
    let (h, w) = data.dim();
    let mut dx = Array2::<f32>::zeros((h, w));
    let mut dy = Array2::<f32>::zeros((h, w));
    if h == 0 || w == 0 {
        return Gradients { dx, dy };
    }

    let px = |r: isize, c: isize| -> f32 {
        let r = r.clamp(0, h as isize - 1) as usize;
        let c = c.clamp(0, w as isize - 1) as usize;
        data[[r, c]] * 255.0
    };

    for row in 0..h {
        for col in 0..w {
            let (r, c) = (row as isize, col as isize);
            let tl = px(r - 1, c - 1);
            let tc = px(r - 1, c);
            let tr = px(r - 1, c + 1);
            let ml = px(r, c - 1);
            let mr = px(r, c + 1);
            let bl = px(r + 1, c - 1);
            let bc = px(r + 1, c);
            let br = px(r + 1, c + 1);

            dx[[row, col]] = (tr + 2.0 * mr + br) - (tl + 2.0 * ml + bl);
            dy[[row, col]] = (bl + 2.0 * bc + br) - (tl + 2.0 * tc + tr);
        }
    }

    Gradients { dx, dy }
}

/// Canny edge detection: Sobel, non-maximum suppression, then hysteresis
/// between `low` and `high` on the L1 gradient magnitude.
pub fn canny(data: &Array2<f32>, low: f32, high: f32) -> EdgeMap {
    let gradients = sobel(data);
    let (h, w) = data.dim();

    // 0 = suppressed, 1 = weak candidate, 2 = strong.
    let mut state = Array2::<u8>::zeros((h, w));
    let mut stack = Vec::new();

    if h >= 3 && w >= 3 {
        for row in 1..h - 1 {
            for col in 1..w - 1 {
                let m = gradients.magnitude(row, col);
                if m <= low {
                    continue;
                }
                let (prev, next) = direction_neighbors(&gradients, row, col);
                let m_prev = gradients.magnitude(prev.0, prev.1);
                let m_next = gradients.magnitude(next.0, next.1);
                if m > m_prev && m >= m_next {
                    if m > high {
                        state[[row, col]] = 2;
                        stack.push((row, col));
                    } else {
                        state[[row, col]] = 1;
                    }
                }
            }
        }
    }

    // Hysteresis: grow strong edges into connected weak candidates.
    while let Some((row, col)) = stack.pop() {
        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if state[[nr, nc]] == 1 {
                    state[[nr, nc]] = 2;
                    stack.push((nr, nc));
                }
            }
        }
    }

    let points = state
        .indexed_iter()
        .filter(|(_, s)| **s == 2)
        .map(|(idx, _)| idx)
        .collect();

    EdgeMap { gradients, points }
}

/// Neighbors on either side of a pixel along its quantised gradient direction.
fn direction_neighbors(
    g: &Gradients,
    row: usize,
    col: usize,
) -> ((usize, usize), (usize, usize)) {
    let gx = g.dx[[row, col]];
    let gy = g.dy[[row, col]];
    let ax = gx.abs();
    let ay = gy.abs();

    if ay < ax * TAN_22_5 {
        ((row, col - 1), (row, col + 1))
    } else if ay > ax * TAN_67_5 {
        ((row - 1, col), (row + 1, col))
    } else if (gx > 0.0) == (gy > 0.0) {
        ((row - 1, col - 1), (row + 1, col + 1))
    } else {
        ((row - 1, col + 1), (row + 1, col - 1))
    }
}
