use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{GRAY_LEVELS, PARALLEL_PIXEL_THRESHOLD};

/// Median filter with a square `ksize` x `ksize` window.
///
/// Pixels are quantised to 256 grey levels and each row is processed with a
/// sliding histogram, so the cost per pixel is independent of `ksize`.
/// Borders replicate the edge pixels. `ksize` must be odd; 1 returns a copy.
pub fn median_blur(data: &Array2<f32>, ksize: usize) -> Array2<f32> {
    let (h, w) = data.dim();
    if ksize <= 1 || h == 0 || w == 0 {
        return data.clone();
    }

    let levels = quantize(data);
    let radius = ksize / 2;

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| median_row(&levels, row, radius))
            .collect()
    } else {
        (0..h).map(|row| median_row(&levels, row, radius)).collect()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}

fn quantize(data: &Array2<f32>) -> Array2<u8> {
    let max_level = (GRAY_LEVELS - 1) as f32;
    data.mapv(|v| (v.clamp(0.0, 1.0) * max_level).round() as u8)
}

fn median_row(levels: &Array2<u8>, row: usize, radius: usize) -> Vec<f32> {
    let (h, w) = levels.dim();
    let side = 2 * radius + 1;
    let rank = (side * side) / 2;
    let max_level = (GRAY_LEVELS - 1) as f32;

    let clamp_row = |r: isize| r.clamp(0, h as isize - 1) as usize;
    let clamp_col = |c: isize| c.clamp(0, w as isize - 1) as usize;
    let window_rows: Vec<usize> = (-(radius as isize)..=radius as isize)
        .map(|dr| clamp_row(row as isize + dr))
        .collect();

    let mut hist = [0u32; GRAY_LEVELS];
    for dc in -(radius as isize)..=radius as isize {
        let col = clamp_col(dc);
        for &r in &window_rows {
            hist[levels[[r, col]] as usize] += 1;
        }
    }

    let mut out = Vec::with_capacity(w);
    out.push(hist_rank(&hist, rank) as f32 / max_level);

    for col in 1..w {
        let leaving = clamp_col(col as isize - radius as isize - 1);
        let entering = clamp_col(col as isize + radius as isize);
        for &r in &window_rows {
            hist[levels[[r, leaving]] as usize] -= 1;
            hist[levels[[r, entering]] as usize] += 1;
        }
        out.push(hist_rank(&hist, rank) as f32 / max_level);
    }

    out
}

/// Smallest level whose cumulative count exceeds `rank`.
fn hist_rank(hist: &[u32; GRAY_LEVELS], rank: usize) -> usize {
    let mut seen = 0usize;
    for (level, &count) in hist.iter().enumerate() {
        seen += count as usize;
        if seen > rank {
            return level;
        }
    }
    GRAY_LEVELS - 1
}
