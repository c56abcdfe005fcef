use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Separable Gaussian blur with replicated borders.
///
/// A non-positive `sigma` returns a copy.
pub fn gaussian_blur(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    let (h, w) = data.dim();
    if sigma.is_nan() || sigma <= 0.0 || h == 0 || w == 0 {
        return data.clone();
    }
    let kernel = gaussian_kernel(sigma);
    // Rows, then columns via the transposed array.
    let row_pass = convolve_rows(data, &kernel);
    convolve_rows(&row_pass.reversed_axes(), &kernel).reversed_axes()
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let two_s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..=2 * radius)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / two_s2).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;
    let last = w as isize - 1;

    let blur_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                kernel
                    .iter()
                    .enumerate()
                    .map(|(ki, &kv)| {
                        let src = (col as isize + ki as isize - radius).clamp(0, last) as usize;
                        data[[row, src]] * kv
                    })
                    .sum()
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(blur_row).collect()
    } else {
        (0..h).map(blur_row).collect()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
