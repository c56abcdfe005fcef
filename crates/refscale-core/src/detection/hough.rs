use std::f32::consts::PI;

use ndarray::Array2;
use tracing::debug;

use crate::consts::{HOUGH_ACCUM_SIGMA, HOUGH_ALIGN_COS, HOUGH_REFINE_PASSES};
use crate::error::{RefscaleError, Result};
use crate::frame::CircleCandidate;

use super::config::HoughParams;
use super::edges::{canny, EdgeMap};
use super::smooth::gaussian_blur;

/// Detect circles with the gradient Hough transform.
///
/// Pipeline:
/// 1. Canny edges with thresholds `param1 / 2` and `param1`.
/// 2. Every edge pixel votes along its gradient line, in both directions,
///    for radii in `[min_radius, max_radius]`. Votes are split bilinearly
///    between accumulator cells and weighted by gradient strength.
/// 3. The accumulator is Gaussian smoothed and its local maxima with more
///    than `param2` votes become center candidates, strongest first.
/// 4. Each candidate is refined by a least-squares circle fit on the edge
///    pixels that point at it, and kept when more than `param2` of them lie
///    on the fitted circle.
/// 5. Circles closer than `min_dist` to a stronger one are dropped.
pub fn hough_circles(data: &Array2<f32>, params: &HoughParams) -> Result<Vec<CircleCandidate>> {
    params.validate()?;
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return Err(RefscaleError::EmptyImage);
    }

    let edges = canny(data, params.param1 / 2.0, params.param1);
    debug!(edge_pixels = edges.points.len(), "Canny edges computed");
    if edges.points.is_empty() {
        return Ok(Vec::new());
    }

    let min_r = params.min_radius as f32;
    let max_r = params.effective_max_radius(w, h) as f32;

    let acc = accumulate(&edges, h, w, params.dp, min_r, max_r);
    let smoothed = gaussian_blur(&acc, HOUGH_ACCUM_SIGMA);
    let peaks = find_centers(&smoothed, params.param2);
    debug!(center_candidates = peaks.len(), "Accumulator peaks found");

    let mut circles: Vec<CircleCandidate> = Vec::new();
    let min_dist_sq = params.min_dist * params.min_dist;
    let too_close = |circles: &[CircleCandidate], x: f32, y: f32| {
        circles.iter().any(|c| {
            let dx = c.x - x;
            let dy = c.y - y;
            dx * dx + dy * dy < min_dist_sq
        })
    };

    for peak in peaks {
        let px = peak.col as f32 * params.dp;
        let py = peak.row as f32 * params.dp;
        if too_close(&circles, px, py) {
            continue;
        }
        let Some(circle) = refine_circle(&edges, px, py, min_r, max_r, params) else {
            continue;
        };
        if too_close(&circles, circle.x, circle.y) {
            continue;
        }
        debug!(
            x = circle.x,
            y = circle.y,
            radius = circle.radius,
            votes = peak.votes,
            "Circle accepted"
        );
        circles.push(circle);
    }

    debug!(circles = circles.len(), "Hough circle detection complete");
    Ok(circles)
}

/// Deposit a weighted vote into four neighboring cells.
fn bilinear_add(acc: &mut Array2<f32>, x: f32, y: f32, weight: f32) {
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;
    acc[[y0, x0]] += weight * (1.0 - fx) * (1.0 - fy);
    acc[[y0, x0 + 1]] += weight * fx * (1.0 - fy);
    acc[[y0 + 1, x0]] += weight * (1.0 - fx) * fy;
    acc[[y0 + 1, x0 + 1]] += weight * fx * fy;
}

fn accumulate(
    edges: &EdgeMap,
    h: usize,
    w: usize,
    dp: f32,
    min_r: f32,
    max_r: f32,
) -> Array2<f32> {
    let ah = ((h as f32 - 1.0) / dp).round() as usize + 1;
    let aw = ((w as f32 - 1.0) / dp).round() as usize + 1;
    let mut acc = Array2::<f32>::zeros((ah, aw));
    if ah < 2 || aw < 2 {
        return acc;
    }

    // Radii stepped in accumulator cells so each edge pixel votes once per cell.
    let r_start = (min_r / dp).ceil() as i64;
    let r_end = (max_r / dp).floor() as i64;
    if r_end < r_start {
        return acc;
    }

    let magnitudes: Vec<f32> = edges
        .points
        .iter()
        .map(|&(row, col)| {
            let gx = edges.gradients.dx[[row, col]];
            let gy = edges.gradients.dy[[row, col]];
            (gx * gx + gy * gy).sqrt()
        })
        .collect();
    let mean_mag = magnitudes.iter().sum::<f32>() / magnitudes.len() as f32;
    if mean_mag <= 0.0 {
        return acc;
    }

    let x_limit = (aw - 1) as f32;
    let y_limit = (ah - 1) as f32;

    for (&(row, col), &mag) in edges.points.iter().zip(&magnitudes) {
        if mag <= 0.0 {
            continue;
        }
        let sx = edges.gradients.dx[[row, col]] / mag;
        let sy = edges.gradients.dy[[row, col]] / mag;
        let x0 = col as f32 / dp;
        let y0 = row as f32 / dp;
        // Normalised so an average edge pixel casts one vote per radius.
        let weight = mag / mean_mag;

        for sign in [1.0f32, -1.0] {
            for r in r_start..=r_end {
                let r = r as f32 * sign;
                let x = x0 + r * sx;
                let y = y0 + r * sy;
                if x < 0.0 || y < 0.0 || x >= x_limit || y >= y_limit {
                    break;
                }
                bilinear_add(&mut acc, x, y, weight);
            }
        }
    }

    acc
}

struct Peak {
    row: usize,
    col: usize,
    votes: f32,
}

/// Local maxima of the smoothed accumulator whose vote mass exceeds
/// `threshold`, strongest first.
///
/// A peak must beat every cell within the suppression radius; ties go to
/// the cell that comes first in raster order.
fn find_centers(smoothed: &Array2<f32>, threshold: f32) -> Vec<Peak> {
    let (ah, aw) = smoothed.dim();
    // Smoothed peak height times this is the vote mass under the kernel.
    let mass_scale = 2.0 * PI * HOUGH_ACCUM_SIGMA * HOUGH_ACCUM_SIGMA;
    let nms = (2.0 * HOUGH_ACCUM_SIGMA).ceil() as isize;
    let nms_sq = nms * nms;

    let mut peaks = Vec::new();
    for row in 0..ah {
        for col in 0..aw {
            let v = smoothed[[row, col]];
            let votes = v * mass_scale;
            if votes <= threshold {
                continue;
            }

            let mut is_max = true;
            'window: for dr in -nms..=nms {
                for dc in -nms..=nms {
                    if (dr == 0 && dc == 0) || dr * dr + dc * dc > nms_sq {
                        continue;
                    }
                    let nr = row as isize + dr;
                    let nc = col as isize + dc;
                    if nr < 0 || nc < 0 || nr >= ah as isize || nc >= aw as isize {
                        continue;
                    }
                    let n = smoothed[[nr as usize, nc as usize]];
                    let earlier = (nr as usize, nc as usize) < (row, col);
                    if n > v || (n == v && earlier) {
                        is_max = false;
                        break 'window;
                    }
                }
            }
            if is_max {
                peaks.push(Peak { row, col, votes });
            }
        }
    }

    peaks.sort_by(|a, b| {
        b.votes
            .total_cmp(&a.votes)
            .then((a.row, a.col).cmp(&(b.row, b.col)))
    });
    peaks
}

/// Edge pixel position and its distance from a trial center.
struct Support {
    x: f64,
    y: f64,
    dist: f64,
}

/// Edge pixels at distance `[lo, hi]` from `(cx, cy)` whose gradient points
/// along the line to the center.
fn aligned_support(edges: &EdgeMap, cx: f64, cy: f64, lo: f64, hi: f64) -> Vec<Support> {
    edges
        .points
        .iter()
        .filter_map(|&(row, col)| {
            let gx = edges.gradients.dx[[row, col]] as f64;
            let gy = edges.gradients.dy[[row, col]] as f64;
            let g = gx.hypot(gy);
            let vx = col as f64 - cx;
            let vy = row as f64 - cy;
            let dist = vx.hypot(vy);
            if g <= 0.0 || dist <= 0.0 || dist < lo || dist > hi {
                return None;
            }
            let cos = (gx * vx + gy * vy).abs() / (g * dist);
            (cos >= HOUGH_ALIGN_COS).then_some(Support {
                x: col as f64,
                y: row as f64,
                dist,
            })
        })
        .collect()
}

/// Least-squares (Kasa) circle center through a set of points.
fn fit_center(points: &[Support]) -> Option<(f64, f64)> {
    if points.len() < 3 {
        return None;
    }
    let n = points.len() as f64;
    let mx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let my = points.iter().map(|p| p.y).sum::<f64>() / n;

    let (mut suu, mut suv, mut svv) = (0.0, 0.0, 0.0);
    let (mut suuu, mut svvv, mut suvv, mut svuu) = (0.0, 0.0, 0.0, 0.0);
    for p in points {
        let u = p.x - mx;
        let v = p.y - my;
        suu += u * u;
        suv += u * v;
        svv += v * v;
        suuu += u * u * u;
        svvv += v * v * v;
        suvv += u * v * v;
        svuu += v * u * u;
    }

    let det = suu * svv - suv * suv;
    if det.abs() < 1e-9 {
        return None;
    }
    let e1 = 0.5 * (suuu + suvv);
    let e2 = 0.5 * (svvv + svuu);
    let uc = (e1 * svv - suv * e2) / det;
    let vc = (suu * e2 - suv * e1) / det;
    Some((mx + uc, my + vc))
}

/// Radius with the most edge support, scored per unit radius so larger
/// circles do not win just by having a longer outline.
fn best_radius(dists: &mut [f64], band: f64) -> Option<f64> {
    if dists.is_empty() {
        return None;
    }
    dists.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut best_score = 0.0;
    let mut best_radius = None;
    let mut end = 0;
    let mut sum = 0.0;
    for start in 0..dists.len() {
        while end < dists.len() && dists[end] - dists[start] <= band {
            sum += dists[end];
            end += 1;
        }
        let count = (end - start) as f64;
        let mean = sum / count;
        let score = count / mean.max(1.0);
        if score > best_score {
            best_score = score;
            best_radius = Some(mean);
        }
        sum -= dists[start];
    }
    best_radius
}

/// Turn an accumulator peak into a circle, or `None` if the edges do not
/// support one in the radius range.
fn refine_circle(
    edges: &EdgeMap,
    px: f32,
    py: f32,
    min_r: f32,
    max_r: f32,
    params: &HoughParams,
) -> Option<CircleCandidate> {
    let dp = params.dp as f64;
    let min_r = min_r as f64;
    let max_r = max_r as f64;
    // The peak can sit a few cells off the true center.
    let slack = 4.0 * HOUGH_ACCUM_SIGMA as f64 * dp;
    let band = (2.0 * dp).max(2.0);

    let support = aligned_support(
        edges,
        px as f64,
        py as f64,
        (min_r - slack).max(1.0),
        max_r + slack,
    );
    let (mut cx, mut cy) = fit_center(&support)?;

    let mut radius: Option<f64> = None;
    let mut inliers = 0usize;
    for _ in 0..HOUGH_REFINE_PASSES {
        let support = aligned_support(edges, cx, cy, min_r, max_r);
        let r = match radius {
            Some(r) => r,
            None => {
                let mut dists: Vec<f64> = support.iter().map(|s| s.dist).collect();
                best_radius(&mut dists, band)?
            }
        };
        let on_circle: Vec<Support> = support
            .into_iter()
            .filter(|s| (s.dist - r).abs() <= band)
            .collect();
        (cx, cy) = fit_center(&on_circle)?;
        let mean = on_circle
            .iter()
            .map(|s| (s.x - cx).hypot(s.y - cy))
            .sum::<f64>()
            / on_circle.len() as f64;
        radius = Some(mean);
        inliers = on_circle.len();
    }

    let r = radius?;
    if inliers as f32 <= params.param2 || r < min_r || r > max_r {
        return None;
    }
    Some(CircleCandidate::new(cx as f32, cy as f32, r as f32))
}
