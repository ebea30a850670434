//! Row-wise layer normalization
//!
//! Each vector is normalized over its own dimensions: subtract the mean and
//! divide by the (biased) standard deviation. No affine weight or bias.

/// Added to the variance before the square root
pub const LAYER_NORM_EPS: f64 = 1e-5;

/// Normalize one vector in place
pub fn layer_norm_in_place(values: &mut [f32]) {
    if values.is_empty() {
        return;
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let denom = (variance + LAYER_NORM_EPS).sqrt();

    for v in values.iter_mut() {
        *v = ((*v as f64 - mean) / denom) as f32;
    }
}

/// Normalize every row of a batch independently
pub fn layer_norm(mut rows: Vec<Vec<f32>>) -> Vec<Vec<f32>> {
    for row in rows.iter_mut() {
        layer_norm_in_place(row);
    }
    rows
}
