//! Cosine similarity and distance over encoded vectors.
//!
//! Accumulation happens in f64 so that rankings do not flip on rounding
//! noise between nearly identical breeds.

/// Cosine similarity in [-1, 1].
///
/// Identical vectors score exactly 1.0 (including two zero vectors). A zero
/// vector against anything else scores 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if similarity.is_finite() {
        similarity.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Cosine distance in [0, 2]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    1.0 - cosine_similarity(a, b)
}
