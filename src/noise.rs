//! Seeded gradient noise and the fractal combinators built on it.
//!
//! Everything in this module is deterministic: the same seed and the same
//! sample coordinates produce the same value on every run and every machine.
//! Map reproducibility depends on that contract, so the permutation shuffle
//! is done with a fixed sine-based mixer rather than an OS random source.

/// Skew factor for the triangular lattice: 0.5 * (sqrt(3) - 1)
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor: (3 - sqrt(3)) / 6
const G2: f64 = 0.211_324_865_405_187_1;

/// Final output scale so samples land roughly in [-1, 1]
const OUTPUT_SCALE: f64 = 70.0;

/// The 12 fixed gradient directions (edges and corners of a unit square,
/// with the axis directions doubled up so the mod-12 lookup stays cheap).
const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Deterministic, continuous 2D scalar noise field.
///
/// Owns a seeded 256-entry permutation table (duplicated to 512 so corner
/// lookups never need a wrap check) and a precomputed mod-12 gradient index
/// table. Immutable after construction.
pub struct GradientNoiseField {
    perm: [usize; 512],
    grad_index: [usize; 512],
}

impl GradientNoiseField {
    /// Build the field for a seed. Two fields with the same seed are
    /// indistinguishable; different seeds give decorrelated tables.
    pub fn new(seed: i64) -> Self {
        let mut table = [0usize; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i;
        }

        // Deterministic shuffle: the fractional part of a scaled sine acts
        // as the per-index pseudo-random swap target.
        for i in 0..256 {
            let r = ((seed.wrapping_add(i as i64)) as f64).sin() * 10_000.0;
            let j = (r.fract().abs() * 256.0) as usize;
            table.swap(i, j);
        }

        let mut perm = [0usize; 512];
        let mut grad_index = [0usize; 512];
        for i in 0..512 {
            perm[i] = table[i & 255];
            grad_index[i] = perm[i] % 12;
        }

        Self { perm, grad_index }
    }

    /// Sample the field at real coordinates. Output is approximately
    /// bounded to [-1, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew into the triangular lattice and find the containing cell.
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Which of the two triangles of the cell are we in?
        let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.grad_index[ii + self.perm[jj]];
        let gi1 = self.grad_index[ii + i1 + self.perm[jj + j1]];
        let gi2 = self.grad_index[ii + 1 + self.perm[jj + 1]];

        let n0 = corner_contribution(GRADIENTS[gi0], x0, y0);
        let n1 = corner_contribution(GRADIENTS[gi1], x1, y1);
        let n2 = corner_contribution(GRADIENTS[gi2], x2, y2);

        OUTPUT_SCALE * (n0 + n1 + n2)
    }
}

/// Contribution of one triangle corner: t^4 * (gradient . offset) with a
/// radial falloff that reaches zero before the neighboring corners, which
/// is what keeps the summed field continuous.
fn corner_contribution(grad: [f64; 2], dx: f64, dy: f64) -> f64 {
    let t = 0.5 - dx * dx - dy * dy;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (grad[0] * dx + grad[1] * dy)
    }
}

// =============================================================================
// FRACTAL COMBINATORS
// =============================================================================

/// Fractional Brownian motion: sum `octaves` rounds of samples where the
/// amplitude halves and the frequency doubles each round, normalized by the
/// total amplitude. Output is approximately [-1, 1].
pub fn fbm(field: &GradientNoiseField, x: f64, y: f64, frequency: f64, octaves: u32) -> f64 {
    debug_assert!(octaves > 0);

    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut freq = frequency;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += amplitude * field.sample(x * freq, y * freq);
        max_value += amplitude;
        amplitude *= 0.5;
        freq *= 2.0;
    }

    total / max_value
}

/// Ridged fBm: each raw sample `n` becomes `(1 - |n|)^2` before weighting,
/// concentrating sharp ridge lines along the zero-crossings of the
/// underlying field. Output is in [0, 1].
pub fn ridged_fbm(field: &GradientNoiseField, x: f64, y: f64, frequency: f64, octaves: u32) -> f64 {
    debug_assert!(octaves > 0);

    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut freq = frequency;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        let n = field.sample(x * freq, y * freq);
        let ridge = 1.0 - n.abs();
        total += amplitude * ridge * ridge;
        max_value += amplitude;
        amplitude *= 0.5;
        freq *= 2.0;
    }

    total / max_value
}

/// Domain-warped fBm: offset the sampling coordinates of `field` by two
/// decorrelated fBm reads of `warp_field`, producing organic blob shapes
/// instead of axis-aligned bands. The fixed (+5.2, +1.3) shift decorrelates
/// the two warp axes.
pub fn warped_fbm(
    field: &GradientNoiseField,
    warp_field: &GradientNoiseField,
    x: f64,
    y: f64,
    frequency: f64,
    octaves: u32,
    warp_scale: f64,
) -> f64 {
    let wx = warp_scale * fbm(warp_field, x, y, frequency, octaves);
    let wy = warp_scale * fbm(warp_field, x + 5.2, y + 1.3, frequency, octaves);
    fbm(field, x + wx, y + wy, frequency, octaves)
}
