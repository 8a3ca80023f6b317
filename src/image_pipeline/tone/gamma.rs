/// Gamma exponent used when none is configured.
pub const DEFAULT_GAMMA: f64 = 2.0;

/// Applies `f^(1/gamma)` to every sample in place.
///
/// A gamma of exactly `1.0` returns the samples untouched. No clamping happens
/// here: negative samples with a non-integer exponent become NaN, as
/// `f64::powf` defines.
pub fn gamma_correct(mut samples: Vec<f64>, gamma: f64) -> Vec<f64> {
    if gamma == 1.0 {
        return samples;
    }

    let inv_gamma = 1.0 / gamma;
    for sample in samples.iter_mut() {
        *sample = sample.powf(inv_gamma);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_gamma_is_passthrough() {
        let samples = vec![0.0, 0.25, 1.0, -0.5, 2.0];
        assert_eq!(gamma_correct(samples.clone(), 1.0), samples);
    }

    #[test]
    fn test_default_gamma_is_square_root() {
        let out = gamma_correct(vec![0.0, 0.25, 0.5, 1.0], DEFAULT_GAMMA);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5).abs() < 1e-12);
        assert_eq!(out[2], 0.5f64.powf(0.5));
        assert_eq!(out[3], 1.0);
    }

    #[test]
    fn test_gamma_below_one_darkens() {
        let out = gamma_correct(vec![0.5], 0.5);
        assert!((out[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_negative_sample_becomes_nan() {
        let out = gamma_correct(vec![-0.5], 2.2);
        assert!(out[0].is_nan());
    }
}
