//! Log-space binomial and Poisson kernels shared by the probability engines.
//!
//! Everything here is a pure function over small integers (`n ≤ 40`), so the
//! only numeric hazard is overflow of intermediate factorials — avoided by
//! working with sums of logarithms and exponentiating once at the end.

/// Probability that a single fair die shows one given face.
pub const FACE_PROBABILITY: f64 = 1.0 / 6.0;

/// `ln C(n, k)`, computed as a running sum of `ln(n-i) - ln(i+1)`.
///
/// Uses the symmetry `C(n,k) = C(n,n-k)` so at most `n/2` terms are summed.
pub fn log_binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }

    let k = k.min(n - k);
    let mut sum = 0.0;
    for i in 0..k {
        sum += ((n - i) as f64).ln() - ((i + 1) as f64).ln();
    }
    sum
}

/// `C(n, k)` as a float, via [`log_binomial_coefficient`].
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    log_binomial_coefficient(n, k).exp()
}

/// Upper tail `P(X ≥ k)` for `X ~ Binomial(n, p)`.
///
/// Each term is assembled in log space and exponentiated individually; the
/// final sum is clamped to 1.0 to absorb floating-point drift.
pub fn binomial_tail(k: usize, n: usize, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 {
        return 1.0;
    }

    let log_p = p.ln();
    let log_q = (1.0 - p).ln();

    let mut cumulative = 0.0;
    for x in k..=n {
        let log_term =
            log_binomial_coefficient(n, x) + x as f64 * log_p + (n - x) as f64 * log_q;
        cumulative += log_term.exp();
    }

    cumulative.min(1.0)
}

/// `ln(j!)` as a sum of logs. Fine for the small `j` seen here.
pub fn log_factorial(j: usize) -> f64 {
    (2..=j).map(|i| (i as f64).ln()).sum()
}

/// Poisson PMF `P(J = j)` for rate `lambda`, computed in log space.
pub fn poisson_pmf(j: usize, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return if j == 0 { 1.0 } else { 0.0 };
    }
    (j as f64 * lambda.ln() - lambda - log_factorial(j)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_binomial_coefficients_are_exact() {
        assert!((binomial_coefficient(5, 2) - 10.0).abs() < 1e-9);
        assert!((binomial_coefficient(6, 3) - 20.0).abs() < 1e-9);
        assert!((binomial_coefficient(10, 0) - 1.0).abs() < 1e-12);
        assert!((binomial_coefficient(10, 10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn large_coefficient_does_not_overflow() {
        // C(40, 20) = 137846528820; far beyond what a factorial-based
        // computation could reach without overflow.
        let c = binomial_coefficient(40, 20);
        assert!((c - 137_846_528_820.0).abs() / 137_846_528_820.0 < 1e-9);
    }

    #[test]
    fn coefficient_out_of_range_is_zero() {
        assert_eq!(binomial_coefficient(5, 6), 0.0);
    }

    #[test]
    fn tail_edges() {
        assert_eq!(binomial_tail(0, 10, FACE_PROBABILITY), 1.0);
        assert_eq!(binomial_tail(11, 10, FACE_PROBABILITY), 0.0);
        // P(X >= 1 | n=1) is the single-die probability itself.
        assert!((binomial_tail(1, 1, FACE_PROBABILITY) - 1.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn tail_matches_complement_formula() {
        // P(X >= 1 | n=3) = 1 - (5/6)^3
        let expected = 1.0 - (5.0f64 / 6.0).powi(3);
        assert!((binomial_tail(1, 3, FACE_PROBABILITY) - expected).abs() < 1e-9);
    }

    #[test]
    fn poisson_pmf_sums_to_one() {
        let lambda = 40.0 / 6.0;
        let total: f64 = (0..200).map(|j| poisson_pmf(j, lambda)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn poisson_zero_rate() {
        assert_eq!(poisson_pmf(0, 0.0), 1.0);
        assert_eq!(poisson_pmf(3, 0.0), 0.0);
    }
}
