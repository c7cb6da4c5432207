//! Linear range conversion used to map drag distance to scale/opacity.

/// Maps a domain `(a0, a1)` onto a codomain `(b0, b1)` linearly, so that
/// `map(a0) == b0` and `map(a1) == b1`. Inputs outside the domain
/// extrapolate along the same line.
///
/// A degenerate domain (`a0 == a1`) is not rejected; `map` then returns a
/// non-finite value. Callers construct scales from the live viewport width,
/// which is never zero in practice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    a0: f64,
    a1: f64,
    b0: f64,
    b1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), codomain: (f64, f64)) -> Self {
        Self {
            a0: domain.0,
            a1: domain.1,
            b0: codomain.0,
            b1: codomain.1,
        }
    }

    pub fn map(&self, x: f64) -> f64 {
        ((x - self.a0) * (self.b1 - self.b0) / (self.a1 - self.a0)) + self.b0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn maps_domain_endpoints_to_codomain_endpoints() {
        let s = LinearScale::new((0.0, -400.0), (0.9, 1.0));
        assert!(close(s.map(0.0), 0.9));
        assert!(close(s.map(-400.0), 1.0));
    }

    #[test]
    fn midpoint_maps_to_midpoint() {
        let s = LinearScale::new((0.0, -400.0), (0.9, 1.0));
        assert!(close(s.map(-200.0), 0.95));
    }

    #[test]
    fn is_linear_under_affine_combination() {
        let s = LinearScale::new((-3.0, 17.0), (2.0, -40.0));
        let (x1, x2) = (5.5, -120.25);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let mixed = s.map(t * x1 + (1.0 - t) * x2);
            let expected = t * s.map(x1) + (1.0 - t) * s.map(x2);
            assert!(close(mixed, expected), "t={t}: {mixed} != {expected}");
        }
    }

    #[test]
    fn extrapolates_outside_domain() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert!(close(s.map(20.0), 200.0));
        assert!(close(s.map(-5.0), -50.0));
    }

    #[test]
    fn degenerate_domain_yields_non_finite() {
        let s = LinearScale::new((1.0, 1.0), (0.0, 1.0));
        assert!(!s.map(2.0).is_finite());
    }
}
