use super::*;
use statrs::function::gamma::ln_gamma;

/// Gamma is a distribution for scale parameters, with shape a and rate (inverse-scale) b.
/// For a=1, the gamma has its mode truncated at zero (which gives rise to the exponential
/// distribution with rate b); for a >> 1, it approaches a gaussian centered at a / b and
/// with dispersion a / b^2. As a prior it keeps a positive model parameter (a kernel
/// variance or a noise precision, say) away from both zero and infinity.
///
/// The support is x > 0. At x <= 0, log_prob is -inf and grad_input returns 0.0,
/// so that an out-of-support parameter does not push an optimizer in any direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {

    meta : DistMeta,

    /// Shape
    a : f64,

    /// Rate
    b : f64
}

impl Gamma {

    pub fn new(a : f64, b : f64) -> Self {
        assert!(a > 0.0 && b > 0.0, "Gamma parameters must be positive (found a={}, b={})", a, b);
        let mut meta = DistMeta::new(Family::Gamma, 2);
        meta.set_param_name("a", 0);
        meta.set_param_name("b", 1);
        Self { meta, a, b }
    }

    /// Exponential distribution with the informed rate.
    pub fn exponential(rate : f64) -> Self {
        Self::new(1., rate)
    }

    pub fn shape(&self) -> f64 {
        self.a
    }

    pub fn rate(&self) -> f64 {
        self.b
    }

    pub fn mean(&self) -> f64 {
        self.a / self.b
    }

    pub fn var(&self) -> f64 {
        self.a / self.b.powi(2)
    }

}

impl Default for Gamma {

    fn default() -> Self {
        Self::new(1., 1.)
    }

}

impl Distribution for Gamma {

    fn meta(&self) -> &DistMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DistMeta {
        &mut self.meta
    }

    fn param(&self, index : usize) -> f64 {
        check_param_index(Family::Gamma, index, 2);
        match index {
            0 => self.a,
            _ => self.b
        }
    }

    fn set_param(&mut self, val : f64, index : usize) {
        check_param_index(Family::Gamma, index, 2);
        match index {
            0 => self.a = val,
            _ => self.b = val
        }
    }

    fn log_prob(&self, x : f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        self.a * self.b.ln() - ln_gamma(self.a) + (self.a - 1.) * x.ln() - self.b * x
    }

    fn grad_input(&self, x : f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        (self.a - 1.) / x - self.b
    }

    fn set_init_param(&mut self) {
        self.a = 1.;
        self.b = 1.;
    }

    fn box_clone(&self) -> Box<dyn Distribution> {
        Box::new(self.clone())
    }

}
