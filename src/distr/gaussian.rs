use super::*;
use std::f64::consts::PI;

/// Zero-mean Gaussian parametrized by its precision (inverse variance). Used as a
/// prior, it shrinks a model parameter towards zero with a strength proportional
/// to the precision; setting the precision to 1/(2*lambda) recovers an L2 penalty
/// with weight lambda on the log-likelihood.
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {

    meta : DistMeta,

    precision : f64
}

impl Gaussian {

    pub fn new(precision : f64) -> Self {
        assert!(precision > 0.0, "Gaussian precision must be positive (found {})", precision);
        let mut meta = DistMeta::new(Family::Gaussian, 1);
        meta.set_param_name("precision", 0);
        Self { meta, precision }
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn var(&self) -> f64 {
        1. / self.precision
    }

}

impl Default for Gaussian {

    fn default() -> Self {
        Self::new(1.)
    }

}

impl Distribution for Gaussian {

    fn meta(&self) -> &DistMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DistMeta {
        &mut self.meta
    }

    fn param(&self, index : usize) -> f64 {
        check_param_index(Family::Gaussian, index, 1);
        self.precision
    }

    fn set_param(&mut self, val : f64, index : usize) {
        check_param_index(Family::Gaussian, index, 1);
        self.precision = val;
    }

    fn log_prob(&self, x : f64) -> f64 {
        0.5 * self.precision.ln() - 0.5 * (2. * PI).ln() - 0.5 * self.precision * x.powi(2)
    }

    fn grad_input(&self, x : f64) -> f64 {
        -self.precision * x
    }

    fn set_init_param(&mut self) {
        self.precision = 1.;
    }

    fn box_clone(&self) -> Box<dyn Distribution> {
        Box::new(self.clone())
    }

}
