use super::*;

/// Improper prior over positive scale values, with log-density M*ln(x). For M > 0
/// the density grows with x, so that a model parameter under this prior is pushed
/// away from zero; with M equal to the number of observations, this is the penalty
/// which keeps latent-space scales from collapsing in a Gaussian process dynamical model.
///
/// The density does not integrate, so log_prob has no normalization constant. At x <= 0,
/// log_prob is -inf and grad_input returns 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Wang {

    meta : DistMeta,

    m : f64
}

impl Wang {

    pub fn new(m : f64) -> Self {
        let mut meta = DistMeta::new(Family::Wang, 1);
        meta.set_param_name("M", 0);
        Self { meta, m }
    }

    pub fn m(&self) -> f64 {
        self.m
    }

}

impl Default for Wang {

    fn default() -> Self {
        Self::new(1.)
    }

}

impl Distribution for Wang {

    fn meta(&self) -> &DistMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut DistMeta {
        &mut self.meta
    }

    fn param(&self, index : usize) -> f64 {
        check_param_index(Family::Wang, index, 1);
        self.m
    }

    fn set_param(&mut self, val : f64, index : usize) {
        check_param_index(Family::Wang, index, 1);
        self.m = val;
    }

    fn log_prob(&self, x : f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        self.m * x.ln()
    }

    fn grad_input(&self, x : f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.m / x
    }

    fn set_init_param(&mut self) {
        self.m = 1.;
    }

    fn box_clone(&self) -> Box<dyn Distribution> {
        Box::new(self.clone())
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn discourages_small_values() {
        let w = Wang::new(3.);
        assert!(w.log_prob(0.1) < w.log_prob(1.));
        assert!(w.log_prob(1.) < w.log_prob(10.));
        assert_eq!(w.log_prob(1.), 0.);
        assert_eq!(w.grad_input(2.), 1.5);
    }

    #[test]
    fn outside_support() {
        let w = Wang::default();
        assert_eq!(w.log_prob(0.), f64::NEG_INFINITY);
        assert_eq!(w.grad_input(0.), 0.);
    }

}
