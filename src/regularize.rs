use nalgebra::*;
use std::io::{BufRead, Write};
use log::{debug, trace, warn};
use crate::distr::{self, Distribution, Family};
use crate::error::{Result, FormatError};
use crate::io;
use crate::prior::ParamPriors;

/// Trait implemented by parameterized models (kernels, noise models, any object
/// optimized by gradient ascent) which accept priors over their parameters.
/// Implementors provide indexed access to their parameters, the gradient of their
/// own objective and the ParamPriors they embed; everything else (bulk parameter
/// access, prior management, prior log-probability and gradient, prior (de)serialization)
/// is provided.
///
/// A typical objective evaluation folds the priors into the likelihood this way:
///
/// ```ignore
/// let lp = model.log_likelihood() + model.prior_log_prob();
/// model.grad_params(&mut g);
/// model.add_prior_grad(&mut g);
/// ```
pub trait Regularizable {

    fn num_params(&self) -> usize;

    fn param(&self, index : usize) -> f64;

    fn set_param(&mut self, val : f64, index : usize);

    /// Writes the gradient of the model objective (without priors) into g,
    /// which has num_params() entries.
    fn grad_params(&self, g : &mut RowDVector<f64>);

    fn priors(&self) -> &ParamPriors;

    fn priors_mut(&mut self) -> &mut ParamPriors;

    /// Copies all parameters into params. Panics if params does not have
    /// exactly num_params() entries.
    fn params(&self, params : &mut RowDVector<f64>) {
        check_len(params.len(), self.num_params());
        for i in 0..params.len() {
            params[i] = self.param(i);
        }
    }

    fn set_params(&mut self, params : &RowDVector<f64>) {
        check_len(params.len(), self.num_params());
        for i in 0..params.len() {
            self.set_param(params[i], i);
        }
    }

    /// Attaches dist as a prior over the parameter at index. A parameter
    /// may receive any number of priors. Panics if index >= num_params().
    fn add_prior(&mut self, dist : Box<dyn Distribution>, index : usize) {
        assert!(
            index < self.num_params(),
            "Prior index {} out of range for model with {} parameters",
            index,
            self.num_params()
        );
        debug!("Attaching {} prior to parameter {}", dist.type_tag(), index);
        self.priors_mut().add(dist, index);
    }

    fn clear_priors(&mut self) {
        debug!("Clearing {} priors", self.num_priors());
        self.priors_mut().clear();
    }

    fn num_priors(&self) -> usize {
        self.priors().len()
    }

    fn prior(&self, i : usize) -> &dyn Distribution {
        self.priors().dist(i)
    }

    fn prior_type(&self, i : usize) -> Family {
        self.priors().family(i)
    }

    /// Parameter index targeted by the i-th prior.
    fn prior_index(&self, i : usize) -> usize {
        self.priors().param_index(i)
    }

    /// Gradient of the i-th prior, evaluated at val.
    fn prior_grad_input(&self, val : f64, i : usize) -> f64 {
        self.priors().dist(i).grad_input(val)
    }

    /// Sum of the log-probabilities of all priors at the current parameter values,
    /// in binding order. Zero for a model without priors.
    fn prior_log_prob(&self) -> f64 {
        self.priors().iter()
            .map(|b| b.dist().log_prob(self.param(b.param_index())) )
            .sum()
    }

    /// Adds the gradient of every prior to the entry of g at its parameter index.
    /// g is never reset, so it should already hold the gradient of the objective
    /// (or zeros); priors stacked over the same parameter add up.
    fn add_prior_grad(&self, g : &mut RowDVector<f64>) {
        check_len(g.len(), self.num_params());
        for b in self.priors() {
            let ix = b.param_index();
            g[ix] += b.dist().grad_input(self.param(ix));
        }
    }

    /// Objective value with the prior log-probability added to the informed
    /// log-likelihood.
    fn penalized_log_prob(&self, log_lik : f64) -> f64 {
        log_lik + self.prior_log_prob()
    }

    /// Overwrites g with grad_params, then adds the prior gradient to it.
    fn penalized_grad(&self, g : &mut RowDVector<f64>) {
        self.grad_params(g);
        self.add_prior_grad(g);
    }

    /// Writes every prior as a priorIndex=<index> line followed by its distribution block.
    fn write_priors(&self, out : &mut dyn Write) -> Result<()> {
        for b in self.priors() {
            writeln!(out, "priorIndex={}", b.param_index())?;
            distr::write_dist(b.dist(), out)?;
        }
        Ok(())
    }

    /// Reads num_priors priors written by write_priors and attaches them in stream order.
    /// Nothing is attached unless all of them are read successfully.
    fn read_priors(&mut self, input : &mut dyn BufRead, num_priors : usize) -> Result<()> {
        let mut read = Vec::with_capacity(num_priors);
        for i in 0..num_priors {
            match read_binding(input, self.num_params()) {
                Ok(binding) => read.push(binding),
                Err(e) => {
                    warn!("Aborted reading prior {} of {}: {}", i + 1, num_priors, e);
                    return Err(e);
                }
            }
        }
        debug!("Read {} priors", read.len());
        for (dist, index) in read {
            self.add_prior(dist, index);
        }
        Ok(())
    }

}

fn check_len(len : usize, num_params : usize) {
    assert!(len == num_params, "Vector has {} entries but model has {} parameters", len, num_params);
}

fn read_binding(input : &mut dyn BufRead, num_params : usize) -> Result<(Box<dyn Distribution>, usize)> {
    let (key, value) = io::read_pair(input)?;
    if key != "priorIndex" {
        return Err(FormatError::UnexpectedKey { expected : "priorIndex", found : key }.into());
    }
    let index : usize = io::parse_value(&key, &value)?;
    if index >= num_params {
        return Err(FormatError::IndexOutOfRange { index, num_params }.into());
    }
    let dist = distr::read_dist(input)?;
    trace!("Read {} prior for parameter {}", dist.type_tag(), index);
    Ok((dist, index))
}
