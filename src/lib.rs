/// Univariate distributions used as priors (Gaussian, Gamma and the Wang scale prior),
/// their shared trait and the textual stream format shared by all of them.
pub mod distr;

/// Container binding distributions to parameter positions of a model.
pub mod prior;

/// Trait that lets any parameterized model carry priors and fold their
/// log-probability and gradient into its own objective.
pub mod regularize;

pub mod error;

mod io;

pub use distr::{Distribution, Family, Gaussian, Gamma, Wang, read_dist, write_dist};

pub use prior::{Binding, ParamPriors};

pub use regularize::Regularizable;

pub use error::{Error, FormatError, Result};

/// Version of the distribution representation, reported by the JSON bridge.
pub const DIST_VERSION : &str = "0.1";
