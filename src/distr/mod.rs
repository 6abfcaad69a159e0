use nalgebra::*;
use std::fmt::{self, Debug, Display};
use std::io::{BufRead, Write};
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::error::{Result, FormatError};
use crate::io;

pub mod gaussian;

pub use gaussian::*;

pub mod gamma;

pub use gamma::*;

pub mod wang;

pub use wang::*;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "json")]
pub use json::*;

/// Display name given to parameters that were never explicitly named.
pub const NO_NAME : &str = "no name";

/// The closed set of distribution families known to this crate. The family tag is
/// what identifies a distribution in a serialized stream, and Family::instantiate
/// is the only place where a distribution is built from its tag: adding a new family
/// means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Gaussian,
    Gamma,
    Wang
}

impl Family {

    pub const ALL : [Family; 3] = [Family::Gaussian, Family::Gamma, Family::Wang];

    pub fn tag(&self) -> &'static str {
        match self {
            Family::Gaussian => "gaussian",
            Family::Gamma => "gamma",
            Family::Wang => "wang"
        }
    }

    pub fn num_params(&self) -> usize {
        match self {
            Family::Gamma => 2,
            Family::Gaussian | Family::Wang => 1
        }
    }

    /// Builds a distribution of this family at its default starting point.
    pub fn instantiate(&self) -> Box<dyn Distribution> {
        match self {
            Family::Gaussian => Box::new(Gaussian::default()),
            Family::Gamma => Box::new(Gamma::default()),
            Family::Wang => Box::new(Wang::default())
        }
    }

}

impl Display for Family {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }

}

impl FromStr for Family {

    type Err = FormatError;

    fn from_str(s : &str) -> std::result::Result<Self, FormatError> {
        Family::ALL.iter()
            .find(|family| family.tag() == s)
            .cloned()
            .ok_or_else(|| FormatError::UnknownFamily(s.to_string()))
    }

}

/// Metadata every distribution carries besides its parameter values: its family,
/// the (fixed) number of parameters, an optional instance name and per-parameter
/// display names. Parameter names are grown lazily, so a distribution with only
/// its last parameter named reports NO_NAME for all others.
#[derive(Debug, Clone, PartialEq)]
pub struct DistMeta {

    family : Family,

    num_params : usize,

    name : Option<String>,

    param_names : Vec<String>
}

impl DistMeta {

    pub fn new(family : Family, num_params : usize) -> Self {
        Self { family, num_params, name : None, param_names : Vec::new() }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn num_params(&self) -> usize {
        self.num_params
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name : &str) {
        self.name = Some(name.to_string());
    }

    pub fn param_name(&self, index : usize) -> &str {
        check_param_index(self.family, index, self.num_params);
        self.param_names.get(index).map(|n| n.as_str()).unwrap_or(NO_NAME)
    }

    /// Names the parameter at index. Panics unless valid_param_name(name).
    pub fn set_param_name(&mut self, name : &str, index : usize) {
        check_param_index(self.family, index, self.num_params);
        assert!(
            valid_param_name(name),
            "Parameter name '{}' cannot contain '=', line breaks or surrounding whitespace", name
        );
        if self.param_names.len() <= index {
            self.param_names.resize(index + 1, NO_NAME.to_string());
        }
        self.param_names[index] = name.to_string();
    }

}

/// Parameter names end up as keys of key=value lines, which are trimmed when read:
/// a valid name has no '=', no line breaks and no leading or trailing whitespace.
pub fn valid_param_name(name : &str) -> bool {
    !name.contains(|c : char| c == '=' || c == '\n' || c == '\r') && name.trim() == name
}

/// Panics if index does not address one of the num_params parameters of a family.
pub(crate) fn check_param_index(family : Family, index : usize, num_params : usize) {
    assert!(
        index < num_params,
        "Parameter index {} out of range for {} distribution with {} parameters",
        index,
        family,
        num_params
    );
}

/// Trait shared by all univariate distributions used as priors over model parameters.
/// A distribution is defined by a fixed-size vector of scalar parameters, which can
/// be inspected and changed via param/set_param. The log-density and its derivative are
/// evaluated with respect to a value x, which is usually a parameter of some other
/// (regularizable) model; the derivative returned by grad_input is with respect to x
/// and not with respect to the parameters of the distribution itself.
///
/// The trait is object-safe: priors are stored as Box<dyn Distribution> and built at
/// runtime from their family tag (see read_dist).
pub trait Distribution : Debug + Send + Sync {

    /// Acquires a reference to the distribution metadata.
    fn meta(&self) -> &DistMeta;

    fn meta_mut(&mut self) -> &mut DistMeta;

    /// Returns the parameter at the informed position. Panics if
    /// index >= num_params().
    fn param(&self, index : usize) -> f64;

    /// Sets the parameter at the informed position. Panics if
    /// index >= num_params().
    fn set_param(&mut self, val : f64, index : usize);

    /// Log-density at x under the current parameters. Values outside the support of
    /// the family evaluate to -inf.
    fn log_prob(&self, x : f64) -> f64;

    /// Derivative of log_prob with respect to x. This is the quantity added to the
    /// gradient of a model whose parameter at some index has this distribution as prior.
    fn grad_input(&self, x : f64) -> f64;

    /// Resets the parameters to the family default starting point.
    fn set_init_param(&mut self);

    /// Clones self into a new boxed trait object.
    fn box_clone(&self) -> Box<dyn Distribution>;

    fn num_params(&self) -> usize {
        self.meta().num_params()
    }

    fn family(&self) -> Family {
        self.meta().family()
    }

    /// Textual family tag, used as dispatch key by read_dist.
    fn type_tag(&self) -> &'static str {
        self.meta().family().tag()
    }

    fn name(&self) -> Option<&str> {
        self.meta().name()
    }

    fn set_name(&mut self, name : &str) {
        self.meta_mut().set_name(name)
    }

    fn param_name(&self, index : usize) -> &str {
        self.meta().param_name(index)
    }

    fn set_param_name(&mut self, name : &str, index : usize) {
        self.meta_mut().set_param_name(name, index)
    }

    /// Copies the parameters into a newly-allocated vector, in parameter order.
    fn params(&self) -> Vec<f64> {
        (0..self.num_params()).map(|i| self.param(i) ).collect()
    }

    /// Sum of the log-densities of all entries of x, which are taken as independent
    /// draws from this distribution.
    fn log_prob_matrix(&self, x : &DMatrix<f64>) -> f64 {
        let mut lp = 0.0;
        for i in 0..x.nrows() {
            for j in 0..x.ncols() {
                lp += self.log_prob(x[(i, j)]);
            }
        }
        lp
    }

    /// Writes grad_input of every entry of x into the same position of g.
    /// Panics if g and x have different shapes.
    fn grad_inputs(&self, g : &mut DMatrix<f64>, x : &DMatrix<f64>) {
        assert!(
            g.shape() == x.shape(),
            "Gradient matrix has shape {:?} but input has shape {:?}",
            g.shape(),
            x.shape()
        );
        for i in 0..x.nrows() {
            for j in 0..x.ncols() {
                g[(i, j)] = self.grad_input(x[(i, j)]);
            }
        }
    }

    /// Gradient of the log-density with respect to the parameters of the distribution.
    /// Only distributions which are themselves treated as regularizable models need it;
    /// none of the built-in families provide it, and calling it on them panics.
    fn grad_params(&self, _g : &mut RowDVector<f64>) {
        panic!("grad_params is not available for the {} distribution", self.family());
    }

    /// Writes the number of parameters followed by one name=value line per parameter.
    fn write_params(&self, out : &mut dyn Write) -> Result<()> {
        writeln!(out, "numParams={}", self.num_params())?;
        for i in 0..self.num_params() {
            writeln!(out, "{}={}", self.param_name(i), self.param(i))?;
        }
        Ok(())
    }

    /// Reads the block written by write_params. The distribution is left unchanged
    /// unless the whole block is valid.
    fn read_params(&mut self, input : &mut dyn BufRead) -> Result<()> {
        let n : usize = io::parse_value("numParams", &io::read_value(input, "numParams")?)?;
        if n != self.num_params() {
            return Err(FormatError::ParamCount {
                family : self.family(),
                expected : self.num_params(),
                found : n
            }.into());
        }
        let mut params = Vec::with_capacity(n);
        for _ in 0..n {
            let (name, value) = io::read_pair(input)?;
            if !valid_param_name(&name) {
                return Err(FormatError::InvalidName(name).into());
            }
            let val : f64 = io::parse_value(&name, &value)?;
            params.push((name, val));
        }
        for (i, (name, val)) in params.iter().enumerate() {
            self.set_param_name(name, i);
            self.set_param(*val, i);
        }
        Ok(())
    }

}

impl Clone for Box<dyn Distribution> {

    fn clone(&self) -> Self {
        self.box_clone()
    }

}

/// Writes the type tag of the distribution followed by its parameter block.
pub fn write_dist(dist : &dyn Distribution, out : &mut dyn Write) -> Result<()> {
    writeln!(out, "type={}", dist.type_tag())?;
    dist.write_params(out)
}

/// Reads a distribution written by write_dist, building it from the family named
/// by its type tag.
pub fn read_dist(input : &mut dyn BufRead) -> Result<Box<dyn Distribution>> {
    let family : Family = io::read_value(input, "type")?.parse()?;
    let mut dist = family.instantiate();
    dist.read_params(input)?;
    Ok(dist)
}
