use crate::distr::{Distribution, Family};

#[cfg(feature = "json")]
mod json;

/// A distribution attached to the parameter at position param_index of some model.
#[derive(Debug, Clone)]
pub struct Binding {

    param_index : usize,

    dist : Box<dyn Distribution>
}

impl Binding {

    pub fn new(dist : Box<dyn Distribution>, param_index : usize) -> Self {
        Self { param_index, dist }
    }

    pub fn param_index(&self) -> usize {
        self.param_index
    }

    pub fn dist(&self) -> &dyn Distribution {
        &*self.dist
    }

    pub fn dist_mut(&mut self) -> &mut dyn Distribution {
        &mut *self.dist
    }

}

/// Ordered set of priors over the parameters of a model. The same parameter may
/// receive several priors, whose contributions are then summed by the model.
/// ParamPriors owns its distributions and does not evaluate them: the
/// log-probability and gradient aggregation lives in Regularizable, which knows
/// the current parameter values.
///
/// Unlike the positions passed to Regularizable::add_prior, this container does not
/// know how many parameters the model has; positions i taken by dist/param_index/family_tag
/// refer to the order of insertion of the bindings.
#[derive(Debug, Clone, Default)]
pub struct ParamPriors {
    bindings : Vec<Binding>
}

impl ParamPriors {

    pub fn new() -> Self {
        Default::default()
    }

    pub fn add(&mut self, dist : Box<dyn Distribution>, param_index : usize) {
        self.bindings.push(Binding::new(dist, param_index));
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn binding(&self, i : usize) -> &Binding {
        assert!(i < self.len(), "Prior {} out of range ({} priors)", i, self.len());
        &self.bindings[i]
    }

    pub fn dist(&self, i : usize) -> &dyn Distribution {
        self.binding(i).dist()
    }

    pub fn dist_mut(&mut self, i : usize) -> &mut dyn Distribution {
        assert!(i < self.len(), "Prior {} out of range ({} priors)", i, self.len());
        self.bindings[i].dist_mut()
    }

    pub fn param_index(&self, i : usize) -> usize {
        self.binding(i).param_index()
    }

    pub fn family_tag(&self, i : usize) -> &'static str {
        self.binding(i).dist().type_tag()
    }

    pub fn family(&self, i : usize) -> Family {
        self.binding(i).dist().family()
    }

    pub fn iter(&self) -> impl Iterator<Item=&Binding> {
        self.bindings.iter()
    }

}

impl<'a> IntoIterator for &'a ParamPriors {

    type Item = &'a Binding;

    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }

}
