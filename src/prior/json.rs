use super::*;
use std::convert::TryFrom;
use serde_json::{json, Value};
use crate::distr::{dist_to_value, dist_from_value};
use crate::distr::json::invalid;
use crate::error::Error;

/// Prior sets are represented as an array of { "index" : .., "dist" : .. } objects,
/// in binding order.
impl From<&ParamPriors> for Value {

    fn from(priors : &ParamPriors) -> Value {
        let bindings : Vec<Value> = priors.iter()
            .map(|b| json!({ "index" : b.param_index(), "dist" : dist_to_value(b.dist()) }) )
            .collect();
        Value::Array(bindings)
    }

}

impl TryFrom<Value> for ParamPriors {

    type Error = Error;

    fn try_from(val : Value) -> Result<Self, Error> {
        let entries = val.as_array().ok_or_else(|| invalid("priors should be an array"))?;
        let mut priors = ParamPriors::new();
        for entry in entries.iter() {
            let index = entry.get("index")
                .and_then(|i| i.as_u64())
                .ok_or_else(|| invalid("prior index should be a non-negative integer"))?;
            let dist = entry.get("dist").ok_or_else(|| invalid("missing prior distribution"))?;
            priors.add(dist_from_value(dist)?, index as usize);
        }
        Ok(priors)
    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::distr::*;

    #[test]
    fn priors_value() {
        let mut priors = ParamPriors::new();
        priors.add(Box::new(Gaussian::new(3.)), 1);
        priors.add(Box::new(Gamma::new(2., 2.)), 1);
        let val : Value = (&priors).into();
        assert_eq!(val[1]["index"], 1);
        let back = ParamPriors::try_from(val).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.family(0), Family::Gaussian);
        assert_eq!(back.dist(1).params(), vec![2., 2.]);
    }

    #[test]
    fn negative_index() {
        let val = json!([{ "index" : -1, "dist" : dist_to_value(&Wang::default()) }]);
        assert!(ParamPriors::try_from(val).unwrap_err().is_format());
    }

}
