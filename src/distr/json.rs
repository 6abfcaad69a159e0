use super::*;
use serde_json::{json, Value};
use crate::error::Error;
use crate::DIST_VERSION;

pub(crate) fn invalid(msg : impl Into<String>) -> Error {
    FormatError::InvalidValue(msg.into()).into()
}

/// Represents the distribution as a JSON object:
///
/// ```json
/// { "version" : "0.1", "type" : "gamma", "name" : null,
///   "params" : [ { "name" : "a", "value" : 1.0 }, { "name" : "b", "value" : 1.0 } ] }
/// ```
///
/// JSON has no representation for non-finite numbers: a NaN or infinite parameter is
/// written as null, and dist_from_value rejects it.
pub fn dist_to_value(dist : &dyn Distribution) -> Value {
    let params : Vec<Value> = (0..dist.num_params())
        .map(|i| json!({ "name" : dist.param_name(i), "value" : dist.param(i) }) )
        .collect();
    json!({
        "version" : DIST_VERSION,
        "type" : dist.type_tag(),
        "name" : dist.name(),
        "params" : params
    })
}

/// Builds a distribution from the object produced by dist_to_value.
pub fn dist_from_value(val : &Value) -> Result<Box<dyn Distribution>> {
    let obj = val.as_object().ok_or_else(|| invalid("distribution should be an object"))?;
    match obj.get("version").and_then(|v| v.as_str()) {
        Some(v) if v == DIST_VERSION => { },
        Some(v) => return Err(invalid(format!("unsupported distribution version {}", v))),
        None => return Err(invalid("missing distribution version"))
    }
    let tag = obj.get("type")
        .and_then(|t| t.as_str())
        .ok_or_else(|| invalid("missing distribution type"))?;
    let family : Family = tag.parse()?;
    let params = obj.get("params")
        .and_then(|p| p.as_array())
        .ok_or_else(|| invalid("params should be an array"))?;
    if params.len() != family.num_params() {
        return Err(FormatError::ParamCount {
            family,
            expected : family.num_params(),
            found : params.len()
        }.into());
    }
    let mut dist = family.instantiate();
    if let Some(name) = obj.get("name").and_then(|n| n.as_str()) {
        dist.set_name(name);
    }
    for (i, p) in params.iter().enumerate() {
        let value = p.get("value")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| invalid(format!("parameter {} should have a numeric value", i)))?;
        if let Some(name) = p.get("name").and_then(|n| n.as_str()) {
            if !valid_param_name(name) {
                return Err(FormatError::InvalidName(name.to_string()).into());
            }
            dist.set_param_name(name, i);
        }
        dist.set_param(value, i);
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn gamma_value() {
        let mut g = Gamma::new(2., 3.);
        g.set_name("noise");
        let val = dist_to_value(&g);
        assert_eq!(val["type"], "gamma");
        assert_eq!(val["name"], "noise");
        assert_eq!(val["params"][1]["name"], "b");
        let back = dist_from_value(&val).unwrap();
        assert_eq!(back.family(), Family::Gamma);
        assert_eq!(back.name(), Some("noise"));
        assert_eq!(back.params(), vec![2., 3.]);
    }

    #[test]
    fn non_finite_params_do_not_read_back() {
        let val = dist_to_value(&Gaussian::new(f64::INFINITY));
        assert!(val["params"][0]["value"].is_null());
        assert!(dist_from_value(&val).unwrap_err().is_format());
    }

    #[test]
    fn rejects_padded_names() {
        let mut val = dist_to_value(&Wang::new(2.));
        val["params"][0]["name"] = json!(" M");
        assert!(dist_from_value(&val).unwrap_err().is_format());
    }

    #[test]
    fn rejects_other_versions() {
        let mut val = dist_to_value(&Wang::new(2.));
        val["version"] = json!("0.0");
        assert!(dist_from_value(&val).unwrap_err().is_format());
    }

}
