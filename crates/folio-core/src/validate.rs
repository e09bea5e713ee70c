//! Shape validation for insert and patch bodies.
//!
//! Each entity module exposes a pair of functions that read a raw JSON value
//! through [`Fields`] and produce a [`Validation`]. Unknown keys are ignored,
//! so server-assigned fields such as `id` or `createdAt` can never be set by a
//! client.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Outcome of checking a body against an entity's declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
  Valid(T),
  /// One human-readable reason per offending field.
  Invalid(Vec<String>),
}

impl<T> Validation<T> {
  pub fn is_valid(&self) -> bool { matches!(self, Self::Valid(_)) }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
    match self {
      Self::Valid(v) => Validation::Valid(f(v)),
      Self::Invalid(r) => Validation::Invalid(r),
    }
  }

  /// Convert into a [`Result`], tagging failures with the entity name.
  pub fn into_result(self, entity: &'static str) -> Result<T> {
    match self {
      Self::Valid(v) => Ok(v),
      Self::Invalid(reasons) => Err(Error::Invalid { entity, reasons }),
    }
  }
}

/// Accumulating reader over the fields of a JSON object.
///
/// Each accessor returns `None` when the field is absent *or* malformed; in
/// the latter case a reason is recorded. [`Fields::finish`] only builds the
/// value when no reason was recorded, so builders may safely default any
/// `None` they receive from a required accessor.
pub struct Fields<'a> {
  map:     Option<&'a Map<String, Value>>,
  reasons: Vec<String>,
}

impl<'a> Fields<'a> {
  pub fn new(body: &'a Value) -> Self {
    match body {
      Value::Object(map) => Self { map: Some(map), reasons: Vec::new() },
      _ => Self {
        map:     None,
        reasons: vec!["body: expected a JSON object".to_owned()],
      },
    }
  }

  fn lookup(&self, key: &str) -> Option<&'a Value> {
    self.map.and_then(|m| m.get(key))
  }

  fn reject(&mut self, key: &str, why: &str) {
    self.reasons.push(format!("{key}: {why}"));
  }

  /// A string that must be present.
  pub fn required_str(&mut self, key: &str) -> Option<String> {
    if self.map.is_some() && self.lookup(key).is_none() {
      self.reject(key, "required");
      return None;
    }
    self.optional_str(key)
  }

  /// A non-nullable string that may be omitted.
  pub fn optional_str(&mut self, key: &str) -> Option<String> {
    match self.lookup(key)? {
      Value::String(s) => Some(s.clone()),
      _ => {
        self.reject(key, "expected a string");
        None
      }
    }
  }

  /// A nullable string that may be omitted.
  ///
  /// Absent yields `None`, `null` yields `Some(None)`.
  pub fn nullable_str(&mut self, key: &str) -> Option<Option<String>> {
    match self.lookup(key)? {
      Value::Null => Some(None),
      Value::String(s) => Some(Some(s.clone())),
      _ => {
        self.reject(key, "expected a string or null");
        None
      }
    }
  }

  /// An array of strings that may be omitted. `null` is rejected.
  pub fn string_list(&mut self, key: &str) -> Option<Vec<String>> {
    let Value::Array(items) = self.lookup(key)? else {
      self.reject(key, "expected an array of strings");
      return None;
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
      match item {
        Value::String(s) => out.push(s.clone()),
        _ => {
          self.reject(key, "expected an array of strings");
          return None;
        }
      }
    }
    Some(out)
  }

  /// A string field parsed through [`FromStr`].
  ///
  /// `expected` describes the accepted values for the failure reason.
  pub fn parsed<T: FromStr>(
    &mut self,
    key: &str,
    required: bool,
    expected: &str,
  ) -> Option<T> {
    let raw = if required {
      self.required_str(key)?
    } else {
      self.optional_str(key)?
    };
    match raw.parse() {
      Ok(v) => Some(v),
      Err(_) => {
        self.reject(key, &format!("expected {expected}"));
        None
      }
    }
  }

  /// Record a reason for `key` unless `ok` holds.
  pub fn ensure(&mut self, key: &str, ok: bool, why: &str) {
    if !ok {
      self.reject(key, why);
    }
  }

  /// Produce the final outcome, calling `build` only if every field passed.
  pub fn finish<T>(self, build: impl FnOnce() -> T) -> Validation<T> {
    if self.reasons.is_empty() {
      Validation::Valid(build())
    } else {
      Validation::Invalid(self.reasons)
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::Flag;

  #[test]
  fn non_object_body_is_invalid() {
    let body = json!(["not", "an", "object"]);
    let mut f = Fields::new(&body);
    assert!(f.required_str("name").is_none());
    let Validation::Invalid(reasons) = f.finish(|| ()) else {
      panic!("expected invalid");
    };
    assert_eq!(reasons, vec!["body: expected a JSON object".to_owned()]);
  }

  #[test]
  fn required_and_optional_strings() {
    let body = json!({ "name": "Ada", "title": 7 });
    let mut f = Fields::new(&body);
    assert_eq!(f.required_str("name").as_deref(), Some("Ada"));
    assert!(f.required_str("email").is_none());
    assert!(f.optional_str("title").is_none());
    assert!(f.optional_str("missing").is_none());
    let Validation::Invalid(reasons) = f.finish(|| ()) else {
      panic!("expected invalid");
    };
    assert_eq!(reasons, vec![
      "email: required".to_owned(),
      "title: expected a string".to_owned(),
    ]);
  }

  #[test]
  fn nullable_distinguishes_null_from_absent() {
    let body = json!({ "a": null, "b": "x" });
    let mut f = Fields::new(&body);
    assert_eq!(f.nullable_str("a"), Some(None));
    assert_eq!(f.nullable_str("b"), Some(Some("x".to_owned())));
    assert_eq!(f.nullable_str("c"), None);
    assert!(f.finish(|| ()).is_valid());
  }

  #[test]
  fn string_list_rejects_mixed_arrays_and_null() {
    let body = json!({ "ok": ["Go", "Go"], "mixed": ["Go", 1], "nil": null });
    let mut f = Fields::new(&body);
    assert_eq!(f.string_list("ok"), Some(vec!["Go".into(), "Go".into()]));
    assert!(f.string_list("mixed").is_none());
    assert!(f.string_list("nil").is_none());
    let Validation::Invalid(reasons) = f.finish(|| ()) else {
      panic!("expected invalid");
    };
    assert_eq!(reasons.len(), 2);
  }

  #[test]
  fn parsed_reports_expected_values() {
    let body = json!({ "featured": "maybe" });
    let mut f = Fields::new(&body);
    assert!(f.parsed::<Flag>("featured", false, "\"true\" or \"false\"").is_none());
    let Validation::Invalid(reasons) = f.finish(|| ()) else {
      panic!("expected invalid");
    };
    assert_eq!(reasons, vec![
      "featured: expected \"true\" or \"false\"".to_owned()
    ]);
  }

  #[test]
  fn into_result_tags_entity() {
    let v: Validation<()> = Validation::Invalid(vec!["name: required".into()]);
    let err = v.into_result("skill").unwrap_err();
    assert_eq!(err.to_string(), "invalid skill data: name: required");
  }
}
