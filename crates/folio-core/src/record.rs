//! Identifiers, the `true`/`false` text flag, and the traits every stored
//! entity implements.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

use crate::{Error, validate::Validation};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// An opaque, globally unique record identifier.
///
/// Fresh identifiers are v4 UUIDs rendered as strings, but callers must not
/// rely on that: any string is accepted when looking a record up, and an
/// unknown one is simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
  /// Generate a fresh identifier.
  pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for RecordId {
  fn from(s: String) -> Self { Self(s) }
}

impl From<&str> for RecordId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Flag ────────────────────────────────────────────────────────────────────

/// A boolean that travels as the literal string `"true"` or `"false"`.
///
/// Used for `Project::featured` and `Experience::current`. The wire form is
/// part of the interface, so this never serializes as a JSON boolean.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum Flag {
  #[serde(rename = "true")]
  True,
  #[default]
  #[serde(rename = "false")]
  False,
}

impl Flag {
  pub fn is_set(self) -> bool { matches!(self, Self::True) }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::True => "true",
      Self::False => "false",
    }
  }
}

impl From<bool> for Flag {
  fn from(b: bool) -> Self { if b { Self::True } else { Self::False } }
}

impl FromStr for Flag {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "true" => Ok(Self::True),
      "false" => Ok(Self::False),
      other => Err(Error::UnknownFlag(other.to_owned())),
    }
  }
}

impl fmt::Display for Flag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// A stored entity with a server-assigned identifier and an insert shape
/// that is validated from raw JSON.
pub trait Record:
  Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// The validated insert shape (everything except server-assigned fields).
  type New: Send + 'static;

  /// Lowercase singular noun used in messages, e.g. `"skill"`.
  const NAME: &'static str;

  /// Capitalised form of [`Record::NAME`], e.g. `"Skill"`.
  const TITLE: &'static str;

  fn id(&self) -> &RecordId;

  /// Check a full insert body.
  fn validate_new(body: &Value) -> Validation<Self::New>;
}

/// A record that supports shallow-merge updates.
pub trait Editable: Record {
  /// Every field optional; absent fields leave the record untouched.
  type Patch: Default + Send + 'static;

  /// Build the stored value from a validated insert shape.
  fn from_new(id: RecordId, new: Self::New) -> Self;

  /// Merge the supplied fields into `self`. The identifier never changes.
  fn apply(&mut self, patch: Self::Patch);

  /// Check a partial body; only the supplied fields are validated.
  fn validate_patch(body: &Value) -> Validation<Self::Patch>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flag_round_trips_as_string() {
    assert_eq!(serde_json::to_value(Flag::True).unwrap(), "true");
    assert_eq!(serde_json::to_value(Flag::False).unwrap(), "false");
    let f: Flag = serde_json::from_value(Value::from("true")).unwrap();
    assert!(f.is_set());
  }

  #[test]
  fn flag_rejects_native_booleans_and_other_text() {
    assert!(serde_json::from_value::<Flag>(Value::Bool(true)).is_err());
    assert!("yes".parse::<Flag>().is_err());
    assert_eq!("false".parse::<Flag>().unwrap(), Flag::False);
  }

  #[test]
  fn generated_ids_are_distinct() {
    let a = RecordId::generate();
    let b = RecordId::generate();
    assert_ne!(a, b);
    assert!(!a.as_str().is_empty());
  }
}
