//! Certification: a credential issued to the author.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  record::{Editable, Record, RecordId},
  validate::{Fields, Validation},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
  pub id:             RecordId,
  pub name:           String,
  pub issuer:         String,
  /// Free text, e.g. `"2024"` or `"March 2023"`.
  pub date_issued:    String,
  pub credential_url: Option<String>,
  pub description:    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCertification {
  pub name:           String,
  pub issuer:         String,
  pub date_issued:    String,
  pub credential_url: Option<String>,
  pub description:    String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationPatch {
  pub name:           Option<String>,
  pub issuer:         Option<String>,
  pub date_issued:    Option<String>,
  pub credential_url: Option<Option<String>>,
  pub description:    Option<String>,
}

impl Record for Certification {
  type New = NewCertification;

  const NAME: &'static str = "certification";
  const TITLE: &'static str = "Certification";

  fn id(&self) -> &RecordId { &self.id }

  fn validate_new(body: &Value) -> Validation<NewCertification> {
    let mut f = Fields::new(body);
    let name = f.required_str("name");
    let issuer = f.required_str("issuer");
    let date_issued = f.required_str("dateIssued");
    let credential_url = f.nullable_str("credentialUrl");
    let description = f.required_str("description");
    f.finish(|| NewCertification {
      name:           name.unwrap_or_default(),
      issuer:         issuer.unwrap_or_default(),
      date_issued:    date_issued.unwrap_or_default(),
      credential_url: credential_url.flatten(),
      description:    description.unwrap_or_default(),
    })
  }
}

impl Editable for Certification {
  type Patch = CertificationPatch;

  fn from_new(id: RecordId, new: NewCertification) -> Self {
    Self {
      id,
      name: new.name,
      issuer: new.issuer,
      date_issued: new.date_issued,
      credential_url: new.credential_url,
      description: new.description,
    }
  }

  fn apply(&mut self, patch: CertificationPatch) {
    if let Some(v) = patch.name { self.name = v; }
    if let Some(v) = patch.issuer { self.issuer = v; }
    if let Some(v) = patch.date_issued { self.date_issued = v; }
    if let Some(v) = patch.credential_url { self.credential_url = v; }
    if let Some(v) = patch.description { self.description = v; }
  }

  fn validate_patch(body: &Value) -> Validation<CertificationPatch> {
    let mut f = Fields::new(body);
    let patch = CertificationPatch {
      name:           f.optional_str("name"),
      issuer:         f.optional_str("issuer"),
      date_issued:    f.optional_str("dateIssued"),
      credential_url: f.nullable_str("credentialUrl"),
      description:    f.optional_str("description"),
    };
    f.finish(|| patch)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn credential_url_is_optional() {
    let Validation::Valid(new) = Certification::validate_new(&json!({
      "name": "CKA", "issuer": "CNCF", "dateIssued": "2024",
      "description": "Kubernetes administration"
    })) else {
      panic!("expected valid");
    };
    assert_eq!(new.credential_url, None);
    let cert = Certification::from_new(RecordId::from("c"), new);
    let wire = serde_json::to_value(&cert).unwrap();
    assert_eq!(wire["dateIssued"], "2024");
    assert_eq!(wire["credentialUrl"], Value::Null);
  }

  #[test]
  fn snake_case_keys_are_not_accepted() {
    let v = Certification::validate_new(&json!({
      "name": "CKA", "issuer": "CNCF", "date_issued": "2024", "description": "d"
    }));
    let Validation::Invalid(reasons) = v else { panic!("expected invalid") };
    assert_eq!(reasons, vec!["dateIssued: required".to_owned()]);
  }
}
