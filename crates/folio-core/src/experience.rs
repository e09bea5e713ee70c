//! Experience: a position on the author's work timeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  project::FLAG_EXPECTED,
  record::{Editable, Flag, Record, RecordId},
  validate::{Fields, Validation},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
  pub id:           RecordId,
  pub title:        String,
  pub company:      String,
  /// Free text, e.g. `"2020 - 2022"`.
  pub duration:     String,
  pub description:  String,
  pub technologies: Vec<String>,
  /// Whether this is the author's current position.
  pub current:      Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
  pub title:        String,
  pub company:      String,
  pub duration:     String,
  pub description:  String,
  pub technologies: Vec<String>,
  pub current:      Flag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
  pub title:        Option<String>,
  pub company:      Option<String>,
  pub duration:     Option<String>,
  pub description:  Option<String>,
  pub technologies: Option<Vec<String>>,
  pub current:      Option<Flag>,
}

impl Record for Experience {
  type New = NewExperience;

  const NAME: &'static str = "experience";
  const TITLE: &'static str = "Experience";

  fn id(&self) -> &RecordId { &self.id }

  fn validate_new(body: &Value) -> Validation<NewExperience> {
    let mut f = Fields::new(body);
    let title = f.required_str("title");
    let company = f.required_str("company");
    let duration = f.required_str("duration");
    let description = f.required_str("description");
    let technologies = f.string_list("technologies");
    let current = f.parsed::<Flag>("current", false, FLAG_EXPECTED);
    f.finish(|| NewExperience {
      title:        title.unwrap_or_default(),
      company:      company.unwrap_or_default(),
      duration:     duration.unwrap_or_default(),
      description:  description.unwrap_or_default(),
      technologies: technologies.unwrap_or_default(),
      current:      current.unwrap_or_default(),
    })
  }
}

impl Editable for Experience {
  type Patch = ExperiencePatch;

  fn from_new(id: RecordId, new: NewExperience) -> Self {
    Self {
      id,
      title: new.title,
      company: new.company,
      duration: new.duration,
      description: new.description,
      technologies: new.technologies,
      current: new.current,
    }
  }

  fn apply(&mut self, patch: ExperiencePatch) {
    if let Some(v) = patch.title { self.title = v; }
    if let Some(v) = patch.company { self.company = v; }
    if let Some(v) = patch.duration { self.duration = v; }
    if let Some(v) = patch.description { self.description = v; }
    if let Some(v) = patch.technologies { self.technologies = v; }
    if let Some(v) = patch.current { self.current = v; }
  }

  fn validate_patch(body: &Value) -> Validation<ExperiencePatch> {
    let mut f = Fields::new(body);
    let patch = ExperiencePatch {
      title:        f.optional_str("title"),
      company:      f.optional_str("company"),
      duration:     f.optional_str("duration"),
      description:  f.optional_str("description"),
      technologies: f.string_list("technologies"),
      current:      f.parsed("current", false, FLAG_EXPECTED),
    };
    f.finish(|| patch)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn current_flag_serializes_as_text() {
    let Validation::Valid(new) = Experience::validate_new(&json!({
      "title": "Engineer", "company": "Acme", "duration": "2024 - Present",
      "description": "Built things", "current": "true"
    })) else {
      panic!("expected valid");
    };
    let exp = Experience::from_new(RecordId::from("e"), new);
    let wire = serde_json::to_value(&exp).unwrap();
    assert_eq!(wire["current"], "true");
    assert_eq!(wire["technologies"], json!([]));
  }

  #[test]
  fn patch_replaces_technologies_wholesale() {
    let mut exp = Experience::from_new(RecordId::from("e"), NewExperience {
      title:        "Engineer".into(),
      company:      "Acme".into(),
      duration:     "2024".into(),
      description:  "d".into(),
      technologies: vec!["Go".into(), "SQL".into()],
      current:      Flag::False,
    });
    let Validation::Valid(patch) =
      Experience::validate_patch(&json!({ "technologies": ["Rust"] }))
    else {
      panic!("expected valid patch");
    };
    exp.apply(patch);
    assert_eq!(exp.technologies, vec!["Rust"]);
    assert_eq!(exp.company, "Acme");
  }

  #[test]
  fn missing_company_is_reported() {
    let v = Experience::validate_new(&json!({
      "title": "Engineer", "duration": "2024", "description": "d"
    }));
    let Validation::Invalid(reasons) = v else { panic!("expected invalid") };
    assert_eq!(reasons, vec!["company: required".to_owned()]);
  }
}
