//! Project: a showcased piece of work.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  record::{Editable, Flag, Record, RecordId},
  validate::{Fields, Validation},
};

pub(crate) const FLAG_EXPECTED: &str = "\"true\" or \"false\"";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:           RecordId,
  pub title:        String,
  pub description:  String,
  /// Cover image URL.
  pub image:        String,
  pub live_url:     Option<String>,
  pub github_url:   Option<String>,
  /// Ordered; duplicates are kept.
  pub technologies: Vec<String>,
  pub featured:     Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
  pub title:        String,
  pub description:  String,
  pub image:        String,
  pub live_url:     Option<String>,
  pub github_url:   Option<String>,
  pub technologies: Vec<String>,
  pub featured:     Flag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
  pub title:        Option<String>,
  pub description:  Option<String>,
  pub image:        Option<String>,
  pub live_url:     Option<Option<String>>,
  pub github_url:   Option<Option<String>>,
  pub technologies: Option<Vec<String>>,
  pub featured:     Option<Flag>,
}

impl Record for Project {
  type New = NewProject;

  const NAME: &'static str = "project";
  const TITLE: &'static str = "Project";

  fn id(&self) -> &RecordId { &self.id }

  fn validate_new(body: &Value) -> Validation<NewProject> {
    let mut f = Fields::new(body);
    let title = f.required_str("title");
    let description = f.required_str("description");
    let image = f.required_str("image");
    let live_url = f.nullable_str("liveUrl");
    let github_url = f.nullable_str("githubUrl");
    let technologies = f.string_list("technologies");
    let featured = f.parsed::<Flag>("featured", false, FLAG_EXPECTED);
    f.finish(|| NewProject {
      title:        title.unwrap_or_default(),
      description:  description.unwrap_or_default(),
      image:        image.unwrap_or_default(),
      live_url:     live_url.flatten(),
      github_url:   github_url.flatten(),
      technologies: technologies.unwrap_or_default(),
      featured:     featured.unwrap_or_default(),
    })
  }
}

impl Editable for Project {
  type Patch = ProjectPatch;

  fn from_new(id: RecordId, new: NewProject) -> Self {
    Self {
      id,
      title: new.title,
      description: new.description,
      image: new.image,
      live_url: new.live_url,
      github_url: new.github_url,
      technologies: new.technologies,
      featured: new.featured,
    }
  }

  fn apply(&mut self, patch: ProjectPatch) {
    if let Some(v) = patch.title { self.title = v; }
    if let Some(v) = patch.description { self.description = v; }
    if let Some(v) = patch.image { self.image = v; }
    if let Some(v) = patch.live_url { self.live_url = v; }
    if let Some(v) = patch.github_url { self.github_url = v; }
    if let Some(v) = patch.technologies { self.technologies = v; }
    if let Some(v) = patch.featured { self.featured = v; }
  }

  fn validate_patch(body: &Value) -> Validation<ProjectPatch> {
    let mut f = Fields::new(body);
    let patch = ProjectPatch {
      title:        f.optional_str("title"),
      description:  f.optional_str("description"),
      image:        f.optional_str("image"),
      live_url:     f.nullable_str("liveUrl"),
      github_url:   f.nullable_str("githubUrl"),
      technologies: f.string_list("technologies"),
      featured:     f.parsed("featured", false, FLAG_EXPECTED),
    };
    f.finish(|| patch)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn missing_technologies_and_featured_take_defaults() {
    let v = Project::validate_new(&json!({
      "title": "X", "description": "d", "image": "http://i"
    }));
    let Validation::Valid(new) = v else { panic!("expected valid") };
    assert!(new.technologies.is_empty());
    assert_eq!(new.featured, Flag::False);

    let project = Project::from_new(RecordId::from("p"), new);
    let wire = serde_json::to_value(&project).unwrap();
    assert_eq!(wire["technologies"], json!([]));
    assert_eq!(wire["featured"], "false");
    assert_eq!(wire["liveUrl"], Value::Null);
  }

  #[test]
  fn null_technologies_is_rejected() {
    let v = Project::validate_new(&json!({
      "title": "X", "description": "d", "image": "i", "technologies": null
    }));
    assert!(!v.is_valid());
  }

  #[test]
  fn boolean_featured_is_rejected() {
    let v = Project::validate_patch(&json!({ "featured": true }));
    let Validation::Invalid(reasons) = v else { panic!("expected invalid") };
    assert_eq!(reasons, vec!["featured: expected a string".to_owned()]);
  }

  #[test]
  fn technologies_keep_order_and_duplicates() {
    let v = Project::validate_new(&json!({
      "title": "X", "description": "d", "image": "i",
      "technologies": ["Rust", "Go", "Rust"], "featured": "true"
    }));
    let Validation::Valid(new) = v else { panic!("expected valid") };
    assert_eq!(new.technologies, vec!["Rust", "Go", "Rust"]);
    assert!(new.featured.is_set());
  }
}
