//! Skill: a technology with a self-assessed proficiency.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
  record::{Editable, Record, RecordId},
  validate::{Fields, Validation},
};

/// Icon names the presentation layer knows how to render.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
pub enum SkillIcon {
  SiPython,
  SiC,
  SiCplusplus,
  SiJavascript,
  SiHtml5,
  SiReact,
  SiFlask,
  SiTensorflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
  pub id:          RecordId,
  pub name:        String,
  /// Integer percentage `0..=100`, kept as text.
  pub proficiency: String,
  pub icon:        SkillIcon,
  pub category:    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
  pub name:        String,
  pub proficiency: String,
  pub icon:        SkillIcon,
  pub category:    String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
  pub name:        Option<String>,
  pub proficiency: Option<String>,
  pub icon:        Option<SkillIcon>,
  pub category:    Option<String>,
}

const ICON_EXPECTED: &str = "a known icon name";

/// Whether `raw` is an integer percentage. Leading `+` and whitespace are
/// rejected so the stored text stays canonical.
pub fn is_valid_proficiency(raw: &str) -> bool {
  raw.bytes().all(|b| b.is_ascii_digit())
    && raw.parse::<u8>().is_ok_and(|p| p <= 100)
}

fn proficiency(f: &mut Fields<'_>, required: bool) -> Option<String> {
  let raw = if required {
    f.required_str("proficiency")?
  } else {
    f.optional_str("proficiency")?
  };
  let ok = is_valid_proficiency(&raw);
  f.ensure("proficiency", ok, "expected an integer from 0 to 100");
  ok.then_some(raw)
}

impl Record for Skill {
  type New = NewSkill;

  const NAME: &'static str = "skill";
  const TITLE: &'static str = "Skill";

  fn id(&self) -> &RecordId { &self.id }

  fn validate_new(body: &Value) -> Validation<NewSkill> {
    let mut f = Fields::new(body);
    let name = f.required_str("name");
    let proficiency = proficiency(&mut f, true);
    let icon = f.parsed::<SkillIcon>("icon", true, ICON_EXPECTED);
    let category = f.required_str("category");
    f.finish(|| NewSkill {
      name:        name.unwrap_or_default(),
      proficiency: proficiency.unwrap_or_default(),
      icon:        icon.unwrap_or(SkillIcon::SiPython),
      category:    category.unwrap_or_default(),
    })
  }
}

impl Editable for Skill {
  type Patch = SkillPatch;

  fn from_new(id: RecordId, new: NewSkill) -> Self {
    Self {
      id,
      name: new.name,
      proficiency: new.proficiency,
      icon: new.icon,
      category: new.category,
    }
  }

  fn apply(&mut self, patch: SkillPatch) {
    if let Some(v) = patch.name { self.name = v; }
    if let Some(v) = patch.proficiency { self.proficiency = v; }
    if let Some(v) = patch.icon { self.icon = v; }
    if let Some(v) = patch.category { self.category = v; }
  }

  fn validate_patch(body: &Value) -> Validation<SkillPatch> {
    let mut f = Fields::new(body);
    let patch = SkillPatch {
      name:        f.optional_str("name"),
      proficiency: proficiency(&mut f, false),
      icon:        f.parsed("icon", false, ICON_EXPECTED),
      category:    f.optional_str("category"),
    };
    f.finish(|| patch)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn icon_names_round_trip() {
    for icon in SkillIcon::iter() {
      let name: &'static str = icon.into();
      assert_eq!(name.parse::<SkillIcon>().unwrap(), icon);
      assert_eq!(serde_json::to_value(icon).unwrap(), name);
    }
  }

  #[test]
  fn proficiency_bounds() {
    assert!(is_valid_proficiency("0"));
    assert!(is_valid_proficiency("42"));
    assert!(is_valid_proficiency("100"));
    assert!(!is_valid_proficiency("101"));
    assert!(!is_valid_proficiency("-1"));
    assert!(!is_valid_proficiency("+5"));
    assert!(!is_valid_proficiency(""));
    assert!(!is_valid_proficiency("ninety"));
  }

  #[test]
  fn valid_new_skill() {
    let v = Skill::validate_new(&json!({
      "name": "Rust", "proficiency": "70", "icon": "SiC", "category": "Language"
    }));
    assert_eq!(v, Validation::Valid(NewSkill {
      name:        "Rust".into(),
      proficiency: "70".into(),
      icon:        SkillIcon::SiC,
      category:    "Language".into(),
    }));
  }

  #[test]
  fn unknown_icon_and_numeric_proficiency_are_rejected() {
    let v = Skill::validate_new(&json!({
      "name": "Rust", "proficiency": 70, "icon": "SiRust", "category": "Language"
    }));
    let Validation::Invalid(reasons) = v else { panic!("expected invalid") };
    assert_eq!(reasons, vec![
      "proficiency: expected a string".to_owned(),
      "icon: expected a known icon name".to_owned(),
    ]);
  }

  #[test]
  fn patch_only_touches_supplied_fields() {
    let mut skill = Skill::from_new(RecordId::from("s1"), NewSkill {
      name:        "Python".into(),
      proficiency: "90".into(),
      icon:        SkillIcon::SiPython,
      category:    "Language".into(),
    });
    let Validation::Valid(patch) =
      Skill::validate_patch(&json!({ "proficiency": "42" }))
    else {
      panic!("expected valid patch");
    };
    skill.apply(patch);
    assert_eq!(skill.proficiency, "42");
    assert_eq!(skill.name, "Python");
    assert_eq!(skill.icon, SkillIcon::SiPython);
    assert_eq!(skill.category, "Language");
  }

  #[test]
  fn empty_patch_is_valid_and_a_no_op() {
    let Validation::Valid(patch) = Skill::validate_patch(&json!({})) else {
      panic!("expected valid patch");
    };
    assert_eq!(patch, SkillPatch::default());
  }
}
