//! Profile: the singleton describing the portfolio's author.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  record::{Editable, Record, RecordId},
  validate::{Fields, Validation},
};

/// The author's identity and about-me content. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub id:            RecordId,
  pub name:          String,
  pub title:         String,
  /// Short hero-section tagline.
  pub description:   String,
  /// Long-form about-section text.
  pub bio:           String,
  pub email:         String,
  pub linkedin_url:  Option<String>,
  pub github_url:    Option<String>,
  pub twitter_url:   Option<String>,
  pub profile_image: Option<String>,
  pub about_image:   Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
  pub name:          String,
  pub title:         String,
  pub description:   String,
  pub bio:           String,
  pub email:         String,
  pub linkedin_url:  Option<String>,
  pub github_url:    Option<String>,
  pub twitter_url:   Option<String>,
  pub profile_image: Option<String>,
  pub about_image:   Option<String>,
}

/// Nullable fields use `Option<Option<_>>`: the outer layer is presence, the
/// inner one is an explicit `null` that clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
  pub name:          Option<String>,
  pub title:         Option<String>,
  pub description:   Option<String>,
  pub bio:           Option<String>,
  pub email:         Option<String>,
  pub linkedin_url:  Option<Option<String>>,
  pub github_url:    Option<Option<String>>,
  pub twitter_url:   Option<Option<String>>,
  pub profile_image: Option<Option<String>>,
  pub about_image:   Option<Option<String>>,
}

impl Record for Profile {
  type New = NewProfile;

  const NAME: &'static str = "user";
  const TITLE: &'static str = "User";

  fn id(&self) -> &RecordId { &self.id }

  fn validate_new(body: &Value) -> Validation<NewProfile> {
    let mut f = Fields::new(body);
    let name = f.required_str("name");
    let title = f.required_str("title");
    let description = f.required_str("description");
    let bio = f.required_str("bio");
    let email = f.required_str("email");
    let linkedin_url = f.nullable_str("linkedinUrl");
    let github_url = f.nullable_str("githubUrl");
    let twitter_url = f.nullable_str("twitterUrl");
    let profile_image = f.nullable_str("profileImage");
    let about_image = f.nullable_str("aboutImage");
    f.finish(|| NewProfile {
      name:          name.unwrap_or_default(),
      title:         title.unwrap_or_default(),
      description:   description.unwrap_or_default(),
      bio:           bio.unwrap_or_default(),
      email:         email.unwrap_or_default(),
      linkedin_url:  linkedin_url.flatten(),
      github_url:    github_url.flatten(),
      twitter_url:   twitter_url.flatten(),
      profile_image: profile_image.flatten(),
      about_image:   about_image.flatten(),
    })
  }
}

impl Editable for Profile {
  type Patch = ProfilePatch;

  fn from_new(id: RecordId, new: NewProfile) -> Self {
    Self {
      id,
      name: new.name,
      title: new.title,
      description: new.description,
      bio: new.bio,
      email: new.email,
      linkedin_url: new.linkedin_url,
      github_url: new.github_url,
      twitter_url: new.twitter_url,
      profile_image: new.profile_image,
      about_image: new.about_image,
    }
  }

  fn apply(&mut self, patch: ProfilePatch) {
    if let Some(v) = patch.name { self.name = v; }
    if let Some(v) = patch.title { self.title = v; }
    if let Some(v) = patch.description { self.description = v; }
    if let Some(v) = patch.bio { self.bio = v; }
    if let Some(v) = patch.email { self.email = v; }
    if let Some(v) = patch.linkedin_url { self.linkedin_url = v; }
    if let Some(v) = patch.github_url { self.github_url = v; }
    if let Some(v) = patch.twitter_url { self.twitter_url = v; }
    if let Some(v) = patch.profile_image { self.profile_image = v; }
    if let Some(v) = patch.about_image { self.about_image = v; }
  }

  fn validate_patch(body: &Value) -> Validation<ProfilePatch> {
    let mut f = Fields::new(body);
    let patch = ProfilePatch {
      name:          f.optional_str("name"),
      title:         f.optional_str("title"),
      description:   f.optional_str("description"),
      bio:           f.optional_str("bio"),
      email:         f.optional_str("email"),
      linkedin_url:  f.nullable_str("linkedinUrl"),
      github_url:    f.nullable_str("githubUrl"),
      twitter_url:   f.nullable_str("twitterUrl"),
      profile_image: f.nullable_str("profileImage"),
      about_image:   f.nullable_str("aboutImage"),
    };
    f.finish(|| patch)
  }
}
