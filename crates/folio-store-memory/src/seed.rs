//! Seed content: the built-in placeholder portfolio and JSON seed files.

use std::path::Path;

use folio_core::{
  Flag, Record,
  certification::{Certification, NewCertification},
  experience::{Experience, NewExperience},
  profile::{NewProfile, Profile},
  project::{NewProject, Project},
  skill::{NewSkill, Skill, SkillIcon},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Validated content a store is built from.
#[derive(Debug, Clone, Default)]
pub(crate) struct Seed {
  pub(crate) profile:        Option<NewProfile>,
  pub(crate) skills:         Vec<NewSkill>,
  pub(crate) projects:       Vec<NewProject>,
  pub(crate) experiences:    Vec<NewExperience>,
  pub(crate) certifications: Vec<NewCertification>,
}

// ─── Seed documents ──────────────────────────────────────────────────────────

/// The on-disk seed format. Entries use the same wire shape as API insert
/// bodies; missing collections are empty.
///
/// ```json
/// { "profile": { "name": "...", ... }, "skills": [ { "name": "...", ... } ] }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SeedDocument {
  #[serde(default)]
  pub profile:        Option<Value>,
  #[serde(default)]
  pub skills:         Vec<Value>,
  #[serde(default)]
  pub projects:       Vec<Value>,
  #[serde(default)]
  pub experiences:    Vec<Value>,
  #[serde(default)]
  pub certifications: Vec<Value>,
}

impl SeedDocument {
  /// Read and parse a seed document from `path`.
  pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_str(&text)?)
  }

  /// Run every entry through its entity's insert validation.
  pub(crate) fn validate(self) -> Result<Seed> {
    let profile = self
      .profile
      .map(|body| validate_one::<Profile>("profile", 0, &body))
      .transpose()?;
    Ok(Seed {
      profile,
      skills: validate_all::<Skill>("skills", &self.skills)?,
      projects: validate_all::<Project>("projects", &self.projects)?,
      experiences: validate_all::<Experience>("experiences", &self.experiences)?,
      certifications: validate_all::<Certification>(
        "certifications",
        &self.certifications,
      )?,
    })
  }
}

fn validate_one<R: Record>(
  collection: &'static str,
  index: usize,
  body: &Value,
) -> Result<R::New> {
  R::validate_new(body)
    .into_result(R::NAME)
    .map_err(|source| Error::InvalidEntry { collection, index, source })
}

fn validate_all<R: Record>(
  collection: &'static str,
  bodies: &[Value],
) -> Result<Vec<R::New>> {
  bodies
    .iter()
    .enumerate()
    .map(|(index, body)| validate_one::<R>(collection, index, body))
    .collect()
}

// ─── Built-in defaults ───────────────────────────────────────────────────────

fn skill(name: &str, proficiency: &str, icon: SkillIcon, category: &str) -> NewSkill {
  NewSkill {
    name: name.to_owned(),
    proficiency: proficiency.to_owned(),
    icon,
    category: category.to_owned(),
  }
}

fn techs(names: &[&str]) -> Vec<String> {
  names.iter().map(|s| (*s).to_owned()).collect()
}

impl Seed {
  /// Placeholder portfolio content used when no seed file is configured.
  pub(crate) fn defaults() -> Self {
    let profile = NewProfile {
      name:          "Your Name".into(),
      title:         "Software Engineer".into(),
      description:   "Passionate developer crafting modern web experiences \
                      with React, Node.js, and cutting-edge technologies."
        .into(),
      bio:           "I'm a Computer Science undergrad who enjoys blending \
                      creativity and technology to build impactful \
                      solutions, from responsive frontends to intelligent \
                      backend systems. Currently exploring real-time ML \
                      applications, cybersecurity, and full-stack web \
                      development."
        .into(),
      email:         "your@email.com".into(),
      linkedin_url:  Some("https://linkedin.com/in/yourprofile".into()),
      github_url:    Some("https://github.com/yourusername".into()),
      twitter_url:   Some("https://twitter.com/yourusername".into()),
      profile_image: None,
      about_image:   None,
    };

    let skills = vec![
      skill("Python", "90", SkillIcon::SiPython, "Language"),
      skill("C", "85", SkillIcon::SiC, "Language"),
      skill("C++", "85", SkillIcon::SiCplusplus, "Language"),
      skill("Java", "80", SkillIcon::SiJavascript, "Language"),
      skill("JavaScript", "88", SkillIcon::SiJavascript, "Language"),
      skill("HTML/CSS", "90", SkillIcon::SiHtml5, "Frontend"),
      skill("ReactJS", "85", SkillIcon::SiReact, "Frontend"),
      skill("Flask", "80", SkillIcon::SiFlask, "Backend"),
      skill("TensorFlow", "75", SkillIcon::SiTensorflow, "ML"),
    ];

    let projects = vec![
      NewProject {
        title:        "E-commerce Platform".into(),
        description:  "A full-stack e-commerce solution with user \
                       authentication, product management, and payment \
                       processing."
          .into(),
        image:        "https://images.unsplash.com/photo-1551650975-87deedd944c3?auto=format&fit=crop&w=800&h=400".into(),
        live_url:     None,
        github_url:   None,
        technologies: techs(&["React", "Node.js", "MongoDB"]),
        featured:     Flag::True,
      },
      NewProject {
        title:        "Task Management App".into(),
        description:  "A collaborative task manager with real-time updates, \
                       drag-and-drop boards, and team features."
          .into(),
        image:        "https://images.unsplash.com/photo-1611224923853-80b023f02d71?auto=format&fit=crop&w=800&h=400".into(),
        live_url:     None,
        github_url:   None,
        technologies: techs(&["Vue.js", "Firebase", "TypeScript"]),
        featured:     Flag::True,
      },
    ];

    let experiences = vec![
      NewExperience {
        title:        "Senior Software Engineer".into(),
        company:      "Tech Solutions Inc.".into(),
        duration:     "2022 - Present".into(),
        description:  "Led development of scalable web applications, built \
                       CI/CD pipelines, and mentored junior developers."
          .into(),
        technologies: techs(&["React", "Node.js", "AWS"]),
        current:      Flag::True,
      },
      NewExperience {
        title:        "Full Stack Developer".into(),
        company:      "StartupCo".into(),
        duration:     "2020 - 2022".into(),
        description:  "Built and maintained client-facing applications \
                       alongside designers and product managers."
          .into(),
        technologies: techs(&["Vue.js", "Python", "PostgreSQL"]),
        current:      Flag::False,
      },
    ];

    let certifications = vec![
      NewCertification {
        name:           "AWS Certified Cloud Practitioner".into(),
        issuer:         "Amazon Web Services".into(),
        date_issued:    "2024".into(),
        credential_url: None,
        description:    "Foundational cloud computing knowledge and AWS \
                         services."
          .into(),
      },
      NewCertification {
        name:           "Python for Data Science".into(),
        issuer:         "Coursera".into(),
        date_issued:    "2023".into(),
        credential_url: None,
        description:    "Python programming for data analysis and machine \
                         learning."
          .into(),
      },
    ];

    Self {
      profile: Some(profile),
      skills,
      projects,
      experiences,
      certifications,
    }
  }
}
