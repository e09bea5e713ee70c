//! Contact: an append-only log of messages sent through the contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  record::{Record, RecordId},
  validate::{Fields, Validation},
};

/// A received message. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:         RecordId,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  /// Server-assigned; never accepted from callers.
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl Contact {
  pub fn received(id: RecordId, new: NewContact, at: DateTime<Utc>) -> Self {
    Self {
      id,
      name: new.name,
      email: new.email,
      subject: new.subject,
      message: new.message,
      created_at: at,
    }
  }
}

impl Record for Contact {
  type New = NewContact;

  const NAME: &'static str = "contact";
  const TITLE: &'static str = "Contact";

  fn id(&self) -> &RecordId { &self.id }

  fn validate_new(body: &Value) -> Validation<NewContact> {
    let mut f = Fields::new(body);
    let name = f.required_str("name");
    let email = f.required_str("email");
    let subject = f.required_str("subject");
    let message = f.required_str("message");
    f.finish(|| NewContact {
      name:    name.unwrap_or_default(),
      email:   email.unwrap_or_default(),
      subject: subject.unwrap_or_default(),
      message: message.unwrap_or_default(),
    })
  }
}
