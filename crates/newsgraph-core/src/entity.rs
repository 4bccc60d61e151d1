//! Entity model: the homogeneous `{entityID, name, des}` node shape.
//!
//! All six plain entity kinds plus Time share this shape. A merge combines
//! the `name`/`des` properties of the collapsed nodes into multi-valued
//! properties, so read models represent them as one-or-many text values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  vocab::EntityKind,
};

// ─── Property text ───────────────────────────────────────────────────────────

/// A text property that is a single string on freshly created nodes and a
/// list of combined strings after a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropText {
  One(String),
  Many(Vec<String>),
}

impl PropText {
  /// All carried values, in order.
  pub fn values(&self) -> &[String] {
    match self {
      PropText::One(v) => std::slice::from_ref(v),
      PropText::Many(vs) => vs,
    }
  }

  pub fn contains(&self, needle: &str) -> bool {
    self.values().iter().any(|v| v == needle)
  }
}

impl Default for PropText {
  fn default() -> Self {
    PropText::One(String::new())
  }
}

impl From<&str> for PropText {
  fn from(v: &str) -> Self {
    PropText::One(v.to_owned())
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// The read model for an entity node of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
  #[serde(rename = "entityID")]
  pub entity_id:   String,
  pub name:        PropText,
  pub description: PropText,
}

/// A search result row; `score` is present for full-text matches only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
  #[serde(flatten)]
  pub entity: Entity,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub score:  Option<f64>,
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// The write model accepted on create and update. `des` is free text for
/// every kind except Time, where it must be a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityInput {
  #[serde(rename = "entityID")]
  pub entity_id: String,
  pub name:      String,
  pub des:       String,
}

impl EntityInput {
  /// Kind-specific validation, applied before any store mutation.
  ///
  /// For Time the description must parse as a real calendar date; a
  /// well-formed but impossible date like `2024-02-30` is rejected here.
  pub fn validate_for(&self, kind: EntityKind) -> Result<()> {
    if kind.has_date_description() {
      parse_date(&self.des)?;
    }
    Ok(())
  }
}

/// Parse a `YYYY-MM-DD` date string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|_| Error::InvalidDate(s.to_owned()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn input(des: &str) -> EntityInput {
    EntityInput {
      entity_id: "T1".to_owned(),
      name:      "thời gian".to_owned(),
      des:       des.to_owned(),
    }
  }

  #[test]
  fn time_accepts_real_calendar_dates() {
    assert!(input("2024-02-15").validate_for(EntityKind::Time).is_ok());
    assert!(input("2024-02-29").validate_for(EntityKind::Time).is_ok()); // leap year
  }

  #[test]
  fn time_rejects_impossible_and_malformed_dates() {
    for bad in ["2024-02-30", "2023-02-29", "2024-13-01", "15-02-2024", "today", ""] {
      assert!(
        matches!(
          input(bad).validate_for(EntityKind::Time),
          Err(Error::InvalidDate(_))
        ),
        "expected {bad:?} to be rejected"
      );
    }
  }

  #[test]
  fn non_time_kinds_accept_free_text() {
    assert!(input("not a date").validate_for(EntityKind::Person).is_ok());
    assert!(input("2024-02-30").validate_for(EntityKind::Event).is_ok());
  }

  #[test]
  fn prop_text_serializes_scalar_and_list() {
    let one = PropText::One("a".to_owned());
    assert_eq!(serde_json::to_string(&one).unwrap(), r#""a""#);

    let many = PropText::Many(vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(serde_json::to_string(&many).unwrap(), r#"["a","b"]"#);
  }

  #[test]
  fn entity_serializes_with_business_keys() {
    let e = Entity {
      entity_id:   "P1".to_owned(),
      name:        "Alice".into(),
      description: "a person".into(),
    };
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["entityID"], "P1");
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["description"], "a person");
  }
}
