//! Fact types: the hyper-edge connecting a subject and an object under a
//! relation, scoped to one News item, with optional time/location context.
//!
//! A Fact is never updated in place; it is created through the builder and
//! deleted individually or by News cascade.

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  vocab::{EntityKind, Relation, OCCURRED_IN, OCCURRED_ON},
};

// ─── Input ───────────────────────────────────────────────────────────────────

/// The untyped wire form of a fact-creation request. Everything in here is
/// client-supplied and untrusted until [`FactInput::validate`] has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactInput {
  #[serde(rename = "entityID")]
  pub entity_id:     String,
  pub relation:      String,
  pub subject_id:    String,
  pub subject_type:  String,
  pub object_id:     String,
  pub object_type:   String,
  #[serde(default)]
  pub time_id:       Option<String>,
  pub time_type:     String,
  #[serde(default)]
  pub location_id:   Option<String>,
  pub location_type: String,
}

impl FactInput {
  /// Check every token against the vocabulary and the structural rules,
  /// producing the typed spec the store builds its query from.
  ///
  /// Order matters: vocabulary first (fail closed on unknown tokens), then
  /// the self-statement rule.
  pub fn validate(&self) -> Result<FactSpec> {
    let relation = Relation::parse(&self.relation)?;

    let subject_kind = EntityKind::parse(&self.subject_type)?;
    if !subject_kind.is_subject_type() {
      return Err(Error::InvalidSubjectType(subject_kind));
    }

    let object_kind = EntityKind::parse(&self.object_type)?;
    if !object_kind.is_object_type() {
      return Err(Error::InvalidObjectType(object_kind));
    }

    let location_kind = EntityKind::parse(&self.location_type)?;
    if !location_kind.is_location_type() {
      return Err(Error::InvalidLocationType(location_kind));
    }

    let time_kind = EntityKind::parse(&self.time_type)?;
    if time_kind != EntityKind::Time {
      return Err(Error::InvalidTimeType(self.time_type.clone()));
    }

    if self.subject_id == self.object_id && subject_kind == object_kind {
      return Err(Error::SelfStatement(self.subject_id.clone()));
    }

    Ok(FactSpec {
      entity_id:     self.entity_id.clone(),
      relation,
      subject_kind,
      subject_id:    self.subject_id.clone(),
      object_kind,
      object_id:     self.object_id.clone(),
      location_kind,
      location_id:   self.location_id.clone(),
      time_id:       self.time_id.clone(),
    })
  }
}

// ─── Spec ────────────────────────────────────────────────────────────────────

/// A fully validated fact-creation request. Every kind and relation in here
/// has passed the vocabulary, so its labels are safe to interpolate into a
/// query.
#[derive(Debug, Clone)]
pub struct FactSpec {
  pub entity_id:     String,
  pub relation:      Relation,
  pub subject_kind:  EntityKind,
  pub subject_id:    String,
  pub object_kind:   EntityKind,
  pub object_id:     String,
  pub location_kind: EntityKind,
  /// Absent means: no location edge.
  pub location_id:   Option<String>,
  /// Absent means: no time edge.
  pub time_id:       Option<String>,
}

// ─── Detail read model ───────────────────────────────────────────────────────

/// One Fact flattened back out of its edges: the inverse of creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactDetail {
  #[serde(rename = "factID")]
  pub fact_id:     String,
  pub relation:    Option<String>,
  #[serde(rename = "subjectID")]
  pub subject_id:  Option<String>,
  #[serde(rename = "objectID")]
  pub object_id:   Option<String>,
  #[serde(rename = "timeID")]
  pub time_id:     Option<String>,
  #[serde(rename = "locationID")]
  pub location_id: Option<String>,
}

impl FactDetail {
  /// Classify a fact's outgoing edges into the subject/object/time/location
  /// slots. `edges` pairs each edge label with the entityID it points at.
  ///
  /// Edge labels outside the vocabulary are skipped rather than guessed at.
  pub fn from_edges(fact_id: String, edges: &[(String, String)]) -> Self {
    let mut detail = FactDetail {
      fact_id,
      ..FactDetail::default()
    };
    for (label, entity_id) in edges {
      if label == OCCURRED_ON {
        detail.time_id = Some(entity_id.clone());
      } else if label == OCCURRED_IN {
        detail.location_id = Some(entity_id.clone());
      } else if let Some(relation) = Relation::from_subject_edge(label) {
        detail.relation = Some(relation.as_str().to_owned());
        detail.subject_id = Some(entity_id.clone());
      } else if Relation::from_object_edge(label).is_some() {
        detail.object_id = Some(entity_id.clone());
      }
    }
    detail
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn input() -> FactInput {
    FactInput {
      entity_id:     "F1".to_owned(),
      relation:      "gặp gỡ".to_owned(),
      subject_id:    "P1".to_owned(),
      subject_type:  "Person".to_owned(),
      object_id:     "C1".to_owned(),
      object_type:   "Country".to_owned(),
      time_id:       None,
      time_type:     "Time".to_owned(),
      location_id:   None,
      location_type: "Location".to_owned(),
    }
  }

  #[test]
  fn valid_input_produces_typed_spec() {
    let spec = input().validate().unwrap();
    assert_eq!(spec.relation, Relation::Meets);
    assert_eq!(spec.subject_kind, EntityKind::Person);
    assert_eq!(spec.object_kind, EntityKind::Country);
    assert!(spec.time_id.is_none());
    assert!(spec.location_id.is_none());
  }

  #[test]
  fn unknown_relation_fails_closed() {
    let mut i = input();
    i.relation = "]->(x) DETACH DELETE x //".to_owned();
    assert!(matches!(i.validate(), Err(Error::UnknownRelation(_))));
  }

  #[test]
  fn subject_type_outside_subset_is_rejected() {
    let mut i = input();
    i.subject_type = "Event".to_owned();
    assert!(matches!(i.validate(), Err(Error::InvalidSubjectType(_))));
  }

  #[test]
  fn location_type_outside_subset_is_rejected() {
    let mut i = input();
    i.location_type = "Person".to_owned();
    assert!(matches!(i.validate(), Err(Error::InvalidLocationType(_))));
  }

  #[test]
  fn time_type_must_be_time() {
    let mut i = input();
    i.time_type = "Event".to_owned();
    assert!(matches!(i.validate(), Err(Error::InvalidTimeType(_))));
  }

  #[test]
  fn self_statement_with_equal_types_is_rejected_for_any_relation() {
    for relation in Relation::ALL {
      let mut i = input();
      i.relation = relation.as_str().to_owned();
      i.object_id = i.subject_id.clone();
      i.object_type = i.subject_type.clone();
      assert!(matches!(i.validate(), Err(Error::SelfStatement(_))));
    }
  }

  #[test]
  fn same_id_with_different_types_is_allowed() {
    let mut i = input();
    i.object_id = i.subject_id.clone(); // subject Person, object Country
    assert!(i.validate().is_ok());
  }

  #[test]
  fn detail_classifies_all_four_edges() {
    let edges = vec![
      ("HAS_SUBJECT_GẶP_GỠ".to_owned(), "P1".to_owned()),
      ("HAS_OBJECT_GẶP_GỠ".to_owned(), "C1".to_owned()),
      (OCCURRED_ON.to_owned(), "T1".to_owned()),
      (OCCURRED_IN.to_owned(), "L1".to_owned()),
    ];
    let detail = FactDetail::from_edges("F1".to_owned(), &edges);
    assert_eq!(detail.relation.as_deref(), Some("gặp gỡ"));
    assert_eq!(detail.subject_id.as_deref(), Some("P1"));
    assert_eq!(detail.object_id.as_deref(), Some("C1"));
    assert_eq!(detail.time_id.as_deref(), Some("T1"));
    assert_eq!(detail.location_id.as_deref(), Some("L1"));
  }

  #[test]
  fn detail_skips_unrecognized_edge_labels() {
    let edges = vec![
      ("HAS_SUBJECT_GẶP_GỠ".to_owned(), "P1".to_owned()),
      ("SOMETHING_ELSE".to_owned(), "X1".to_owned()),
    ];
    let detail = FactDetail::from_edges("F1".to_owned(), &edges);
    assert_eq!(detail.subject_id.as_deref(), Some("P1"));
    assert!(detail.object_id.is_none());
    assert!(detail.time_id.is_none());
  }
}
