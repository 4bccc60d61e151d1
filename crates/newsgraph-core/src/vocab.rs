//! The fixed relation and entity-type vocabularies.
//!
//! Every dynamic token that ends up inside a Cypher label or relationship
//! type must pass through one of the closed enums in this module first.
//! The edge-label constants are precomputed per variant; no label is ever
//! derived from a client-supplied string at runtime, which is what keeps
//! label interpolation in the store crate injection-free.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Error, Result};

// ─── Entity kinds ────────────────────────────────────────────────────────────

/// The seven node labels the graph knows about (News aside).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EntityKind {
  Person,
  Country,
  Location,
  Organization,
  Event,
  Agreement,
  Time,
}

impl EntityKind {
  pub const ALL: [EntityKind; 7] = [
    EntityKind::Person,
    EntityKind::Country,
    EntityKind::Location,
    EntityKind::Organization,
    EntityKind::Event,
    EntityKind::Agreement,
    EntityKind::Time,
  ];

  /// Parse a candidate type token, failing closed on anything unknown.
  pub fn parse(s: &str) -> Result<Self> {
    s.parse()
      .map_err(|_| Error::UnknownEntityType(s.to_owned()))
  }

  /// The node label used in Cypher. Safe to interpolate: the set is closed.
  pub fn label(self) -> &'static str {
    match self {
      EntityKind::Person => "Person",
      EntityKind::Country => "Country",
      EntityKind::Location => "Location",
      EntityKind::Organization => "Organization",
      EntityKind::Event => "Event",
      EntityKind::Agreement => "Agreement",
      EntityKind::Time => "Time",
    }
  }

  /// Plural, lower-case form; used for route paths and index names.
  pub fn plural(self) -> &'static str {
    match self {
      EntityKind::Person => "persons",
      EntityKind::Country => "countries",
      EntityKind::Location => "locations",
      EntityKind::Organization => "organizations",
      EntityKind::Event => "events",
      EntityKind::Agreement => "agreements",
      EntityKind::Time => "times",
    }
  }

  /// The full-text index backing [`search`](crate::store::GraphStore::search_entities)
  /// for this kind. `Time` has none; its search is a plain substring match
  /// because its `des` property is a date, not prose.
  pub fn fulltext_index(self) -> Option<&'static str> {
    match self {
      EntityKind::Person => Some("personsFullTextSearch"),
      EntityKind::Country => Some("countriesFullTextSearch"),
      EntityKind::Location => Some("locationsFullTextSearch"),
      EntityKind::Organization => Some("organizationsFullTextSearch"),
      EntityKind::Event => Some("eventsFullTextSearch"),
      EntityKind::Agreement => Some("agreementsFullTextSearch"),
      EntityKind::Time => None,
    }
  }

  /// `Time.des` is a calendar date rather than free text.
  pub fn has_date_description(self) -> bool {
    matches!(self, EntityKind::Time)
  }

  pub fn is_subject_type(self) -> bool {
    matches!(
      self,
      EntityKind::Person | EntityKind::Country | EntityKind::Organization
    )
  }

  pub fn is_object_type(self) -> bool {
    matches!(
      self,
      EntityKind::Person
        | EntityKind::Country
        | EntityKind::Organization
        | EntityKind::Event
        | EntityKind::Agreement
    )
  }

  pub fn is_location_type(self) -> bool {
    matches!(self, EntityKind::Location | EntityKind::Country)
  }
}

// ─── Fixed edge labels ───────────────────────────────────────────────────────

/// News → Fact containment edge.
pub const HAS_FACT: &str = "HAS_FACT";
/// Fact → Time context edge.
pub const OCCURRED_ON: &str = "OCCURRED_ON";
/// Fact → Location/Country context edge.
pub const OCCURRED_IN: &str = "OCCURRED_IN";

// ─── Relations ───────────────────────────────────────────────────────────────

/// The closed vocabulary of statement relations.
///
/// The wire form is the Vietnamese phrase (the values the corpus was
/// annotated with); each variant also carries the two uppercased edge
/// labels derived from it once, at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
  /// "gặp gỡ" (to meet).
  Meets,
  /// "tổ chức" (to organize).
  Organizes,
  /// "ký thỏa thuận" (to sign an agreement).
  SignsAgreement,
  /// "tham gia" (to participate in).
  Participates,
  /// "ủng hộ" (to support).
  Supports,
  /// "phản đối" (to oppose).
  Opposes,
  /// "phát biểu tại" (to speak at).
  SpeaksAt,
  /// "căng thẳng với" (in tension with).
  TensionWith,
  /// "hủy bỏ" (to cancel).
  Cancels,
  /// "đàm phán với" (to negotiate with).
  NegotiatesWith,
}

impl Relation {
  pub const ALL: [Relation; 10] = [
    Relation::Meets,
    Relation::Organizes,
    Relation::SignsAgreement,
    Relation::Participates,
    Relation::Supports,
    Relation::Opposes,
    Relation::SpeaksAt,
    Relation::TensionWith,
    Relation::Cancels,
    Relation::NegotiatesWith,
  ];

  /// Parse the wire form, failing closed on anything outside the vocabulary.
  pub fn parse(s: &str) -> Result<Self> {
    Relation::ALL
      .into_iter()
      .find(|r| r.as_str() == s)
      .ok_or_else(|| Error::UnknownRelation(s.to_owned()))
  }

  /// The canonical wire form.
  pub fn as_str(self) -> &'static str {
    match self {
      Relation::Meets => "gặp gỡ",
      Relation::Organizes => "tổ chức",
      Relation::SignsAgreement => "ký thỏa thuận",
      Relation::Participates => "tham gia",
      Relation::Supports => "ủng hộ",
      Relation::Opposes => "phản đối",
      Relation::SpeaksAt => "phát biểu tại",
      Relation::TensionWith => "căng thẳng với",
      Relation::Cancels => "hủy bỏ",
      Relation::NegotiatesWith => "đàm phán với",
    }
  }

  /// The Fact → subject edge label.
  pub fn subject_edge(self) -> &'static str {
    match self {
      Relation::Meets => "HAS_SUBJECT_GẶP_GỠ",
      Relation::Organizes => "HAS_SUBJECT_TỔ_CHỨC",
      Relation::SignsAgreement => "HAS_SUBJECT_KÝ_THỎA_THUẬN",
      Relation::Participates => "HAS_SUBJECT_THAM_GIA",
      Relation::Supports => "HAS_SUBJECT_ỦNG_HỘ",
      Relation::Opposes => "HAS_SUBJECT_PHẢN_ĐỐI",
      Relation::SpeaksAt => "HAS_SUBJECT_PHÁT_BIỂU_TẠI",
      Relation::TensionWith => "HAS_SUBJECT_CĂNG_THẲNG_VỚI",
      Relation::Cancels => "HAS_SUBJECT_HỦY_BỎ",
      Relation::NegotiatesWith => "HAS_SUBJECT_ĐÀM_PHÁN_VỚI",
    }
  }

  /// The Fact → object edge label.
  pub fn object_edge(self) -> &'static str {
    match self {
      Relation::Meets => "HAS_OBJECT_GẶP_GỠ",
      Relation::Organizes => "HAS_OBJECT_TỔ_CHỨC",
      Relation::SignsAgreement => "HAS_OBJECT_KÝ_THỎA_THUẬN",
      Relation::Participates => "HAS_OBJECT_THAM_GIA",
      Relation::Supports => "HAS_OBJECT_ỦNG_HỘ",
      Relation::Opposes => "HAS_OBJECT_PHẢN_ĐỐI",
      Relation::SpeaksAt => "HAS_OBJECT_PHÁT_BIỂU_TẠI",
      Relation::TensionWith => "HAS_OBJECT_CĂNG_THẲNG_VỚI",
      Relation::Cancels => "HAS_OBJECT_HỦY_BỎ",
      Relation::NegotiatesWith => "HAS_OBJECT_ĐÀM_PHÁN_VỚI",
    }
  }

  /// Reverse lookup from a subject edge label read back out of the store.
  pub fn from_subject_edge(label: &str) -> Option<Self> {
    Relation::ALL.into_iter().find(|r| r.subject_edge() == label)
  }

  /// Reverse lookup from an object edge label read back out of the store.
  pub fn from_object_edge(label: &str) -> Option<Self> {
    Relation::ALL.into_iter().find(|r| r.object_edge() == label)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entity_kind_parses_known_labels() {
    for kind in EntityKind::ALL {
      assert_eq!(EntityKind::parse(kind.label()).unwrap(), kind);
    }
  }

  #[test]
  fn entity_kind_rejects_unknown_labels() {
    for bad in ["person", "News", "Fact", "", "Person ", "Person;DROP"] {
      assert!(matches!(
        EntityKind::parse(bad),
        Err(Error::UnknownEntityType(_))
      ));
    }
  }

  #[test]
  fn subject_object_location_subsets() {
    assert!(EntityKind::Person.is_subject_type());
    assert!(EntityKind::Country.is_subject_type());
    assert!(EntityKind::Organization.is_subject_type());
    assert!(!EntityKind::Event.is_subject_type());
    assert!(!EntityKind::Time.is_subject_type());

    assert!(EntityKind::Event.is_object_type());
    assert!(EntityKind::Agreement.is_object_type());
    assert!(!EntityKind::Location.is_object_type());
    assert!(!EntityKind::Time.is_object_type());

    assert!(EntityKind::Location.is_location_type());
    assert!(EntityKind::Country.is_location_type());
    assert!(!EntityKind::Person.is_location_type());
  }

  #[test]
  fn relation_parses_wire_form() {
    assert_eq!(Relation::parse("gặp gỡ").unwrap(), Relation::Meets);
    assert_eq!(
      Relation::parse("đàm phán với").unwrap(),
      Relation::NegotiatesWith
    );
    assert!(matches!(
      Relation::parse("gặp gỡ "),
      Err(Error::UnknownRelation(_))
    ));
    assert!(matches!(
      Relation::parse("MEETS"),
      Err(Error::UnknownRelation(_))
    ));
  }

  #[test]
  fn edge_labels_are_uppercased_with_underscores() {
    assert_eq!(Relation::Meets.subject_edge(), "HAS_SUBJECT_GẶP_GỠ");
    assert_eq!(Relation::Meets.object_edge(), "HAS_OBJECT_GẶP_GỠ");
    assert_eq!(
      Relation::SignsAgreement.subject_edge(),
      "HAS_SUBJECT_KÝ_THỎA_THUẬN"
    );

    // Every label must be the uppercased wire form with spaces replaced,
    // prefixed with the edge role.
    for r in Relation::ALL {
      let derived = r.as_str().to_uppercase().replace(' ', "_");
      assert_eq!(r.subject_edge(), format!("HAS_SUBJECT_{derived}"));
      assert_eq!(r.object_edge(), format!("HAS_OBJECT_{derived}"));
    }
  }

  #[test]
  fn edge_label_reverse_lookup() {
    for r in Relation::ALL {
      assert_eq!(Relation::from_subject_edge(r.subject_edge()), Some(r));
      assert_eq!(Relation::from_object_edge(r.object_edge()), Some(r));
    }
    assert_eq!(Relation::from_subject_edge("HAS_SUBJECT_UNKNOWN"), None);
    assert_eq!(Relation::from_object_edge(OCCURRED_ON), None);
  }

  #[test]
  fn fulltext_index_names() {
    assert_eq!(
      EntityKind::Person.fulltext_index(),
      Some("personsFullTextSearch")
    );
    assert_eq!(
      EntityKind::Country.fulltext_index(),
      Some("countriesFullTextSearch")
    );
    assert_eq!(EntityKind::Time.fulltext_index(), None);
  }
}
