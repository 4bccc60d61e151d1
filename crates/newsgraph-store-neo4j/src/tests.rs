use neo4rs::ConfigBuilder;
use newsgraph_core::{entity::PropText, vocab::EntityKind};

use super::*;
use crate::store::{capped_id_set, id_set, kind_labels, prop_text};

#[test]
fn id_sets_dedup_first_seen_and_truncate() {
  let ids: Vec<String> = ["a", "b", "a", "c", "b", "d"]
    .iter()
    .map(|s| s.to_string())
    .collect();
  assert_eq!(capped_id_set(&ids, 3), ["a", "b", "c"]);
}

#[test]
fn id_sets_below_cap_pass_through() {
  let ids: Vec<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
  assert_eq!(capped_id_set(&ids, 1000), ["x", "y"]);
}

#[test]
fn merge_groups_are_deduped_but_never_truncated() {
  // Merge input goes through the uncapped dedup; a group larger than the
  // News-set cap keeps every distinct id.
  let mut ids: Vec<String> = (0..1001).map(|i| format!("e{i}")).collect();
  ids.push("e0".to_owned());
  let set = id_set(&ids);
  assert_eq!(set.len(), 1001);
  assert_eq!(set.last().map(String::as_str), Some("e1000"));
}

#[test]
fn prop_text_scalar_vs_merged_list() {
  assert_eq!(
    prop_text(vec!["a".to_owned()], Some(false)),
    PropText::One("a".to_owned())
  );
  assert_eq!(
    prop_text(vec!["a".to_owned(), "b".to_owned()], Some(true)),
    PropText::Many(vec!["a".to_owned(), "b".to_owned()])
  );
  // an absent property reads back as empty scalar text
  assert_eq!(prop_text(vec![], None), PropText::One(String::new()));
}

#[test]
fn kind_label_lists_dedup() {
  assert_eq!(
    kind_labels(&[EntityKind::Person, EntityKind::Country, EntityKind::Person]),
    ["Person", "Country"]
  );
}

// Exercised only when a local Neo4j is reachable; kept out of the default
// test run.
#[tokio::test]
#[ignore = "requires a running neo4j with apoc"]
async fn entity_round_trip_against_live_neo4j() {
  use newsgraph_core::{entity::EntityInput, store::GraphStore};

  let config = ConfigBuilder::default()
    .uri("127.0.0.1:7687")
    .user("neo4j")
    .password("neo4j")
    .build()
    .unwrap();
  let graph = neo4rs::Graph::connect(config).await.unwrap();
  let store = Neo4jStore::new(graph, StoreLimits::default());

  let input = EntityInput {
    entity_id: "it-person-1".to_owned(),
    name:      "Test Person".to_owned(),
    des:       "integration fixture".to_owned(),
  };
  let created = store.create_entity(EntityKind::Person, &input).await.unwrap();
  assert_eq!(created.entity_id, "it-person-1");
  assert_eq!(created.name, PropText::One("Test Person".to_owned()));

  let fetched = store
    .get_entity(EntityKind::Person, "it-person-1")
    .await
    .unwrap();
  assert!(fetched.is_some());

  store
    .delete_entity(EntityKind::Person, "it-person-1")
    .await
    .unwrap();
  assert!(
    store
      .get_entity(EntityKind::Person, "it-person-1")
      .await
      .unwrap()
      .is_none()
  );
}
