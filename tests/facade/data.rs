//! Structured data tests

use std::time::Duration;

use crate::common::*;
use keyfront::{DataOptions, Error, HasIdentifier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Order {
    id: Option<i64>,
    customer: String,
    total: f64,
    paid: bool,
    reference: String,
}

impl HasIdentifier for Order {
    fn identifier(&self) -> Option<i64> {
        self.id
    }
}

fn order(id: Option<i64>) -> Order {
    Order {
        id,
        customer: "ada".to_string(),
        total: 12.5,
        paid: false,
        reference: "00042".to_string(),
    }
}

#[test]
fn test_json_round_trip_by_derived_key() {
    let (facade, store) = create_facade("shop:");
    let original = order(Some(9));

    facade.set_data(&original, DataOptions::new()).unwrap();

    let stored: serde_json::Value =
        serde_json::from_str(&store.raw("shop:Order:9").unwrap()).unwrap();
    assert_eq!(stored["reference"], "00042");
    assert_eq!(facade.get_data_for(&order(Some(9))).unwrap(), Some(original));
}

#[test]
fn test_json_round_trip_by_explicit_key() {
    let (facade, store) = create_facade("shop:");
    let original = order(None);

    facade
        .set_data(
            &original,
            DataOptions::new()
                .key("draft")
                .ttl(Duration::from_secs(30)),
        )
        .unwrap();

    assert_eq!(store.ttl_of("shop:draft"), Some(30));
    assert_eq!(facade.get_data::<Order>("draft").unwrap(), Some(original));
}

#[test]
fn test_missing_identifier_is_rejected() {
    let (facade, store) = create_facade("shop:");

    let err = facade.set_data(&order(None), DataOptions::new()).unwrap_err();

    assert!(matches!(err, Error::MissingIdentifier { .. }));
    assert!(store.effective_keys().is_empty());
}

#[test]
fn test_hash_round_trip_keeps_string_fields_as_strings() {
    let (facade, store) = create_facade("shop:");
    let original = order(Some(3));

    facade
        .hset_data(&original, DataOptions::new().ttl(Duration::from_secs(120)))
        .unwrap();

    assert_eq!(store.ttl_of("shop:Order:3"), Some(120));
    let read: Option<Order> = facade.hget_data("Order:3").unwrap();
    assert_eq!(read, Some(original));
}

#[test]
fn test_hash_read_of_missing_key_is_none() {
    let (facade, _) = create_facade("shop:");
    assert_eq!(facade.hget_data::<Order>("Order:404").unwrap(), None);
}

#[test]
fn test_json_read_of_hash_is_an_error() {
    let (facade, _) = create_facade("shop:");
    facade
        .hset_data(&order(Some(1)), DataOptions::new())
        .unwrap();

    assert!(facade.get_data::<Order>("Order:1").is_err());
}
