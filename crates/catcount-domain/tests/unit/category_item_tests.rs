//! Unit tests for the category item entity

use catcount_domain::Error;
use catcount_domain::entities::CategoryItem;
use serde_json::json;

#[test]
fn test_category_item_serializes_all_fields() {
    let item = CategoryItem::new("1", "main1", Some("sub1"));
    let value = serde_json::to_value(&item).expect("serialize");
    assert_eq!(value, json!({"id": "1", "main": "main1", "sub": "sub1"}));
}

#[test]
fn test_missing_sub_serializes_as_null() {
    let item = CategoryItem::main_only("4", "mainOnly");
    let value = serde_json::to_value(&item).expect("serialize");
    assert_eq!(value, json!({"id": "4", "main": "mainOnly", "sub": null}));
}

#[test]
fn test_deserialize_without_sub_field() {
    let item: CategoryItem =
        serde_json::from_value(json!({"id": "5", "main": "mainOnly"})).expect("deserialize");
    assert_eq!(item, CategoryItem::main_only("5", "mainOnly"));
}

#[test]
fn test_validate_accepts_item_without_sub() {
    assert!(CategoryItem::main_only("4", "mainOnly").validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_id() {
    let err = CategoryItem::new("", "main1", None::<String>)
        .validate()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(!err.is_io());
}

#[test]
fn test_validate_accepts_empty_main() {
    assert!(CategoryItem::new("7", "", Some("sub2")).validate().is_ok());
}
