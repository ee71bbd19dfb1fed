use chrono::{TimeZone, Utc};
use posha_core::models::*;

#[test]
fn outfit_record_tolerates_missing_optional_fields() {
    let json = r#"{"id":"o-1","timestamp":"2024-03-01T10:00:00.000Z"}"#;
    let record: OutfitRecord = serde_json::from_str(json).unwrap();
    assert!(record.colors.is_empty());
    assert!(record.fabrics.is_empty());
    assert_eq!(record.occasion_tag(), None);
    assert_eq!(record.weather_tag(), None);
}

#[test]
fn outfit_record_accepts_numeric_ids() {
    let json = r#"{"id":1709287200000,"timestamp":"2024-03-01T10:00:00Z","colors":["Navy"]}"#;
    let record: OutfitRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "1709287200000");
    assert_eq!(record.colors, vec!["Navy".to_string()]);
}

#[test]
fn outfit_record_treats_null_lists_as_empty() {
    let json = r#"{"id":"o-2","timestamp":"2024-03-01T10:00:00Z","colors":null,"fabrics":null,"occasion":"Work"}"#;
    let record: OutfitRecord = serde_json::from_str(json).unwrap();
    assert!(record.colors.is_empty());
    assert!(record.fabrics.is_empty());
    assert_eq!(record.occasion_tag(), Some("Work"));
    assert!(record.has_timestamp());
}

#[test]
fn outfit_record_drops_non_string_list_elements() {
    let json = r#"{"id":"o-4","timestamp":"2024-03-01T10:00:00Z","colors":["Navy",7,null,"Rust"],"fabrics":"Wool"}"#;
    let record: OutfitRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.colors, vec!["Navy".to_string(), "Rust".to_string()]);
    assert!(record.fabrics.is_empty());
}

#[test]
fn outfit_record_without_timestamp_or_id_is_kept() {
    let record: OutfitRecord = serde_json::from_str(r#"{"colors":["Red"],"occasion":"Casual"}"#).unwrap();
    assert_eq!(record.id, "");
    assert_eq!(record.timestamp, UNKNOWN_TIMESTAMP);
    assert!(!record.has_timestamp());
    assert_eq!(record.colors, vec!["Red".to_string()]);
}

#[test]
fn outfit_record_reads_epoch_millis_and_rejects_bad_text() {
    let millis: OutfitRecord =
        serde_json::from_str(r#"{"id":"o-5","timestamp":1709287200000}"#).unwrap();
    assert_eq!(millis.timestamp, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());

    let garbled: OutfitRecord =
        serde_json::from_str(r#"{"id":"o-6","timestamp":"last tuesday"}"#).unwrap();
    assert!(!garbled.has_timestamp());
}

#[test]
fn outfit_record_ignores_non_string_tags() {
    let json = r#"{"id":"o-7","timestamp":"2024-03-01T10:00:00Z","occasion":3,"weather":{"temp":20}}"#;
    let record: OutfitRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.occasion, None);
    assert_eq!(record.weather, None);
}

#[test]
fn empty_occasion_and_weather_count_as_untagged() {
    let json = r#"{"id":"o-2","timestamp":"2024-03-01T10:00:00Z","occasion":"","weather":"Rainy"}"#;
    let record: OutfitRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.occasion_tag(), None);
    assert_eq!(record.weather_tag(), Some("Rainy"));
}

#[test]
fn new_outfit_into_record_keeps_tags() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
    let record = NewOutfit {
        colors: vec!["Olive".into()],
        fabrics: vec!["Linen".into()],
        occasion: Some("Work".into()),
        weather: None,
    }
    .into_record("o-3".into(), at);
    assert_eq!(record.id, "o-3");
    assert_eq!(record.timestamp, at);
    assert_eq!(record.occasion_tag(), Some("Work"));
}

#[test]
fn legacy_closet_entry_normalizes_to_named_item() {
    let entry: StoredClosetEntry = serde_json::from_str(r#""White sneakers""#).unwrap();
    let item = entry.normalize();
    assert_eq!(item.name, "White sneakers");
    assert_eq!(item.id, "legacy:White sneakers");
    assert!(item.is_legacy());
    assert!(item.category.is_none());
}

#[test]
fn structured_closet_entry_normalizes_fields() {
    let json = r#"{"id":1700000000000,"name":"Silk blouse","category":"Tops","color":"Blush","fabric":"Silk","image":"","addedAt":"2024-01-02T03:04:05Z"}"#;
    let entry: StoredClosetEntry = serde_json::from_str(json).unwrap();
    let item = entry.normalize();
    assert_eq!(item.id, "1700000000000");
    assert_eq!(item.category.as_deref(), Some("Tops"));
    assert_eq!(item.fabric.as_deref(), Some("Silk"));
    // Empty strings collapse to None.
    assert!(item.image.is_none());
    assert!(item.added_at.is_some());
    assert!(!item.is_legacy());
}

#[test]
fn structured_closet_entry_without_id_is_unidentified_not_legacy() {
    let entry: StoredClosetEntry = serde_json::from_str(r#"{"name":"Wool coat"}"#).unwrap();
    let item = entry.normalize();
    assert_eq!(item.id, "unidentified:Wool coat");
    assert!(!item.is_legacy());
}

#[test]
fn normalized_item_survives_a_store_cycle() {
    let item = ClosetItem {
        id: "c-1".into(),
        name: "Wool coat".into(),
        category: Some("Outerwear".into()),
        color: Some("Navy".into()),
        fabric: Some("Wool".into()),
        image: None,
        added_at: Some(Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap()),
    };
    let json = serde_json::to_string(&item).unwrap();
    let entry: StoredClosetEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(entry.normalize(), item);
}

#[test]
fn closet_item_update_only_touches_some_fields() {
    let mut item = ClosetItem::named("c-2".into(), "Tee".into());
    let update = ClosetItemUpdate {
        fabric: Some("Cotton".into()),
        ..Default::default()
    };
    update.apply(&mut item);
    assert_eq!(item.name, "Tee");
    assert_eq!(item.fabric.as_deref(), Some("Cotton"));
    assert!(item.color.is_none());
}

#[test]
fn persona_serializes_type_key() {
    let persona = Persona::from(PersonaType::Minimalist);
    let json = serde_json::to_value(&persona).unwrap();
    assert_eq!(json["type"], "Minimalist");
    assert_eq!(json["description"], "You prefer timeless, understated elegance");
}
