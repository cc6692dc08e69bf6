use super::*;

#[test]
fn builtin_has_the_production_presets() {
    let table = PresetTable::builtin();
    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(keys, vec!["breaking news", "name super", "single line"]);
    assert_eq!(table.fallback_key(), FALLBACK_STRAP_TYPE);

    let name_super = table.lookup(DEFAULT_STRAP_TYPE);
    assert_eq!(name_super.fields.len(), 2);
    assert_eq!(name_super.fields[0].role, TextRole::Primary);
    assert_eq!(name_super.fields[1].role, TextRole::Secondary);

    let breaking = table.lookup("breaking news");
    assert_eq!(breaking.fields.len(), 1);
    assert_eq!(breaking.fields[0].align, TextAlign::Center);
    assert!(matches!(
        breaking.fields[0].paint,
        Paint::VerticalGradient { .. }
    ));
}

#[test]
fn builtin_presets_validate() {
    let table = PresetTable::builtin();
    for key in ["name super", "single line", "breaking news"] {
        table.lookup(key).validate().unwrap();
    }
}

#[test]
fn unknown_types_get_the_fallback() {
    let table = PresetTable::builtin();
    assert_eq!(table.lookup("foo"), table.lookup(FALLBACK_STRAP_TYPE));
    assert_eq!(table.lookup(""), table.lookup("single line"));
}

#[test]
fn new_requires_the_fallback_key() {
    let table = PresetTable::builtin();
    let mut presets = BTreeMap::new();
    presets.insert(
        "only".to_string(),
        table.lookup(DEFAULT_STRAP_TYPE).clone(),
    );

    let err = PresetTable::new(presets, "missing").unwrap_err();
    assert!(err.to_string().contains("fallback key"));
}

#[test]
fn new_validates_every_preset() {
    let table = PresetTable::builtin();
    let mut broken = table.lookup(DEFAULT_STRAP_TYPE).clone();
    broken.wipe_in_sec = 0.0;

    let mut presets = BTreeMap::new();
    presets.insert("broken".to_string(), broken);
    assert!(PresetTable::new(presets, "broken").is_err());
}

#[test]
fn rejects_empty_preset_keys() {
    let table = PresetTable::builtin();
    let mut presets = BTreeMap::new();
    presets.insert(String::new(), table.lookup(DEFAULT_STRAP_TYPE).clone());
    assert!(PresetTable::new(presets, "").is_err());
}

#[test]
fn json_round_trip_preserves_the_table() {
    let table = PresetTable::builtin();
    let json = table.to_json().unwrap();
    let back = PresetTable::from_json(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn from_json_rejects_garbage() {
    assert!(PresetTable::from_json("not json").is_err());
    assert!(PresetTable::from_json("{\"fallback\":\"x\",\"presets\":{}}").is_err());
}
