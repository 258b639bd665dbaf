use signforge::DictionaryManifest;

#[test]
fn json_fixture_validates() {
    let s = include_str!("data/dictionary_manifest.json");
    let manifest: DictionaryManifest = serde_json::from_str(s).unwrap();
    manifest.validate().unwrap();
    assert_eq!(manifest.total_signs, 2);
}

#[test]
fn generated_manifest_matches_fixture_shape() {
    let manifest =
        DictionaryManifest::from_entries(&signforge::catalog::dictionary::DICTIONARY);
    let json = serde_json::to_value(&manifest).unwrap();

    assert!(json["signs"]["hello"]["category"].is_string());
    assert_eq!(json["signs"]["hello"]["difficulty"], "easy");
    assert_eq!(json["total_signs"], 53);
    assert_eq!(
        json["difficulty_levels"],
        serde_json::json!(["easy", "medium", "hard"])
    );
}
