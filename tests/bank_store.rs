use outcomes_builder::bank::{BankStore, PhraseBank};
use outcomes_builder::error::OutcomesError;
use outcomes_builder::i18n::Lang;

#[test]
fn missing_or_corrupt_file_loads_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = BankStore::new(dir.path());
    assert_eq!(store.load(), PhraseBank::default());

    std::fs::write(store.path(), "{ not json").unwrap();
    assert_eq!(store.load(), PhraseBank::default());
}

#[test]
fn invalid_edit_is_rejected_and_bank_kept() {
    let dir = tempfile::tempdir().unwrap();
    let store = BankStore::new(dir.path());
    let mut bank = store.load();
    let before = bank.clone();

    let err = store
        .save_from_text(Lang::En, "{\"bloomVerbs\": [", &mut bank)
        .unwrap_err();
    assert!(matches!(err, OutcomesError::InvalidBank { .. }));
    assert!(err.to_string().starts_with("Invalid JSON"));
    assert_eq!(bank, before);
    assert!(!store.path().exists());
}

#[test]
fn valid_edit_replaces_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = BankStore::new(dir.path().join("nested"));
    let mut bank = store.load();

    store
        .save_from_text(
            Lang::Es,
            r#"{"bloomVerbs": {"Crear": ["inventar"]}, "resources": ["con arcilla"]}"#,
            &mut bank,
        )
        .unwrap();
    assert_eq!(bank.verbs_for("Crear"), ["inventar".to_string()]);
    assert!(bank.products.is_empty());

    let reloaded = BankStore::new(dir.path().join("nested")).load();
    assert_eq!(reloaded, bank);

    store.clear().unwrap();
    assert_eq!(store.load(), PhraseBank::default());
}

#[test]
fn default_bank_serializes_with_camel_case_keys() {
    let json = PhraseBank::default().to_pretty_json();
    for key in ["bloomVerbs", "areaExamples", "resources", "products"] {
        assert!(json.contains(key));
    }
    assert!(json.find("Recordar").unwrap() < json.find("Crear").unwrap());
}

#[test]
fn failed_write_is_reported_but_edit_kept_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("data");
    std::fs::write(&not_a_dir, "x").unwrap();
    let store = BankStore::new(&not_a_dir);
    let mut bank = PhraseBank::default();

    let err = store
        .save_from_text(Lang::Es, r#"{"resources": ["con arcilla"]}"#, &mut bank)
        .unwrap_err();
    assert!(matches!(err, OutcomesError::Storage { .. }));
    assert!(!store.path().exists());
    assert_eq!(bank.resources, vec!["con arcilla".to_string()]);
}
