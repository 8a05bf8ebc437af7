//! Translator conformance: exact rendered requests for the documented
//! command forms.

use grnscript::{Translation, Translator};

fn translate(translator: &mut Translator, line: &str) -> String {
    translator.translate(line).unwrap().into_string()
}

#[test]
fn test_command_without_arguments() {
    let mut translator = Translator::new();
    assert_eq!(translate(&mut translator, "dump"), "/d/dump");
}

#[test]
fn test_positional_arguments_become_named() {
    let mut translator = Translator::new();
    assert_eq!(
        translate(&mut translator, "table_create Site TABLE_HASH_KEY ShortText"),
        "/d/table_create?name=Site&flags=TABLE_HASH_KEY&key_type=ShortText"
    );
}

#[test]
fn test_explicit_named_argument() {
    let mut translator = Translator::new();
    assert_eq!(
        translate(&mut translator, "select --table Sites"),
        "/d/select?table=Sites"
    );
}

#[test]
fn test_quoted_value_loses_interior_whitespace() {
    let mut translator = Translator::new();
    assert_eq!(
        translate(&mut translator, "select Sites --output_columns '_key, uri'"),
        "/d/select?table=Sites&output_columns=_key,uri"
    );
}

#[test]
fn test_comment_translates_to_itself() {
    let mut translator = Translator::new();
    assert_eq!(
        translate(&mut translator, "#this is comment."),
        "#this is comment."
    );
}

#[test]
fn test_translation_is_idempotent() {
    let mut translator = Translator::new();
    let line = "column_create Sites uri COLUMN_SCALAR ShortText";
    assert_eq!(
        translate(&mut translator, line),
        translate(&mut translator, line)
    );
}

#[test]
fn test_load_folds_into_one_request() {
    let mut translator = Translator::new();
    let header = translator.translate("load --table Sites").unwrap();
    assert!(matches!(header, Translation::LoadHeader(_)));
    assert!(translator.in_load_block());

    for line in ["[", r#"["groonga","http://groonga.org/"]"#, "]"] {
        let out = translator.translate(line).unwrap();
        assert!(matches!(out, Translation::ValuesFragment(_)));
    }

    let request = translator.finish_load().unwrap();
    assert_eq!(
        request,
        "/d/load?table=Sites&values=[%0A[%22groonga%22,%22http://groonga.org/%22]%0A]"
    );
    assert!(!translator.in_load_block());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_translation_serializes_to_json() {
    let translation = Translation::Request("/d/select?table=Sites".to_string());
    let json = serde_json::to_string(&translation).unwrap();
    assert_eq!(json, r#"{"Request":"/d/select?table=Sites"}"#);

    let back: Translation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, translation);
}
