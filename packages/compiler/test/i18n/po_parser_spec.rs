//! PO Parser Tests

use i19_compiler::i18n::{
    parse_po, CatalogTransformer, ConversionCache, MessageId, MessageValue, RunStats,
};
use i19_compiler::LogContext;

const FRENCH: &str = r#"# French translations
msgid ""
msgstr ""
"Project-Id-Version: demo 1.0\n"
"Language: fr\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"

#: templates/hello.html:3
msgid "Hello ${name}"
msgstr "Bonjour ${name}"

#, fuzzy
msgctxt "menu"
msgid "File"
msgstr ""
"Fich"
"ier"

msgid "${n} item"
msgid_plural "${n} items"
msgstr[0] "${n} article"
msgstr[1] "${n} articles"

#~ msgid "Old"
#~ msgstr "Ancien"
"#;

#[test]
fn should_decode_header_fields() {
    let catalog = parse_po(FRENCH, "fr.po").unwrap();
    assert_eq!(catalog.header("Language"), Some("fr"));
    assert_eq!(
        catalog.header("Plural-Forms"),
        Some("nplurals=2; plural=(n > 1);")
    );
    assert_eq!(catalog.header("language"), None);
}

#[test]
fn should_decode_header_split_across_lines() {
    let source = "msgid \"\"\nmsgstr \"\"\n\"Plural-Forms: nplurals=2; \"\n\"plural=(n > 1);\\n\"\n\nmsgid \"a\"\nmsgstr \"b\"\n";
    let catalog = parse_po(source, "t.po").unwrap();
    assert_eq!(
        catalog.header("Plural-Forms"),
        Some("nplurals=2; plural=(n > 1);")
    );
    assert_eq!(catalog.entries.len(), 1);
}

#[test]
fn should_exclude_header_and_obsolete_entries() {
    let catalog = parse_po(FRENCH, "fr.po").unwrap();
    let keys: Vec<_> = catalog.entries.iter().map(|e| e.id.key()).collect();
    assert_eq!(keys, vec!["Hello ${name}", "File", "${n} item"]);
}

#[test]
fn should_parse_singular_entry() {
    let catalog = parse_po(FRENCH, "fr.po").unwrap();
    let entry = &catalog.entries[0];
    assert!(!entry.is_pluralizable());
    assert_eq!(entry.context, None);
    assert_eq!(entry.strings, vec!["Bonjour ${name}".to_string()]);
}

#[test]
fn should_join_continuation_lines_and_keep_flags() {
    let catalog = parse_po(FRENCH, "fr.po").unwrap();
    let entry = &catalog.entries[1];
    assert_eq!(entry.context.as_deref(), Some("menu"));
    assert_eq!(entry.strings, vec!["Fichier".to_string()]);
    assert!(entry.is_fuzzy());
}

#[test]
fn should_parse_plural_entry() {
    let catalog = parse_po(FRENCH, "fr.po").unwrap();
    let entry = &catalog.entries[2];
    assert_eq!(
        entry.id,
        MessageId::Plural {
            singular: "${n} item".into(),
            plural: "${n} items".into(),
        }
    );
    assert_eq!(
        entry.strings,
        vec!["${n} article".to_string(), "${n} articles".to_string()]
    );
}

const RUSSIAN_HEADER: &str = r#"msgid ""
msgstr ""
"Language: ru\n"
"Plural-Forms: nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);\n"

"#;

#[test]
fn should_pad_plural_forms_to_catalog_count() {
    let source = format!(
        "{}msgid \"${{n}} file\"\nmsgid_plural \"${{n}} files\"\nmsgstr[0] \"${{n}} файл\"\nmsgstr[1] \"${{n}} файла\"\n",
        RUSSIAN_HEADER
    );
    let catalog = parse_po(&source, "ru.po").unwrap();
    let entry = &catalog.entries[0];
    assert_eq!(
        entry.strings,
        vec![
            "${n} файл".to_string(),
            "${n} файла".to_string(),
            String::new()
        ]
    );

    let mut originals = serde_json::Map::new();
    originals.insert("${n} file".into(), serde_json::json!([null, "${n} file"]));
    let cache = ConversionCache::from_json(&serde_json::json!([{}, originals]).to_string()).unwrap();
    let ctx = LogContext::default();
    let result = CatalogTransformer::new(&cache, &ctx)
        .convert_catalog(&catalog)
        .unwrap();
    assert_eq!(result.stats, RunStats { total: 3, translated: 2 });
    assert_eq!(
        result.messages["${n} file"],
        MessageValue::Plural(vec![
            "${n} файл".into(),
            "${n} файла".into(),
            String::new()
        ])
    );
}

#[test]
fn should_keep_plural_forms_without_header() {
    let source = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\n";
    let catalog = parse_po(source, "t.po").unwrap();
    assert_eq!(catalog.entries[0].strings, vec!["x".to_string()]);
}

#[test]
fn should_reject_more_forms_than_catalog_allows() {
    let source = format!(
        "{}msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\nmsgstr[1] \"y\"\nmsgstr[2] \"z\"\nmsgstr[3] \"w\"\n",
        RUSSIAN_HEADER
    );
    let err = parse_po(&source, "ru.po").unwrap_err();
    assert_eq!(err.location.url, "ru.po");
    assert!(err.msg.contains("catalog allows 3"), "{}", err.msg);
}

#[test]
fn should_not_panic_on_huge_plural_index() {
    let source = format!(
        "{}msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[18446744073709551615] \"x\"\nmsgstr[100000000] \"y\"\n",
        RUSSIAN_HEADER
    );
    if let Ok(catalog) = parse_po(&source, "ru.po") {
        assert!(catalog.entries.iter().all(|e| e.strings.len() <= 3));
    }
}

#[test]
fn should_parse_without_trailing_blank_line() {
    let catalog = parse_po("msgid \"a\"\nmsgstr \"b\"", "t.po").unwrap();
    assert_eq!(catalog.entries.len(), 1);
    assert!(catalog.headers.is_empty());
}
