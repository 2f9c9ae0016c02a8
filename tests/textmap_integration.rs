//! Integration tests for text-map interpolation

use std::path::Path;

use pretty_assertions::assert_eq;

use interpolate_text::textmap::{render_text_map, BatchError};
use interpolate_text::{
    render_with_config, Data, ErrorPolicy, RenderConfig, RenderError, RenderMode, TextMap,
    TextMapError, TextMapTemplate, TextMapTemplates,
};

fn fixture_map() -> TextMap {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fruit.toml");
    TextMap::from_file(&path).expect("Should load fixture")
}

#[test]
fn test_fixture_loads_uppercased() {
    let map = fixture_map();
    assert_eq!(map.name.as_deref(), Some("fruit"));
    assert_eq!(map.get("DEF"), Some("apple"));
    assert_eq!(map.get("ABC"), Some("banana"));
    assert_eq!(map.get("JK"), Some("[JP-Skrt]"));
}

#[test]
fn test_single_template() {
    let tpl = TextMapTemplate::new("Abc${DEF}Ghi").unwrap();
    assert_eq!(tpl.render(&fixture_map(), ErrorPolicy::Raise).unwrap(), "AbcappleGhi");
}

#[test]
fn test_missing_key_preserved_unchanged() {
    let map: TextMap = [("ABC", "banana")].into_iter().collect();
    let tpl = TextMapTemplate::new("Abc${DEF}Ghi").unwrap();
    assert_eq!(tpl.render(&map, ErrorPolicy::Preserve).unwrap(), "Abc${DEF}Ghi");
}

#[test]
fn test_batch_shared_map() {
    let batch = TextMapTemplates::new(["Abc${dEf}Ghi${JK}L", "Mno${dEf}", "${JK}", "WWW"]).unwrap();
    let map: TextMap = [("DEF", "-www-"), ("JK", "[JP-Skrt]")].into_iter().collect();
    assert_eq!(
        batch.render(&map, ErrorPolicy::Raise).unwrap(),
        vec!["Abc-www-Ghi[JP-Skrt]L", "Mno-www-", "[JP-Skrt]", "WWW"]
    );
}

#[test]
fn test_batch_stops_at_first_bad_template() {
    let err = TextMapTemplates::new(vec!["fine".to_string(), "${".to_string()]).unwrap_err();
    match err {
        BatchError::Parse { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source.position(), 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_plain_hashmap_data() {
    let values = std::collections::HashMap::from([("DEF".to_string(), "apple".to_string())]);
    let tpl = TextMapTemplate::new("${def}!").unwrap();
    assert_eq!(tpl.render(&values, ErrorPolicy::Raise).unwrap(), "apple!");
}

#[test]
fn test_mixed_shape_data() {
    let map = fixture_map();
    let tpl = TextMapTemplate::new("<${abc}>").unwrap();
    assert_eq!(tpl.render(&Data::from(&map), ErrorPolicy::Raise).unwrap(), "<banana>");
    assert_eq!(
        tpl.render(&Data::from("text"), ErrorPolicy::Raise).unwrap_err(),
        TextMapError::UnsupportedDataShape
    );
    assert_eq!(
        tpl.render(&Data::Empty, ErrorPolicy::Preserve).unwrap(),
        "<${ABC}>"
    );
}

#[test]
fn test_one_pass_matches_compiled() {
    let map = fixture_map();
    let template = r"${def}\${abc}$$${JK}\\${zz}{}";
    let compiled = TextMapTemplate::new(template)
        .unwrap()
        .render(&map, ErrorPolicy::Preserve)
        .unwrap();
    let once = render_text_map(template, &map, ErrorPolicy::Preserve).unwrap();
    assert_eq!(compiled, once);
    assert_eq!(once, r"apple${abc}$$[JP-Skrt]\${ZZ}{}");
}

#[test]
fn test_raise_reports_template_error_after_missing_key() {
    let compiled = TextMapTemplate::new("${x}${").unwrap_err();
    let config = RenderConfig::new().with_mode(RenderMode::OnePass);
    match render_with_config("${x}${", &TextMap::new(), &config) {
        Err(RenderError::Parse(err)) => {
            assert_eq!(err.position(), 4);
            assert_eq!(err.to_string(), compiled.to_string());
        }
        other => panic!("expected template error, got {other:?}"),
    }
}

#[test]
fn test_config_dispatch() {
    let map = fixture_map();
    for mode in [RenderMode::Compiled, RenderMode::OnePass] {
        let raise = RenderConfig::new().with_mode(mode);
        assert!(matches!(
            render_with_config("${nope}", &map, &raise),
            Err(RenderError::Apply(TextMapError::KeyNotFound(_)))
        ));
        let preserve = raise.with_policy(ErrorPolicy::Preserve);
        assert_eq!(
            render_with_config("${nope} ${def}", &map, &preserve).unwrap(),
            "${NOPE} apple"
        );
    }
}
