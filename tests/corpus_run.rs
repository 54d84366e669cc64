use moji_core::config::Spacing;
use moji_core::core::types::Category;
use moji_core::corpus::read_corpus;
use moji_core::persistence::{load_bootstrap, save_to_disk, to_json};
use moji_core::Analyzer;
use std::fs;

const CORPUS: &str = "\
### happy, cat, cute
(=^_^=)
(=^_^=)
ヽ(=^_^=)ﾉ
(=^ω^=)
### sad
(;T_T;)
(T_T)
(T%T)
(((
\\(ツ)/
";

#[test]
fn full_run_writes_a_dictionary_that_seeds_the_next_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source_mojis.txt");
    let output = dir.path().join("results.json");
    fs::write(&input, CORPUS).unwrap();

    let records = read_corpus(&input).unwrap();
    let mut analyzer = Analyzer::from_file_or_new(&output);
    analyzer.process_corpus(&records);
    let (dictionary, stats) = analyzer.finish();

    // `ヽ(...)ﾉ` holds a denied glyph, `(T%T)` the escape character and
    // `(((` has no closing side.
    assert_eq!(stats.directives, 2);
    assert_eq!(stats.accepted, 6);
    assert_eq!(stats.rejected_total(), stats.records - 8);

    let cat_eyes = dictionary.get(Category::Eyes, "^%^").unwrap();
    assert_eq!(cat_eyes.count, 3);
    assert_eq!(cat_eyes.tags, vec!["happy", "cat", "cute"]);

    let tears = dictionary.get(Category::Eyes, "T%T").unwrap();
    assert_eq!(tears.count, 2);
    assert_eq!(tears.tags, vec!["sad"]);

    let shrug = dictionary.get(Category::Eyes, "ツ").unwrap();
    assert_eq!(shrug.count, 1);
    assert_eq!(dictionary.get(Category::Arms, "\\%/").unwrap().count, 1);

    // Sides are shared by both contexts; neither emotion reaches the share.
    let parens = dictionary.get(Category::Sides, "(%)").unwrap();
    assert_eq!(parens.count, 6);
    assert!(parens.tags.is_empty());

    save_to_disk(&dictionary, &output, &Spacing::default()).unwrap();
    let reloaded = load_bootstrap(&output);
    assert_eq!(reloaded, dictionary);

    let mut tags = reloaded.tags_used();
    tags.sort();
    assert_eq!(tags, vec!["cat", "cute", "happy", "sad"]);

    // A second run starts with the first run's mouths as prior knowledge.
    let second = Analyzer::from_file_or_new(&output);
    let analysis = second.analyze("(aωb)").unwrap();
    assert_eq!(analysis.parts()[0], (Category::Mouths, "ω".to_string()));
}

#[test]
fn written_file_matches_compact_serialization() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.json");

    let mut analyzer = Analyzer::new();
    analyzer.process_corpus(["(T_T)"]);
    let (dictionary, _) = analyzer.finish();
    save_to_disk(&dictionary, &output, &Spacing::default()).unwrap();

    let written = fs::read(&output).unwrap();
    assert_eq!(written, to_json(&dictionary, &Spacing::default()).unwrap());
    assert_eq!(
        String::from_utf8(written).unwrap(),
        concat!(
            r#"{"arms":{"%":{"count":1,"tags":[]}},"#,
            r#""eyes":{"T%T":{"count":1,"tags":[]}},"#,
            r#""insides":{"%":{"count":1,"tags":[]}},"#,
            r#""mouths":{"_":{"count":1,"tags":[]}},"#,
            r#""outsides":{"%":{"count":1,"tags":[]}},"#,
            r#""sides":{"(%)":{"count":1,"tags":[]}}}"#
        )
    );
}
