use audit_yaml::parse;

#[test]
fn snapshot_rendered_scoring_document() {
    let input = r#"
# thresholds are checked top to bottom
effort:
  commit:
    - min: 100
      points: 15
    - min: 20
      points: 10
polish:
  readme: 2
  ci: 3
categories:
  "experiment":
    commitMax: 4
    label: 'quick: hack'
"#;

    let rendered = parse(input).unwrap().to_yaml();

    insta::assert_snapshot!(rendered, @r###"
    effort:
      commit:
        - min: 100
          points: 15
        - min: 20
          points: 10
    polish:
      readme: 2
      ci: 3
    categories:
      experiment:
        commitMax: 4
        label: "quick: hack"
    "###);
}

#[test]
fn snapshot_tree_as_json() {
    let value = parse("Go:\n  extensions:\n    - .go\n  skipDirs:\n").unwrap();
    let json = serde_json::to_string(&serde_json::Value::from(&value)).unwrap();

    insta::assert_snapshot!(json, @r###"{"Go":{"extensions":[".go"],"skipDirs":null}}"###);
}
