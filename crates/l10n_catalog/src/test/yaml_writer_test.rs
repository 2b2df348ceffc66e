#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};

    use crate::{
        CatalogError, convert_json_to_yaml, default_yaml_output, loader::load_locale_file,
        locale_map_to_yaml, test::locale_map, test::write_file,
    };

    #[test]
    fn test_yaml_layout() {
        let map = locale_map(
            r#"{
                "greeting": "Hello %name%!",
                "multi": "a\nb",
                "items": { "oneValue": "%count% item", "otherValue": "x\ny\n" },
                "404": "Not found",
                "n": 3,
                "flag": true,
                "empty": ""
            }"#,
        );
        let expected = "\
greeting: Hello %name%!
multi: |-
  a
  b
items:
  oneValue: \"%count% item\"
  otherValue: |
    x
    y
\"404\": Not found
n: 3
flag: true
empty: \"\"
";
        assert_eq!(locale_map_to_yaml(&map), expected);
    }

    #[test]
    fn test_yaml_reads_back_unchanged() {
        let map = locale_map(
            r##"{
                "404": "key: value",
                "$domains_expire": { "oneValue": "%days% day", "otherValue": "%days% days" },
                "with space": "# hash",
                "dotted.key": "yes",
                "number_text": "12",
                "padded": " padded ",
                "tab": "tab\there",
                "indented": "line1\n  indented\n",
                "kept": "trailing\n\n",
                "blank_line": "a\n\nb",
                "spaces_line": "x\n   \ny",
                "leading_space": " first\nsecond",
                "quoted": "\"quoted\"",
                "unicode": "ünï",
                "dash": "-dash",
                "inf": ".inf",
                "null_text": "null",
                "empty": "",
                "n": 3,
                "ratio": 1.5,
                "flag": false,
                "nothing": null,
                "list": ["a", 1],
                "empty_map": {}
            }"##,
        );
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "en.yaml", &locale_map_to_yaml(&map));

        let loaded = load_locale_file(&dir.path().join("en.yaml")).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(
            default_yaml_output(Path::new("src/i18n/strings_en.json")),
            PathBuf::from("strings.yaml")
        );
        assert_eq!(default_yaml_output(Path::new("en.json")), PathBuf::from("en.yaml"));
        assert_eq!(default_yaml_output(Path::new("i18n/fr.json")), PathBuf::from("fr.yaml"));
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "en.json", r#"{ "b": "two\nlines", "a": "one" }"#);
        let output = dir.path().join("en.yaml");

        convert_json_to_yaml(&dir.path().join("en.json"), &output).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "b: |-\n  two\n  lines\na: one\n"
        );

        write_file(dir.path(), "list.json", r#"["a"]"#);
        let err = convert_json_to_yaml(&dir.path().join("list.json"), &output).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
