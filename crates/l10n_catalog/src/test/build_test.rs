#[cfg(test)]
mod test {
    use std::fs;

    use serde_json::Value;

    use crate::{CatalogConfig, CatalogError, build_catalog, run_build, test::write_file};

    fn config_for(root: &std::path::Path) -> CatalogConfig {
        CatalogConfig {
            input_dir: root.join("i18n"),
            output: root.join("out/Localizable.xcstrings"),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn test_run_build_writes_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(
            root,
            "i18n/en.yaml",
            "greeting: Hello %name%!\nitems:\n  oneValue: \"%count% item\"\n  otherValue: \"%count% items\"\n",
        );
        write_file(root, "i18n/es.json", r#"{ "greeting": "Hola %name%!" }"#);
        write_file(root, "i18n/air/air_en.json", r#"{ "air_only": "From air" }"#);

        let config = config_for(root);
        let report = run_build(&config).unwrap();
        assert_eq!(report.entry_count, 3);
        assert_eq!(report.locale_count, 2);
        assert_eq!(report.source_file_count, 2);

        let text = fs::read_to_string(&config.output).unwrap();
        let document: Value = serde_json::from_str(&text).unwrap();
        let strings = &document["strings"];
        assert_eq!(
            strings["greeting"]["localizations"]["es"]["stringUnit"]["value"],
            "Hola %1$@!"
        );
        assert_eq!(
            strings["items"]["localizations"]["en"]["variations"]["plural"]["other"]["stringUnit"]
                ["value"],
            "%1$lld items"
        );
        assert_eq!(
            strings["air_only"]["localizations"]["en"]["stringUnit"]["value"],
            "From air"
        );
        assert!(!root.join("out/Localizable.xcstrings.tmp").exists());
    }

    #[test]
    fn test_no_files_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("i18n")).unwrap();
        let config = config_for(dir.path());
        let err = run_build(&config).unwrap_err();
        assert!(matches!(err, CatalogError::NoInputFiles(_)));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "i18n/de.json", r#"{ "k": "v" }"#);
        let config = config_for(dir.path());
        let err = run_build(&config).unwrap_err();
        assert!(matches!(err, CatalogError::MissingSourceLocale(_)));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_empty_source_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "i18n/en.json", "{}");
        write_file(dir.path(), "out/Localizable.xcstrings", "previous");
        let config = config_for(dir.path());
        let err = run_build(&config).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySourceLocale(_)));
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "previous");
    }

    #[test]
    fn test_custom_prefix_and_source_locale() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "i18n/app_RU.json", r#"{ "k": "ру" }"#);
        write_file(dir.path(), "i18n/app_en.json", r#"{ "k": "en" }"#);
        let config = CatalogConfig {
            source_locale: "ru".to_string(),
            locale_prefix: "app_".to_string(),
            ..config_for(dir.path())
        };
        let (catalog, merged) = build_catalog(&config).unwrap();
        assert_eq!(catalog.source_language, "ru");
        assert_eq!(merged.source().token, "ru");
        let locales: Vec<&str> = catalog.strings.get("k").unwrap().localizations.keys().collect();
        assert_eq!(locales, vec![catalog.source_language.as_str(), "en"]);
    }
}
