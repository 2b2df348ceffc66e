#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crate::{
        CatalogConfig, CatalogError, TypeSpec, TypeSpecRule,
        config::{load_config, parse_config},
        test::write_file,
    };

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.source_locale, "en");
        assert_eq!(config.locale_prefix, "air_");
        assert_eq!(config.output, PathBuf::from("Localizable.xcstrings"));
        assert!(config.extra_dirs.is_empty());
        assert_eq!(config.reindexer().rules(), TypeSpecRule::builtin().as_slice());
    }

    #[test]
    fn test_parse_json_partial() {
        let config = parse_config(
            r#"{ "inputDir": "locales", "sourceLocale": "de", "typeSpecRules": [
                { "keyContains": "fee", "placeholder": "amount", "typeSpec": "integer" }
            ] }"#,
            "json",
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("locales"));
        assert_eq!(config.source_locale, "de");
        assert_eq!(config.locale_prefix, "air_");
        assert_eq!(
            config.type_spec_rules,
            vec![TypeSpecRule::new("fee", Some("amount"), TypeSpec::Integer)]
        );
        assert_eq!(config.reindexer().rules().len(), 3);
    }

    #[test]
    fn test_parse_yaml() {
        let config = parse_config(
            "output: out/Localizable.xcstrings\nextraDirs:\n  - extra\n  - more\nlocalePrefix: ''\n",
            "yaml",
        )
        .unwrap();
        assert_eq!(config.output, PathBuf::from("out/Localizable.xcstrings"));
        assert_eq!(
            config.extra_dirs,
            vec![PathBuf::from("extra"), PathBuf::from("more")]
        );
        assert_eq!(config.locale_prefix, "");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_yaml() {
        let config = parse_config("sourceLocale: ru\n", "conf").unwrap();
        assert_eq!(config.source_locale, "ru");
        assert_eq!(parse_config("  \n", "json").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config(r#"{ "typeSpecRules": [ { "keyContains": 3 } ] }"#, "json").is_err());

        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "bad.json", "{ not json");
        let err = load_config(&dir.path().join("bad.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));

        let err = load_config(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_locale_dirs_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CatalogConfig {
            input_dir: dir.path().to_path_buf(),
            ..CatalogConfig::default()
        };
        assert_eq!(config.locale_dirs(), vec![dir.path().to_path_buf()]);

        write_file(dir.path(), "air/air_en.json", "{}");
        assert_eq!(
            config.locale_dirs(),
            vec![dir.path().to_path_buf(), dir.path().join("air")]
        );

        config.extra_dirs = vec![PathBuf::from("other")];
        assert_eq!(
            config.locale_dirs(),
            vec![dir.path().to_path_buf(), PathBuf::from("other")]
        );
    }
}
