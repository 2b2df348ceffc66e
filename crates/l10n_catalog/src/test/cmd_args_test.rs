#[cfg(all(test, feature = "cli"))]
mod test {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::{
        LogVerbosity,
        cmd_args::{BuildArgs, JsonToYamlArgs, StringsToJsonArgs},
        test::write_file,
    };

    #[test]
    fn test_defaults_without_flags() {
        let args = BuildArgs::try_parse_from(["l10n_catalog"]).unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config, crate::CatalogConfig::default());
        assert_eq!(args.verbosity(), LogVerbosity::Normal);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "catalog.yaml",
            "inputDir: from_file\nsourceLocale: de\noutput: file.xcstrings\n",
        );
        let config_path = dir.path().join("catalog.yaml");
        let args = BuildArgs::try_parse_from([
            "l10n_catalog",
            "--config",
            config_path.to_str().unwrap(),
            "-s",
            "fr",
            "--extra-dir",
            "a",
            "--extra-dir",
            "b",
            "-q",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.input_dir, PathBuf::from("from_file"));
        assert_eq!(config.source_locale, "fr");
        assert_eq!(config.output, PathBuf::from("file.xcstrings"));
        assert_eq!(config.extra_dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(args.verbosity(), LogVerbosity::Quiet);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(BuildArgs::try_parse_from(["l10n_catalog", "-v", "-q"]).is_err());
        assert_eq!(LogVerbosity::from_flags(true, false), LogVerbosity::Verbose);
    }

    #[test]
    fn test_converter_args() {
        let args =
            StringsToJsonArgs::try_parse_from(["l10n_strings_to_json", "Localizable.strings", "-o", "en.json"])
                .unwrap();
        assert_eq!(args.input, PathBuf::from("Localizable.strings"));
        assert_eq!(args.output, Some(PathBuf::from("en.json")));

        let args = JsonToYamlArgs::try_parse_from(["l10n_json_to_yaml", "en.json"]).unwrap();
        assert_eq!(args.input, PathBuf::from("en.json"));
        assert_eq!(args.output, None);
        assert!(JsonToYamlArgs::try_parse_from(["l10n_json_to_yaml"]).is_err());
    }
}
