#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use crate::{flatten_keys, test::locale_map};

    fn keys(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flat_keys() {
        let tree = locale_map(r#"{ "greeting": "Hello", "count": 3, "empty": null }"#);
        assert_eq!(
            flatten_keys(&tree, ""),
            keys(&["count", "empty", "greeting"])
        );
    }

    #[test]
    fn test_nested_objects_emit_parent_and_children() {
        let tree = locale_map(
            r#"{
                "settings": {
                    "title": "Settings",
                    "security": { "pin": "PIN" }
                }
            }"#,
        );
        assert_eq!(
            flatten_keys(&tree, ""),
            keys(&[
                "settings",
                "settings.security",
                "settings.security.pin",
                "settings.title",
            ])
        );
    }

    #[test]
    fn test_plural_block_is_a_leaf() {
        let tree = locale_map(
            r#"{
                "wallet": {
                    "items": { "oneValue": "%count% item", "otherValue": "%count% items" },
                    "label": "Wallet"
                }
            }"#,
        );
        let flat = flatten_keys(&tree, "");
        assert_eq!(flat, keys(&["wallet", "wallet.items", "wallet.label"]));
        assert!(!flat.iter().any(|k| k.ends_with("Value")));
    }

    #[test]
    fn test_single_plural_field_is_enough() {
        let tree = locale_map(r#"{ "days": { "manyValue": "many days", "note": "x" } }"#);
        assert_eq!(flatten_keys(&tree, ""), keys(&["days"]));
    }

    #[test]
    fn test_prefix_is_applied() {
        let tree = locale_map(r#"{ "a": "1", "b": { "c": "2" } }"#);
        assert_eq!(
            flatten_keys(&tree, "root"),
            keys(&["root.a", "root.b", "root.b.c"])
        );
    }

    #[test]
    fn test_arrays_are_leaves() {
        let tree = locale_map(r#"{ "list": [ { "a": 1 } ] }"#);
        assert_eq!(flatten_keys(&tree, ""), keys(&["list"]));
    }
}
