//! The configuration tree and the merge that combines two of them.

use serde_yaml_ng::{Mapping, Value};

/// A nested key-value configuration structure.
///
/// Values are scalars, sequences, or further mappings. The underlying map
/// preserves insertion order, so serialized output keeps a stable shape.
pub type ConfigTree = Mapping;

/// Combine `defaults` with a user-supplied tree, `loaded` taking precedence.
///
/// Rules, applied per key at every depth:
/// - present only in `defaults`: the defaults value is kept as-is;
/// - present in both and both sides are mappings: merged recursively;
/// - present in both otherwise: the loaded value wins verbatim (sequences
///   are replaced whole, never combined element-wise);
/// - present only in `loaded`: passed through unchanged.
///
/// Neither input is mutated; the result is a fresh tree.
pub fn merge(defaults: &ConfigTree, loaded: &ConfigTree) -> ConfigTree {
    let mut merged = ConfigTree::new();

    for (key, default_value) in defaults {
        let value = match (default_value, loaded.get(key)) {
            (Value::Mapping(d), Some(Value::Mapping(l))) => Value::Mapping(merge(d, l)),
            (_, Some(loaded_value)) => loaded_value.clone(),
            (_, None) => default_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    // Keys the user set that have no built-in default.
    for (key, loaded_value) in loaded {
        if !defaults.contains_key(key) {
            merged.insert(key.clone(), loaded_value.clone());
        }
    }

    merged
}

/// Look up a nested mapping by top-level key.
///
/// Returns `None` when the key is absent or its value is not a mapping.
pub fn section<'a>(tree: &'a ConfigTree, key: &str) -> Option<&'a ConfigTree> {
    tree.get(key).and_then(Value::as_mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree(yaml: &str) -> ConfigTree {
        match serde_yaml_ng::from_str(yaml).unwrap() {
            Value::Mapping(m) => m,
            other => panic!("test fixture is not a mapping: {other:?}"),
        }
    }

    #[test]
    fn nested_override_keeps_sibling_defaults() {
        let defaults = tree("{a: 1, b: {x: 1, y: 2}}");
        let loaded = tree("{b: {y: 9}, c: 3}");

        let merged = merge(&defaults, &loaded);

        assert_eq!(merged, tree("{a: 1, b: {x: 1, y: 9}, c: 3}"));
    }

    #[test]
    fn merge_is_idempotent() {
        let defaults = tree("{a: 1, b: {x: [1, 2], y: {deep: true}}, c: plain}");
        let loaded = tree("{b: {x: [9]}, d: extra}");

        let once = merge(&defaults, &loaded);
        let twice = merge(&defaults, &once);

        assert_eq!(twice, once);
    }

    #[test]
    fn defaults_survive_at_every_depth() {
        let defaults = tree("{top: kept, outer: {mid: kept, inner: {leaf: kept}}}");
        let loaded = tree("{outer: {inner: {other: new}}}");

        let merged = Value::Mapping(merge(&defaults, &loaded));

        assert_eq!(merged["top"], Value::from("kept"));
        assert_eq!(merged["outer"]["mid"], Value::from("kept"));
        assert_eq!(merged["outer"]["inner"]["leaf"], Value::from("kept"));
        assert_eq!(merged["outer"]["inner"]["other"], Value::from("new"));
    }

    #[test]
    fn loaded_scalar_wins_over_default() {
        let defaults = tree("{port: 8080, host: localhost}");
        let loaded = tree("{port: 9090}");

        let merged = merge(&defaults, &loaded);

        assert_eq!(merged, tree("{port: 9090, host: localhost}"));
    }

    #[test]
    fn user_only_keys_pass_through() {
        let defaults = tree("{a: 1}");
        let loaded = tree("{custom: {anything: [1, 2, 3]}}");

        let merged = merge(&defaults, &loaded);

        assert_eq!(merged.get("a"), Some(&Value::from(1)));
        assert_eq!(merged.get("custom"), loaded.get("custom"));
    }

    #[test]
    fn sequences_are_replaced_not_combined() {
        let defaults = tree("{hosts: [alpha, beta, gamma]}");
        let loaded = tree("{hosts: [delta]}");

        let merged = merge(&defaults, &loaded);

        assert_eq!(merged, tree("{hosts: [delta]}"));
    }

    #[test]
    fn loaded_mapping_replaces_default_scalar() {
        // Shape mismatch between the two sides: loaded wins verbatim.
        let defaults = tree("{timeout: 30}");
        let loaded = tree("{timeout: {secs: 30, retry: false}}");

        let merged = merge(&defaults, &loaded);

        assert_eq!(merged, loaded);
    }

    #[test]
    fn loaded_scalar_replaces_default_mapping() {
        let defaults = tree("{timeout: {secs: 30}}");
        let loaded = tree("{timeout: none}");

        let merged = merge(&defaults, &loaded);

        assert_eq!(merged, tree("{timeout: none}"));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let defaults = tree("{a: 1, b: {x: 1}}");
        let loaded = tree("{b: {x: 2}}");
        let defaults_before = defaults.clone();
        let loaded_before = loaded.clone();

        let _ = merge(&defaults, &loaded);

        assert_eq!(defaults, defaults_before);
        assert_eq!(loaded, loaded_before);
    }

    #[test]
    fn empty_loaded_yields_defaults() {
        let defaults = tree("{a: 1, b: {x: 1}}");

        let merged = merge(&defaults, &ConfigTree::new());

        assert_eq!(merged, defaults);
    }

    #[test]
    fn section_returns_nested_mapping() {
        let config = tree("{greeter: {greeting: hi}, flat: 1}");
        assert_eq!(section(&config, "greeter"), Some(&tree("{greeting: hi}")));
        assert_eq!(section(&config, "flat"), None);
        assert_eq!(section(&config, "missing"), None);
    }
}
