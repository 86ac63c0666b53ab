//! Splitting of raw trailing arguments into positional and keyword values.

use std::collections::{BTreeMap, btree_map::Entry};

/// Keyword arguments keyed by normalized flag name.
pub type KeywordArgs = BTreeMap<String, FlagValue>;

/// Value of one keyword argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Flag given without a value (`--force`).
    Switch,
    /// Flag given a single value (`--env=prod`).
    Text(String),
    /// Flag repeated on the command line, values in occurrence order.
    ///
    /// Elements are only ever `Switch` or `Text`.
    Many(Vec<FlagValue>),
}

impl FlagValue {
    /// Fold a repeated occurrence into this value, promoting to `Many`.
    fn append(&mut self, value: Self) {
        match self {
            Self::Many(values) => values.push(value),
            _ => {
                let first = std::mem::replace(self, Self::Many(Vec::new()));
                if let Self::Many(values) = self {
                    values.push(first);
                    values.push(value);
                }
            }
        }
    }
}

/// Positional and keyword arguments for one task invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgBundle {
    /// Positional arguments in input order.
    pub positional: Vec<String>,
    /// Keyword arguments from `--flag` and `--flag=value` tokens.
    pub keyword: KeywordArgs,
}

/// Split the tokens following the task name into an argument bundle.
///
/// Total on any input: unknown shapes land in `positional`, long flags land
/// in `keyword` with dashes in the key normalized to underscores. A repeated
/// flag accumulates its values in first-to-last order.
pub fn split_args(tokens: &[String]) -> ArgBundle {
    let mut bundle = ArgBundle::default();

    for token in tokens {
        let Some(flag) = token.strip_prefix("--") else {
            bundle.positional.push(token.clone());
            continue;
        };

        let (key, value) = match flag.split_once('=') {
            Some((key, value)) => (key, FlagValue::Text(value.to_string())),
            None => (flag, FlagValue::Switch),
        };
        let key = key.replace('-', "_");

        match bundle.keyword.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().append(value),
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::{FlagValue, split_args};

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn separates_positional_from_flags() {
        let bundle = split_args(&tokens(&["a", "--x=1"]));
        assert_eq!(bundle.positional, vec!["a"]);
        assert_eq!(
            bundle.keyword.get("x"),
            Some(&FlagValue::Text("1".to_string()))
        );
    }

    #[test]
    fn bare_flag_is_a_switch() {
        let bundle = split_args(&tokens(&["--dry-run"]));
        assert!(bundle.positional.is_empty());
        assert_eq!(bundle.keyword.get("dry_run"), Some(&FlagValue::Switch));
    }

    #[test]
    fn repeated_flag_accumulates_in_order() {
        let bundle = split_args(&tokens(&["--x=1", "--x=2", "--x=3"]));
        assert!(bundle.positional.is_empty());
        assert_eq!(
            bundle.keyword.get("x"),
            Some(&FlagValue::Many(vec![
                FlagValue::Text("1".to_string()),
                FlagValue::Text("2".to_string()),
                FlagValue::Text("3".to_string()),
            ]))
        );
    }

    #[test]
    fn switch_promotes_into_sequence() {
        let bundle = split_args(&tokens(&["--x", "--x=2"]));
        assert_eq!(
            bundle.keyword.get("x"),
            Some(&FlagValue::Many(vec![
                FlagValue::Switch,
                FlagValue::Text("2".to_string()),
            ]))
        );
    }

    #[test]
    fn preserves_positional_order() {
        let bundle = split_args(&tokens(&["one", "--v=x", "two", "three"]));
        assert_eq!(bundle.positional, vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_value_stays_text() {
        let bundle = split_args(&tokens(&["--x="]));
        assert_eq!(bundle.keyword.get("x"), Some(&FlagValue::Text(String::new())));
    }

    #[test]
    fn never_fails_on_odd_input() {
        let bundle = split_args(&tokens(&["--", "-x", "--=v", "--a-b-c"]));
        assert_eq!(bundle.positional, vec!["-x"]);
        assert_eq!(bundle.keyword.get("a_b_c"), Some(&FlagValue::Switch));
    }
}
