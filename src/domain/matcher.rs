use super::models::{Command, Registry};

#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Substring match against the label or the joined keyword string.
/// `needle` must already be normalized.
#[must_use]
pub fn matches(command: &Command, needle: &str) -> bool {
    command.label.to_lowercase().contains(needle) || command.keyword_text().contains(needle)
}

/// Indices into the registry of every command matching `query`, in registry order.
#[must_use]
pub fn filter(registry: &Registry, query: &str) -> Vec<usize> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return (0..registry.len()).collect();
    }

    registry
        .commands()
        .iter()
        .enumerate()
        .filter(|(_, cmd)| matches(cmd, &needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry() -> Registry {
        Registry::new(vec![
            Command::navigation("home", "Go Home", &["index", "landing"], "/"),
            Command::navigation("pricing", "View Pricing", &["cost", "plans"], "/pages/pricing.html"),
            Command::action("theme", "Toggle Theme", &["dark", "light", "mode"], "toggleTheme"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter(&registry(), ""), vec![0, 1, 2]);
        assert_eq!(filter(&registry(), "   "), vec![0, 1, 2]);
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        assert_eq!(filter(&registry(), "  PRICING "), vec![1]);
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(filter(&registry(), "cost"), vec![1]);
    }

    #[test]
    fn test_match_spans_joined_keywords() {
        // "dark light" only exists in the joined keyword string
        assert_eq!(filter(&registry(), "k lig"), vec![2]);
    }

    #[test]
    fn test_label_or_keyword_keeps_registry_order() {
        let registry = Registry::new(vec![
            Command::navigation("docs", "Documentation", &["manual"], "/docs"),
            Command::navigation("home", "Home", &["main", "docs"], "/"),
        ])
        .unwrap();
        // Label hit on the first, keyword hit on the second
        assert_eq!(filter(&registry, "doc"), vec![0, 1]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&registry(), "zzz").is_empty());
    }

    // Mixed-case labels, keyword lists with multi-word and uppercase entries
    fn arb_registry() -> impl Strategy<Value = Registry> {
        let command = (
            "[A-Za-z][A-Za-z ]{0,11}",
            proptest::collection::vec("[A-Za-z]{1,5}( [A-Za-z]{1,5})?", 0..4),
        );
        proptest::collection::vec(command, 0..8).prop_map(|entries| {
            let commands = entries
                .into_iter()
                .enumerate()
                .map(|(i, (label, keywords))| {
                    let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
                    Command::navigation(format!("cmd-{i}"), label, &keywords, "/")
                })
                .collect();
            Registry::new(commands).unwrap()
        })
    }

    proptest! {
        #[test]
        fn filter_agrees_with_substring_rule(
            registry in arb_registry(),
            query in "[ ]{0,2}[A-Za-z ]{0,5}[ ]{0,2}",
        ) {
            let result = filter(&registry, &query);
            let needle = query.trim().to_lowercase();

            for (i, cmd) in registry.commands().iter().enumerate() {
                let expected = needle.is_empty()
                    || cmd.label.to_lowercase().contains(&needle)
                    || cmd.keywords().join(" ").contains(&needle);
                prop_assert_eq!(result.contains(&i), expected, "command {}", cmd.id);
            }
            prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn empty_query_is_whole_registry(registry in arb_registry(), blanks in "[ ]{0,3}") {
            let all: Vec<usize> = (0..registry.len()).collect();
            prop_assert_eq!(filter(&registry, ""), all.clone());
            prop_assert_eq!(filter(&registry, &blanks), all);
        }

        #[test]
        fn query_case_does_not_matter(registry in arb_registry(), query in "[a-z ]{1,5}") {
            prop_assert_eq!(
                filter(&registry, &query.to_uppercase()),
                filter(&registry, &query)
            );
        }
    }
}
