//! Configuration templates for `docsift init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_out(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_out(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_out(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn templates_parse_as_valid_config() {
        for template in [LOCAL_TEMPLATE, GLOBAL_TEMPLATE] {
            let result = parse_config(template);
            assert!(result.is_ok(), "template failed to parse: {result:?}");
        }
    }

    #[test]
    fn local_template_declares_topics_and_groups() {
        let config = parse_config(LOCAL_TEMPLATE).unwrap();
        assert_eq!(config.topic.map(|t| t.len()), Some(2));
        assert_eq!(config.examples.map(|g| g.len()), Some(2));
    }

    #[test]
    fn commented_template_has_no_active_settings() {
        let config = parse_config(&local_template()).unwrap();
        assert!(config.root.is_none());
        assert!(config.topic.is_none());
        assert!(config.examples.is_none());
    }

    #[test]
    fn comment_out_keeps_comments_and_blank_lines() {
        let input = "# note\nkey = \"a\"\n\n[section]\n";
        assert_eq!(comment_out(input), "# note\n# key = \"a\"\n\n# [section]\n");
    }
}
