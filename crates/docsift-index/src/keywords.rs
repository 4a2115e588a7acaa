//! Fixed-vocabulary keyword extraction.
//!
//! Each pattern targets one cluster of testing and UI terms. Patterns are case-insensitive
//! and anchored on word boundaries. Longer alternatives that share a prefix come first so
//! the longest spelling wins.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// Vocabulary patterns, one per term cluster.
const VOCABULARY: &[&str] = &[
    // Mocking
    r"(?i)\b(?:mocking|mocked|mocks|mock|vi\.fn|vi\.mock|vi\.spyOn|spyOn|jest\.fn|stubbed|stubs|stub|spies|spy)\b",
    // Tests and assertions
    r"(?i)\b(?:testing|tests|test|describe|it|expect|assertions|assertion|assert|toBeTruthy|toBeFalsy|toBeDefined|toBeNull|toBeVisible|toBe|toStrictEqual|toEqual|toHaveBeenCalledWith|toHaveBeenCalledTimes|toHaveBeenCalled|toHaveText|toContain|toMatchSnapshot|toMatch|toThrow|beforeEach|afterEach|beforeAll|afterAll)\b",
    // Components and rendering
    r"(?i)\b(?:components|component|rendering|rendered|renders|render|locators|locator|screen|fixtures|fixture|snapshot|mount)\b",
    // Interactions
    r"(?i)\b(?:dblclick|clicked|clicks|click|fill|press|type|hover|focus|blur|select|uncheck|check|drag|drop|scroll|tap|keyboard|mouse)\b",
    // Frameworks
    r"(?i)\b(?:vitest|playwright|qwikcity|qwik|jest|cypress|testing-library|vite|typescript)\b",
    // Browser, SSR and API
    r"(?i)\b(?:browser|ssr|server|client|api|endpoint|fetch|request|response|routes|route|loader|action|dom|page)\b",
    // Accessibility
    r"(?i)\b(?:a11y|accessibility|accessible|aria-[a-z]+|role|getByRole|getByLabelText|getByLabel|getByText|label)\b",
    // UI elements
    r"(?i)\b(?:button|input|form|modal|dialog|dropdown|menu|link|checkbox|tabs|tab|tooltip|card|table|list)\b",
    // Reactive state
    r"(?i)\b(?:useSignal|useStore|useTask|useVisibleTask|useComputed|signals|signal|store|state|reactive|effect|context)\b",
];

/// Compiled vocabulary.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    VOCABULARY
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Returns every vocabulary term found in `content`, lowercased, in order of first match.
///
/// Patterns are applied one after another, so terms from earlier clusters come first.
pub fn extract_keywords(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for pattern in PATTERNS.iter() {
        for found in pattern.find_iter(content) {
            let term = found.as_str().to_lowercase();
            if seen.insert(term.clone()) {
                keywords.push(term);
            }
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(PATTERNS.len(), VOCABULARY.len());
    }

    #[test]
    fn test_mock_terms() {
        let keywords = extract_keywords("const fn = vi.fn(); Mock it with vi.mock and spyOn.");
        assert!(keywords.contains(&"vi.fn".to_string()));
        assert!(keywords.contains(&"mock".to_string()));
        assert!(keywords.contains(&"vi.mock".to_string()));
        assert!(keywords.contains(&"spyon".to_string()));
        assert!(keywords.contains(&"it".to_string()));
    }

    #[test]
    fn test_lowercase_and_deduplicated() {
        let keywords = extract_keywords("TEST test Test expect EXPECT");
        assert_eq!(keywords, vec!["test", "expect"]);
    }

    #[test]
    fn test_longest_alternative_wins() {
        let keywords = extract_keywords("expect(x).toBeTruthy(); mocking is fun");
        assert!(keywords.contains(&"tobetruthy".to_string()));
        assert!(!keywords.contains(&"tobe".to_string()));
        assert!(keywords.contains(&"mocking".to_string()));
        assert!(!keywords.contains(&"mock".to_string()));
    }

    #[test]
    fn test_word_boundaries() {
        let keywords = extract_keywords("contest latest mockery");
        assert!(keywords.is_empty(), "unexpected keywords: {keywords:?}");
    }

    #[test]
    fn test_interaction_and_ui_terms() {
        let keywords =
            extract_keywords("await page.click(button); await input.fill('x'); hover the menu");
        for term in ["click", "fill", "hover", "page", "button", "input", "menu"] {
            assert!(keywords.contains(&term.to_string()), "missing {term}");
        }
    }

    #[test]
    fn test_aria_attributes() {
        let keywords = extract_keywords("<div aria-label=\"Close\" role=\"dialog\">");
        assert!(keywords.contains(&"aria-label".to_string()));
        assert!(keywords.contains(&"role".to_string()));
        assert!(keywords.contains(&"dialog".to_string()));
    }

    #[test]
    fn test_empty_content() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let content = "describe('Counter', () => { it('renders', () => { render(<Counter />) }) })";
        assert_eq!(extract_keywords(content), extract_keywords(content));
    }
}
