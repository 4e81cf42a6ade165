//! Search and category filtering
//!
//! A prompt is shown when it matches the search term AND the category.
//! An empty search term and an empty category are independent wildcards.

use crate::prompt::Prompt;

/// True when title, text, or any tag contains the lower-cased term
fn matches_text(prompt: &Prompt, term: &str) -> bool {
    term.is_empty()
        || prompt.title.to_lowercase().contains(term)
        || prompt.text.to_lowercase().contains(term)
        || prompt.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Exact, case-sensitive category match; empty selects all
fn matches_category(prompt: &Prompt, category: &str) -> bool {
    category.is_empty() || prompt.category_or_default() == category
}

/// Prompts matching `search_term` and `category`, in input order
pub fn filter(prompts: &[Prompt], search_term: &str, category: &str) -> Vec<Prompt> {
    let term = search_term.to_lowercase();
    prompts
        .iter()
        .filter(|p| matches_text(p, &term) && matches_category(p, category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::DEFAULT_CATEGORY;

    fn prompt(id: &str, title: &str, text: &str, tags: &[&str], category: Option<&str>) -> Prompt {
        Prompt {
            id:         id.into(),
            title:      title.into(),
            tags:       tags.iter().map(|t| t.to_string()).collect(),
            text:       text.into(),
            category:   category.map(String::from),
            created_at: None,
        }
    }

    fn library() -> Vec<Prompt> {
        vec![
            prompt("1", "Daily stand-up", "What did you do?", &["agile"], Some("Work")),
            prompt("2", "Haiku", "Write a HAIKU about rust", &[], Some("Fun")),
            prompt("3", "Review", "Review this diff", &["Code"], None),
        ]
    }

    fn ids(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let all = library();
        assert_eq!(filter(&all, "", ""), all);
    }

    #[test]
    fn test_tag_match_only() {
        let all = library();
        assert_eq!(ids(&filter(&all, "agile", "")), vec!["1"]);
    }

    #[test]
    fn test_case_insensitive_search() {
        let all = library();
        assert_eq!(ids(&filter(&all, "haiku", "")), vec!["2"]);
        assert_eq!(ids(&filter(&all, "DAILY", "")), vec!["1"]);
        assert_eq!(ids(&filter(&all, "code", "")), vec!["3"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let all = library();
        assert_eq!(ids(&filter(&all, "", "Work")), vec!["1"]);
        assert!(filter(&all, "", "work").is_empty());
    }

    #[test]
    fn test_missing_category_matches_default() {
        let all = library();
        assert_eq!(ids(&filter(&all, "", DEFAULT_CATEGORY)), vec!["3"]);
    }

    #[test]
    fn test_both_conditions_required() {
        let all = library();
        assert!(filter(&all, "haiku", "Work").is_empty());
        assert_eq!(ids(&filter(&all, "e", "Fun")), vec!["2"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&library(), "zzz", "").is_empty());
    }
}
