//! Category backfill for records saved before categories existed

use crate::prompt::{Prompt, DEFAULT_CATEGORY};

/// Give every prompt without a category the default one
///
/// Returns the updated list and whether anything changed, so the caller
/// only persists when needed.
pub fn normalize(prompts: Vec<Prompt>) -> (Vec<Prompt>, bool) {
    let mut changed = false;
    let updated = prompts
        .into_iter()
        .map(|mut p| {
            if p.lacks_category() {
                p.category = Some(DEFAULT_CATEGORY.to_string());
                changed = true;
            }
            p
        })
        .collect();
    (updated, changed)
}
