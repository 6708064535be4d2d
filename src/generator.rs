//! Fills a random sentence template from a catalog's word bank.

use crate::catalog::Catalog;
use rand::seq::SliceRandom;
use rand::Rng;

/// Names of the `{placeholder}` slots in a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

/// Picks one template uniformly, then one word per placeholder uniformly.
///
/// Panics if a template references a placeholder missing from the word bank;
/// catalogs are static and checked by tests, so that is a programming error.
pub fn generate<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> String {
    let template = catalog
        .templates
        .choose(rng)
        .unwrap_or_else(|| panic!("catalog '{}' has no templates", catalog.language));

    let mut sentence = template.to_string();
    for name in placeholders(template) {
        let word = catalog
            .words(name)
            .and_then(|words| words.choose(rng))
            .unwrap_or_else(|| {
                panic!(
                    "template {:?} in catalog '{}' references unknown placeholder '{}'",
                    template, catalog.language, name
                )
            });
        sentence = sentence.replacen(&format!("{{{}}}", name), word, 1);
    }
    sentence
}
