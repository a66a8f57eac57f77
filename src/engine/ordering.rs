//! Display ordering of raw component lists.
//!
//! Ordering is a display convenience applied before grouping. It carries no
//! checked/disabled meaning.

use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

use crate::model::Component;

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

/// Collator for the root locale at tertiary strength (base letters, then
/// accents, then case).
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!("root collator unavailable, ordering names by code point: {err:?}");
            None
        }
    }
}

/// Required first, then pre-selected, then optional components.
fn selection_rank(component: &Component) -> u8 {
    if component.required {
        0
    } else if !component.optional {
        1
    } else {
        2
    }
}

/// Compare two display names in locale-aware order, with the raw strings as
/// tie-break so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// The two-key comparator: selection rank, then display name.
pub fn compare_for_display(a: &Component, b: &Component) -> Ordering {
    selection_rank(a)
        .cmp(&selection_rank(b))
        .then_with(|| compare_names(&a.display_name, &b.display_name))
}

/// Stable in-place sort with [`compare_for_display`].
pub fn sort_for_display(components: &mut [Component]) {
    components.sort_by(compare_for_display);
}
