//! Partition check items by component category.

use std::collections::HashMap;

use super::check::{CheckGroup, CheckItem};

/// Group items by [`category_or_default`](crate::model::Component::category_or_default).
///
/// Every item lands in exactly one group. Groups appear in first-seen order and
/// items keep their relative input order inside a group.
pub fn group_by_category(items: Vec<CheckItem>) -> Vec<CheckGroup> {
    let mut groups: Vec<CheckGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = item.value.category_or_default().to_string();
        let slot = *index.entry(label.clone()).or_insert_with(|| {
            groups.push(CheckGroup::new(label));
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups
}
