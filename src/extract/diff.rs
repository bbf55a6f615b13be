//! Cross-revision diffing of occurrence indexes.

use tracing::debug;

use super::occurrence::{OccurrenceIndex, Tag};

/// Marks the (id, zone) pairs of `current` that `previous` lacks.
///
/// Each such pair gains a [`Tag::Added`] next to its original tag. Without a
/// previous index, `current` is returned as is.
pub fn mark_added(current: OccurrenceIndex, previous: Option<&OccurrenceIndex>) -> OccurrenceIndex {
    let Some(previous) = previous else {
        return current;
    };

    let additions: Vec<_> = current
        .iter()
        .flat_map(|(id, tags)| {
            tags.iter().filter_map(move |tag| match tag {
                Tag::Zone(zone) if !previous.occurs_in(id, zone) => {
                    Some((id.clone(), zone.clone()))
                }
                _ => None,
            })
        })
        .collect();

    debug!(added = additions.len(), "Diffed against previous patch set");

    let mut diffed = current;
    for (id, zone) in additions {
        diffed.insert_added(&id, zone);
    }
    diffed
}
