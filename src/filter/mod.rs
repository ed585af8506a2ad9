use crate::catalog::GameEntry;

/// The subset of the catalog matching a query, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    entries: Vec<&'a GameEntry>,
}

impl<'a> FilteredView<'a> {
    pub fn entries(&self) -> &[&'a GameEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a GameEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing matched, i.e. the "no results" state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-insensitive substring match on title or description.
pub fn matches(entry: &GameEntry, query: &str) -> bool {
    matches_lowercase(entry, &query.to_lowercase())
}

fn matches_lowercase(entry: &GameEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}

pub fn filter<'a>(entries: &'a [GameEntry], query: &str) -> FilteredView<'a> {
    let needle = query.to_lowercase();

    FilteredView {
        entries: entries
            .iter()
            .filter(|entry| matches_lowercase(entry, &needle))
            .collect(),
    }
}
