use std::collections::HashSet;

use wordbook_types::{BookmarkView, MergeOrder};

/// Key used to drop duplicates when merging result lists
pub trait MergeKey {
    fn merge_key(&self) -> &str;
}

impl MergeKey for BookmarkView {
    fn merge_key(&self) -> &str {
        &self.word
    }
}

impl MergeKey for &str {
    fn merge_key(&self) -> &str {
        self
    }
}

/// Output list that keeps only the first item seen for each key
struct Deduplicated<T> {
    seen: HashSet<String>,
    items: Vec<T>,
}

impl<T: MergeKey> Deduplicated<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, item: T) {
        if self.seen.insert(item.merge_key().to_owned()) {
            self.items.push(item);
        }
    }
}

/// Combine per-condition result lists into one list without duplicate keys.
///
/// A single list is returned untouched.
pub fn merge<T: MergeKey>(lists: Vec<Vec<T>>, order: MergeOrder) -> Vec<T> {
    if lists.len() <= 1 {
        return lists.into_iter().next().unwrap_or_default();
    }

    match order {
        MergeOrder::Sequence => sequence(lists),
        MergeOrder::Interleave => interleave(lists),
    }
}

fn sequence<T: MergeKey>(lists: Vec<Vec<T>>) -> Vec<T> {
    let capacity = lists.iter().map(Vec::len).sum();
    let mut out = Deduplicated::with_capacity(capacity);

    for item in lists.into_iter().flatten() {
        out.push(item);
    }

    out.items
}

/// Round-robin by position; a list drops out once it runs out of items
fn interleave<T: MergeKey>(lists: Vec<Vec<T>>) -> Vec<T> {
    let capacity = lists.iter().map(Vec::len).sum();
    let mut out = Deduplicated::with_capacity(capacity);

    let mut active: Vec<_> = lists.into_iter().map(Vec::into_iter).collect();
    while !active.is_empty() {
        active.retain_mut(|list| match list.next() {
            Some(item) => {
                out.push(item);
                true
            }
            None => false,
        });
    }

    out.items
}
