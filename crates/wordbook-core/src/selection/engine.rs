use rand::Rng;
use wordbook_types::{BookmarkView, SelectOption, SelectionCondition};

use super::{compile, group_shuffle, merge, validate};
use crate::error::Result;
use crate::store::BookmarkQuery;

/// Entry point for filtered, ordered and merged bookmark selections
pub struct BookmarkSelectionEngine<S> {
    store: S,
}

impl<S: BookmarkQuery> BookmarkSelectionEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn select(
        &self,
        conditions: &[SelectionCondition],
        option: SelectOption,
    ) -> Result<Vec<BookmarkView>> {
        self.select_with_rng(conditions, option, &mut rand::rng())
    }

    /// Run every condition and merge the results.
    ///
    /// All conditions are validated before the store is queried, so an invalid condition
    /// aborts the call without partial results.
    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        conditions: &[SelectionCondition],
        option: SelectOption,
        rng: &mut R,
    ) -> Result<Vec<BookmarkView>> {
        let validated = conditions
            .iter()
            .map(validate)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut lists = Vec::with_capacity(validated.len());
        for (index, condition) in validated.iter().enumerate() {
            let selection = compile(condition);
            let rows = self.store.query_bookmarks(&selection)?;
            tracing::debug!(
                "condition #{index}: {} rows ({} filters, {} order keys)",
                rows.len(),
                selection.filters.len(),
                selection.order.len()
            );

            let condition = condition.condition();
            let rows = if condition.wants_shuffle() {
                group_shuffle(rows, condition.shuffle_group_size, rng)
            } else {
                rows
            };
            lists.push(rows);
        }

        let merged = merge(lists, option.order);
        tracing::debug!("merged {} conditions ({}) into {} rows", conditions.len(), option.order, merged.len());

        Ok(merged)
    }

    /// Most recently added bookmarks first
    pub fn latest(&self, limit: usize) -> Result<Vec<BookmarkView>> {
        let condition = SelectionCondition {
            latest: Some(true),
            limit: Some(limit),
            ..Default::default()
        };
        self.select(&[condition], SelectOption::sequence())
    }
}
