use std::cmp::Ordering;

use wordbook_types::BookmarkView;

use super::condition::{ValidatedCondition, flag};

/// Columns of the bookmark view a selection can filter or order on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkField {
    Id,
    AddedDate,
    QuizTotal,
    QuizIncorrect,
    QuizIncorrectRate,
}

impl BookmarkField {
    /// Column name in `view_Bookmark`
    pub fn column(&self) -> &'static str {
        match self {
            BookmarkField::Id => "id",
            BookmarkField::AddedDate => "addedDate",
            BookmarkField::QuizTotal => "quizTotal",
            BookmarkField::QuizIncorrect => "quizIncorrect",
            BookmarkField::QuizIncorrectRate => "quizIncorrectRate",
        }
    }

    fn compare(&self, a: &BookmarkView, b: &BookmarkView) -> Ordering {
        match self {
            BookmarkField::Id => a.id.cmp(&b.id),
            BookmarkField::AddedDate => a.added_date.cmp(&b.added_date),
            BookmarkField::QuizTotal => a.quiz_total.cmp(&b.quiz_total),
            BookmarkField::QuizIncorrect => a.quiz_incorrect.cmp(&b.quiz_incorrect),
            BookmarkField::QuizIncorrectRate => a.quiz_incorrect_rate.total_cmp(&b.quiz_incorrect_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        }
    }

    fn from_flags(high: Option<bool>, low: Option<bool>) -> Option<Self> {
        if flag(high) {
            Some(Direction::Descending)
        } else if flag(low) {
            Some(Direction::Ascending)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderKey {
    pub field: BookmarkField,
    pub direction: Direction,
}

impl OrderKey {
    fn new(field: BookmarkField, direction: Direction) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &BookmarkView, b: &BookmarkView) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Inclusive bound on one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    MinIncorrectRate(f64),
    MaxIncorrectRate(f64),
    MinTotal(u32),
    MaxTotal(u32),
}

impl Filter {
    pub fn field(&self) -> BookmarkField {
        match self {
            Filter::MinIncorrectRate(_) | Filter::MaxIncorrectRate(_) => {
                BookmarkField::QuizIncorrectRate
            }
            Filter::MinTotal(_) | Filter::MaxTotal(_) => BookmarkField::QuizTotal,
        }
    }

    /// SQL comparison operator with the column on the left
    pub fn operator(&self) -> &'static str {
        match self {
            Filter::MinIncorrectRate(_) | Filter::MinTotal(_) => ">=",
            Filter::MaxIncorrectRate(_) | Filter::MaxTotal(_) => "<=",
        }
    }

    pub fn matches(&self, view: &BookmarkView) -> bool {
        match *self {
            Filter::MinIncorrectRate(limit) => view.quiz_incorrect_rate >= limit,
            Filter::MaxIncorrectRate(limit) => view.quiz_incorrect_rate <= limit,
            Filter::MinTotal(limit) => view.quiz_total >= limit,
            Filter::MaxTotal(limit) => view.quiz_total <= limit,
        }
    }
}

/// Filter, ordering and pagination compiled from one condition
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSelection {
    pub filters: Vec<Filter>,
    pub order: Vec<OrderKey>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl CompiledSelection {
    /// True if the view satisfies every filter
    pub fn matches(&self, view: &BookmarkView) -> bool {
        self.filters.iter().all(|filter| filter.matches(view))
    }

    /// Compare by the order keys, earlier keys dominate
    pub fn compare(&self, a: &BookmarkView, b: &BookmarkView) -> Ordering {
        self.order
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Evaluate the selection in memory over every stored bookmark
    pub fn apply(&self, rows: impl IntoIterator<Item = BookmarkView>) -> Vec<BookmarkView> {
        let mut rows: Vec<BookmarkView> = rows.into_iter().filter(|v| self.matches(v)).collect();
        rows.sort_by(|a, b| self.compare(a, b));

        rows.into_iter()
            .skip(self.offset.unwrap_or(0))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Compile a validated condition into filters and order keys.
///
/// Order precedence: incorrect rate, total, incorrect count, then recency. Without `oldest`
/// or `latest` the most recently inserted bookmark comes first.
pub fn compile(validated: &ValidatedCondition) -> CompiledSelection {
    let condition = validated.condition();

    let mut filters = Vec::new();
    if let Some(limit) = condition.low_incorrect_rate_limit {
        filters.push(Filter::MinIncorrectRate(limit));
    }
    if let Some(limit) = condition.high_incorrect_rate_limit {
        filters.push(Filter::MaxIncorrectRate(limit));
    }
    if let Some(limit) = condition.low_frequency_limit {
        filters.push(Filter::MinTotal(limit));
    }
    if let Some(limit) = condition.high_frequency_limit {
        filters.push(Filter::MaxTotal(limit));
    }

    let incorrect = Direction::from_flags(condition.high_quiz_incorrect, condition.low_quiz_incorrect);
    let total = Direction::from_flags(condition.high_quiz_frequency, condition.low_quiz_frequency);

    let mut order = Vec::new();
    if let Some(direction) = incorrect {
        order.push(OrderKey::new(BookmarkField::QuizIncorrectRate, direction));
    }
    if let Some(direction) = total {
        order.push(OrderKey::new(BookmarkField::QuizTotal, direction));
    }
    if let Some(direction) = incorrect {
        order.push(OrderKey::new(BookmarkField::QuizIncorrect, direction));
    }

    if flag(condition.oldest) {
        order.push(OrderKey::new(BookmarkField::AddedDate, Direction::Ascending));
        order.push(OrderKey::new(BookmarkField::Id, Direction::Ascending));
    } else if flag(condition.latest) {
        order.push(OrderKey::new(BookmarkField::AddedDate, Direction::Descending));
        order.push(OrderKey::new(BookmarkField::Id, Direction::Descending));
    } else {
        order.push(OrderKey::new(BookmarkField::Id, Direction::Descending));
    }

    CompiledSelection {
        filters,
        order,
        offset: condition.offset,
        limit: condition.limit,
    }
}

#[cfg(test)]
mod tests {
    use wordbook_types::{Bookmark, QuizScore, SelectionCondition};

    use super::*;
    use crate::selection::validate;

    fn view(id: i64, word: &str, added_date: i64, correct: u32, incorrect: u32) -> BookmarkView {
        let score = QuizScore {
            word: word.to_string(),
            total: correct + incorrect,
            correct,
            incorrect,
        };
        let bookmark = Bookmark {
            id,
            word: word.to_string(),
            added_date,
        };
        BookmarkView::new(bookmark, vec![], &score)
    }

    fn compiled(condition: SelectionCondition) -> CompiledSelection {
        compile(&validate(&condition).unwrap())
    }

    fn words(rows: &[BookmarkView]) -> Vec<&str> {
        rows.iter().map(|v| v.word.as_str()).collect()
    }

    #[test]
    fn default_order_is_newest_id_first() {
        let selection = compiled(SelectionCondition::default());
        assert!(selection.filters.is_empty());
        assert_eq!(
            selection.order,
            vec![OrderKey::new(BookmarkField::Id, Direction::Descending)]
        );

        let rows = selection.apply(vec![view(1, "a", 0, 0, 0), view(2, "b", 0, 0, 0)]);
        assert_eq!(words(&rows), ["b", "a"]);
    }

    #[test]
    fn order_keys_follow_precedence() {
        let selection = compiled(SelectionCondition {
            high_quiz_incorrect: Some(true),
            low_quiz_frequency: Some(true),
            oldest: Some(true),
            ..Default::default()
        });

        let fields: Vec<_> = selection.order.iter().map(|k| (k.field, k.direction)).collect();
        assert_eq!(
            fields,
            vec![
                (BookmarkField::QuizIncorrectRate, Direction::Descending),
                (BookmarkField::QuizTotal, Direction::Ascending),
                (BookmarkField::QuizIncorrect, Direction::Descending),
                (BookmarkField::AddedDate, Direction::Ascending),
                (BookmarkField::Id, Direction::Ascending),
            ]
        );
    }

    #[test]
    fn incorrect_rate_ties_break_on_incorrect_count() {
        let selection = compiled(SelectionCondition {
            high_quiz_incorrect: Some(true),
            ..Default::default()
        });
        let rows = selection.apply(vec![
            view(1, "apple", 0, 0, 1),
            view(2, "banana", 0, 0, 2),
            view(3, "cherry", 0, 0, 0),
        ]);
        assert_eq!(words(&rows), ["banana", "apple", "cherry"]);
    }

    #[test]
    fn filters_are_inclusive_and_conjunctive() {
        let selection = compiled(SelectionCondition {
            low_incorrect_rate_limit: Some(25.0),
            high_incorrect_rate_limit: Some(50.0),
            low_frequency_limit: Some(2),
            high_frequency_limit: Some(4),
            ..Default::default()
        });
        assert_eq!(selection.filters.len(), 4);

        let rows = selection.apply(vec![
            view(1, "quarter", 0, 3, 1),
            view(2, "half", 0, 1, 1),
            view(3, "rare", 0, 0, 1),
            view(4, "often", 0, 5, 5),
            view(5, "solid", 0, 4, 0),
        ]);
        assert_eq!(words(&rows), ["half", "quarter"]);
    }

    #[test]
    fn zero_limits_still_apply() {
        let selection = compiled(SelectionCondition {
            high_frequency_limit: Some(0),
            ..Default::default()
        });
        let rows = selection.apply(vec![view(1, "new", 0, 0, 0), view(2, "seen", 0, 1, 0)]);
        assert_eq!(words(&rows), ["new"]);
    }

    #[test]
    fn latest_and_oldest_use_added_date_then_id() {
        let rows = || {
            vec![
                view(1, "first", 200, 0, 0),
                view(2, "second", 100, 0, 0),
                view(3, "third", 200, 0, 0),
            ]
        };

        let latest = compiled(SelectionCondition {
            latest: Some(true),
            ..Default::default()
        });
        assert_eq!(words(&latest.apply(rows())), ["third", "first", "second"]);

        let oldest = compiled(SelectionCondition {
            oldest: Some(true),
            ..Default::default()
        });
        assert_eq!(words(&oldest.apply(rows())), ["second", "first", "third"]);
    }

    #[test]
    fn pagination_applies_after_ordering() {
        let selection = compiled(SelectionCondition {
            oldest: Some(true),
            offset: Some(1),
            limit: Some(2),
            ..Default::default()
        });
        let rows = selection.apply((1..=5).map(|i| view(i, &format!("w{i}"), i, 0, 0)));
        assert_eq!(words(&rows), ["w2", "w3"]);
    }
}
