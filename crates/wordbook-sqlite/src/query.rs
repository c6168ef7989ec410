use rusqlite::types::Value;
use wordbook_core::selection::{CompiledSelection, Filter};

pub(crate) const BOOKMARK_COLUMNS: &str =
    "id, word, meanings, addedDate, quizTotal, quizCorrect, quizIncorrect, quizIncorrectRate";

/// SQL text plus positional parameters
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SelectQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

fn filter_value(filter: &Filter) -> Value {
    match *filter {
        Filter::MinIncorrectRate(limit) | Filter::MaxIncorrectRate(limit) => Value::Real(limit),
        Filter::MinTotal(limit) | Filter::MaxTotal(limit) => Value::Integer(i64::from(limit)),
    }
}

fn count_value(count: usize) -> Value {
    Value::Integer(i64::try_from(count).unwrap_or(i64::MAX))
}

/// Render a compiled selection against `view_Bookmark`.
///
/// SQLite has no OFFSET without LIMIT, so an offset alone uses `LIMIT -1`.
pub(crate) fn select_bookmarks(selection: &CompiledSelection) -> SelectQuery {
    let mut sql = format!("SELECT {BOOKMARK_COLUMNS} FROM view_Bookmark");
    let mut params = Vec::new();

    if !selection.filters.is_empty() {
        let clauses: Vec<String> = selection
            .filters
            .iter()
            .map(|filter| {
                params.push(filter_value(filter));
                format!("{} {} ?{}", filter.field().column(), filter.operator(), params.len())
            })
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if !selection.order.is_empty() {
        let keys: Vec<String> = selection
            .order
            .iter()
            .map(|key| format!("{} {}", key.field.column(), key.direction.as_sql()))
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&keys.join(", "));
    }

    match (selection.limit, selection.offset) {
        (None, None) => {}
        (limit, offset) => {
            params.push(limit.map(count_value).unwrap_or(Value::Integer(-1)));
            sql.push_str(&format!(" LIMIT ?{}", params.len()));
            if let Some(offset) = offset {
                params.push(count_value(offset));
                sql.push_str(&format!(" OFFSET ?{}", params.len()));
            }
        }
    }

    SelectQuery { sql, params }
}

#[cfg(test)]
mod tests {
    use wordbook_core::selection::{compile, validate};
    use wordbook_types::SelectionCondition;

    use super::*;

    fn render(condition: SelectionCondition) -> SelectQuery {
        select_bookmarks(&compile(&validate(&condition).unwrap()))
    }

    #[test]
    fn empty_condition_orders_by_newest_id() {
        let query = render(SelectionCondition::default());
        assert_eq!(
            query.sql,
            format!("SELECT {BOOKMARK_COLUMNS} FROM view_Bookmark ORDER BY id DESC")
        );
        assert!(query.params.is_empty());
    }

    #[test]
    fn filters_are_bound_not_inlined() {
        let query = render(SelectionCondition {
            low_incorrect_rate_limit: Some(25.0),
            high_frequency_limit: Some(10),
            ..Default::default()
        });
        assert!(query.sql.contains("WHERE quizIncorrectRate >= ?1 AND quizTotal <= ?2"));
        assert_eq!(query.params, vec![Value::Real(25.0), Value::Integer(10)]);
    }

    #[test]
    fn order_keys_are_comma_separated() {
        let query = render(SelectionCondition {
            high_quiz_incorrect: Some(true),
            low_quiz_frequency: Some(true),
            oldest: Some(true),
            ..Default::default()
        });
        assert!(query.sql.ends_with(
            "ORDER BY quizIncorrectRate DESC, quizTotal ASC, quizIncorrect DESC, addedDate ASC, id ASC"
        ));
    }

    #[test]
    fn offset_without_limit_is_unbounded() {
        let query = render(SelectionCondition {
            offset: Some(3),
            ..Default::default()
        });
        assert!(query.sql.ends_with("LIMIT ?1 OFFSET ?2"));
        assert_eq!(query.params, vec![Value::Integer(-1), Value::Integer(3)]);
    }

    #[test]
    fn limit_follows_filter_params() {
        let query = render(SelectionCondition {
            high_frequency_limit: Some(0),
            limit: Some(5),
            ..Default::default()
        });
        assert!(query.sql.ends_with("LIMIT ?2"));
        assert_eq!(query.params, vec![Value::Integer(0), Value::Integer(5)]);
    }
}
