use serde_json::Value;
use wordbook_types::SelectionCondition;

use crate::error::ConditionError;

/// A condition that passed `validate`. Only validated conditions can be compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCondition(SelectionCondition);

impl ValidatedCondition {
    pub fn condition(&self) -> &SelectionCondition {
        &self.0
    }
}

/// Pairs of flags that cannot both be set, with their current values
fn exclusive_pairs(c: &SelectionCondition) -> [(&'static str, &'static str, bool, bool); 3] {
    [
        (
            "highQuizFrequency",
            "lowQuizFrequency",
            flag(c.high_quiz_frequency),
            flag(c.low_quiz_frequency),
        ),
        (
            "highQuizIncorrect",
            "lowQuizIncorrect",
            flag(c.high_quiz_incorrect),
            flag(c.low_quiz_incorrect),
        ),
        ("oldest", "latest", flag(c.oldest), flag(c.latest)),
    ]
}

pub(crate) fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Reject conditions that ask for both directions on the same axis
pub fn validate(condition: &SelectionCondition) -> Result<ValidatedCondition, ConditionError> {
    for (first, second, a, b) in exclusive_pairs(condition) {
        if a && b {
            return Err(ConditionError::MutuallyExclusive { first, second });
        }
    }

    if condition.shuffle_group_size == Some(0) {
        return Err(ConditionError::InvalidValue {
            field: "shuffleGroupSize",
            reason: "must be at least 1".to_string(),
        });
    }

    for (field, limit) in [
        ("lowIncorrectRateLimit", condition.low_incorrect_rate_limit),
        ("highIncorrectRateLimit", condition.high_incorrect_rate_limit),
    ] {
        if let Some(value) = limit.filter(|v| !v.is_finite()) {
            return Err(ConditionError::InvalidValue {
                field,
                reason: format!("{value} is not a finite number"),
            });
        }
    }

    Ok(ValidatedCondition(condition.clone()))
}

/// Build a condition from loosely-typed JSON, naming the first field with a wrong type
pub fn condition_from_json(value: &Value) -> Result<SelectionCondition, ConditionError> {
    let object = value
        .as_object()
        .ok_or_else(|| ConditionError::NotAnObject(json_type(value)))?;

    let mut condition = SelectionCondition::default();
    for (key, value) in object {
        match key.as_str() {
            "lowQuizFrequency" => condition.low_quiz_frequency = boolean("lowQuizFrequency", value)?,
            "highQuizFrequency" => {
                condition.high_quiz_frequency = boolean("highQuizFrequency", value)?
            }
            "lowQuizIncorrect" => condition.low_quiz_incorrect = boolean("lowQuizIncorrect", value)?,
            "highQuizIncorrect" => {
                condition.high_quiz_incorrect = boolean("highQuizIncorrect", value)?
            }
            "lowIncorrectRateLimit" => {
                condition.low_incorrect_rate_limit = number("lowIncorrectRateLimit", value)?
            }
            "highIncorrectRateLimit" => {
                condition.high_incorrect_rate_limit = number("highIncorrectRateLimit", value)?
            }
            "lowFrequencyLimit" => {
                condition.low_frequency_limit = count("lowFrequencyLimit", value)?
                    .map(|v| to_u32("lowFrequencyLimit", v))
                    .transpose()?
            }
            "highFrequencyLimit" => {
                condition.high_frequency_limit = count("highFrequencyLimit", value)?
                    .map(|v| to_u32("highFrequencyLimit", v))
                    .transpose()?
            }
            "offset" => condition.offset = index("offset", value)?,
            "limit" => condition.limit = index("limit", value)?,
            "shuffle" => condition.shuffle = boolean("shuffle", value)?,
            "shuffleGroupSize" => condition.shuffle_group_size = index("shuffleGroupSize", value)?,
            "oldest" => condition.oldest = boolean("oldest", value)?,
            "latest" => condition.latest = boolean("latest", value)?,
            other => return Err(ConditionError::UnknownField(other.to_string())),
        }
    }

    Ok(condition)
}

/// `condition_from_json` followed by `validate`
pub fn parse_condition(value: &Value) -> Result<ValidatedCondition, ConditionError> {
    validate(&condition_from_json(value)?)
}

/// Parse every condition of a JSON array or a single JSON object
pub fn parse_conditions(value: &Value) -> Result<Vec<SelectionCondition>, ConditionError> {
    match value {
        Value::Array(items) => items.iter().map(condition_from_json).collect(),
        Value::Object(_) => Ok(vec![condition_from_json(value)?]),
        other => Err(ConditionError::NotAnObject(json_type(other))),
    }
}

fn boolean(field: &'static str, value: &Value) -> Result<Option<bool>, ConditionError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        other => Err(invalid(field, "boolean", other)),
    }
}

fn number(field: &'static str, value: &Value) -> Result<Option<f64>, ConditionError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| invalid(field, "number", value)),
        other => Err(invalid(field, "number", other)),
    }
}

fn count(field: &'static str, value: &Value) -> Result<Option<u64>, ConditionError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| invalid(field, "non-negative integer", value)),
        other => Err(invalid(field, "non-negative integer", other)),
    }
}

fn index(field: &'static str, value: &Value) -> Result<Option<usize>, ConditionError> {
    count(field, value)?
        .map(|v| {
            usize::try_from(v).map_err(|_| ConditionError::InvalidValue {
                field,
                reason: format!("{v} is out of range"),
            })
        })
        .transpose()
}

fn to_u32(field: &'static str, value: u64) -> Result<u32, ConditionError> {
    u32::try_from(value).map_err(|_| ConditionError::InvalidValue {
        field,
        reason: format!("{value} is out of range"),
    })
}

fn invalid(field: &'static str, expected: &'static str, value: &Value) -> ConditionError {
    ConditionError::InvalidField {
        field,
        expected,
        found: json_type(value),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "fractional number",
        Value::Number(n) if n.is_i64() && n.as_i64().is_some_and(|v| v < 0) => "negative number",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn condition(value: Value) -> SelectionCondition {
        condition_from_json(&value).unwrap()
    }

    #[test]
    fn single_direction_is_accepted() {
        assert!(validate(&condition(json!({"highQuizIncorrect": true}))).is_ok());
        assert!(validate(&condition(json!({"lowQuizFrequency": true, "latest": true}))).is_ok());
        assert!(validate(&SelectionCondition::default()).is_ok());
    }

    #[test]
    fn opposite_directions_are_rejected() {
        let cases = [
            (json!({"highQuizIncorrect": true, "lowQuizIncorrect": true}), "highQuizIncorrect"),
            (json!({"highQuizFrequency": true, "lowQuizFrequency": true}), "highQuizFrequency"),
            (json!({"oldest": true, "latest": true}), "oldest"),
        ];

        for (value, expected_first) in cases {
            match validate(&condition(value)) {
                Err(ConditionError::MutuallyExclusive { first, .. }) => {
                    assert_eq!(first, expected_first)
                }
                other => panic!("expected mutual exclusion error, got {other:?}"),
            }
        }
    }

    #[test]
    fn false_flags_do_not_conflict() {
        let c = condition(json!({"oldest": true, "latest": false}));
        assert!(validate(&c).is_ok());
    }

    #[test]
    fn wrong_type_names_the_field() {
        let err = condition_from_json(&json!({"limit": "ten"})).unwrap_err();
        assert_eq!(
            err,
            ConditionError::InvalidField {
                field: "limit",
                expected: "non-negative integer",
                found: "string",
            }
        );

        let err = condition_from_json(&json!({"shuffle": 1})).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidField { field: "shuffle", .. }));

        let err = condition_from_json(&json!({"offset": -1})).unwrap_err();
        assert!(matches!(
            err,
            ConditionError::InvalidField { field: "offset", found: "negative number", .. }
        ));
    }

    #[test]
    fn nulls_are_absent() {
        let c = condition(json!({"limit": null, "oldest": null, "lowIncorrectRateLimit": 12.5}));
        assert_eq!(c.limit, None);
        assert_eq!(c.oldest, None);
        assert_eq!(c.low_incorrect_rate_limit, Some(12.5));
    }

    #[test]
    fn unknown_fields_and_non_objects_fail() {
        assert_eq!(
            condition_from_json(&json!({"newest": true})).unwrap_err(),
            ConditionError::UnknownField("newest".to_string())
        );
        assert_eq!(
            condition_from_json(&json!([1, 2])).unwrap_err(),
            ConditionError::NotAnObject("array")
        );
    }

    #[test]
    fn zero_group_size_is_rejected() {
        let err = parse_condition(&json!({"shuffle": true, "shuffleGroupSize": 0})).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidValue { field: "shuffleGroupSize", .. }));
    }

    #[test]
    fn parses_arrays_of_conditions() {
        let conditions =
            parse_conditions(&json!([{"latest": true, "limit": 3}, {"oldest": true}])).unwrap();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].limit, Some(3));
        assert_eq!(conditions[1].oldest, Some(true));
    }
}
