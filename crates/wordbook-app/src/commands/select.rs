use anyhow::Context;
use clap::Args;
use serde_json::Value;
use wordbook_core::selection::parse_conditions;
use wordbook_types::{MergeOrder, SelectOption, SelectionCondition};

use super::{print_json, rng};
use crate::state::AppState;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Condition object (or array of objects) as JSON, repeatable
    #[arg(short, long = "condition", required = true)]
    pub conditions: Vec<String>,

    /// How results of several conditions are combined
    #[arg(long, default_value = "sequence")]
    pub order: MergeOrder,

    /// Seed for shuffled conditions
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse_condition_args(raw: &[String]) -> anyhow::Result<Vec<SelectionCondition>> {
    let mut conditions = Vec::new();
    for (index, text) in raw.iter().enumerate() {
        let value: Value = serde_json::from_str(text)
            .with_context(|| format!("condition #{index} is not valid JSON"))?;
        let parsed =
            parse_conditions(&value).with_context(|| format!("condition #{index}"))?;
        conditions.extend(parsed);
    }
    Ok(conditions)
}

pub fn select_command(state: &AppState, args: SelectArgs) -> anyhow::Result<()> {
    let conditions = parse_condition_args(&args.conditions)?;
    let option = SelectOption { order: args.order };

    let selected = state
        .engine()
        .select_with_rng(&conditions, option, &mut rng(args.seed))?;
    tracing::info!("selected {} bookmarks", selected.len());

    print_json(&selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_and_arrays_are_flattened() {
        let conditions = parse_condition_args(&[
            r#"{"latest": true, "limit": 3}"#.to_string(),
            r#"[{"highQuizIncorrect": true}, {"shuffle": true}]"#.to_string(),
        ])
        .unwrap();

        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0].limit, Some(3));
        assert_eq!(conditions[1].high_quiz_incorrect, Some(true));
        assert_eq!(conditions[2].shuffle, Some(true));
    }

    #[test]
    fn bad_input_names_the_condition() {
        let err = parse_condition_args(&["{}".to_string(), "{oops".to_string()]).unwrap_err();
        assert!(err.to_string().contains("condition #1"));

        assert!(parse_condition_args(&[r#"{"limit": -1}"#.to_string()]).is_err());
        assert!(parse_condition_args(&[r#"{"colour": true}"#.to_string()]).is_err());
    }
}
