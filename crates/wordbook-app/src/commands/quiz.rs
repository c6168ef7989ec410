use std::io::{self, BufRead, Write};

use clap::Args;
use wordbook_core::quiz::{Quiz, QuizChoice, QuizGenerator, record_outcome};

use super::rng;
use crate::state::AppState;

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Number of quizzes, defaults to the profile's quiz amount
    #[arg(short, long)]
    pub amount: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask on stdin and record each answer
    #[arg(short, long)]
    pub interactive: bool,
}

fn choice_label(index: usize) -> char {
    char::from(b'a' + (index % 26) as u8)
}

/// Accepts a letter (`b`) or a 1-based number (`2`)
fn parse_answer(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1);
    }

    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Some(usize::from(c as u8 - b'a')),
        _ => None,
    }
}

fn format_choice(index: usize, choice: &QuizChoice) -> String {
    match &choice.meaning {
        Some(meaning) => format!("  {}) {} ({})", choice_label(index), meaning.to, meaning.from_type),
        None => format!("  {}) {}", choice_label(index), choice.word),
    }
}

fn print_quiz(number: usize, quiz: &Quiz) {
    println!("{number}. {}", quiz.target().word);
    for (index, choice) in quiz.choices().iter().enumerate() {
        println!("{}", format_choice(index, choice));
    }
}

pub fn quiz_command(state: &mut AppState, args: QuizArgs) -> anyhow::Result<()> {
    let amount = args.amount.unwrap_or(state.config.quiz.amount);
    let generator = QuizGenerator::new(&state.config.quiz);
    let quizzes = generator.generate(&state.engine(), amount, &mut rng(args.seed))?;

    if quizzes.is_empty() {
        println!("nothing to quiz, bookmark some words first");
        return Ok(());
    }

    if !args.interactive {
        for (i, quiz) in quizzes.iter().enumerate() {
            print_quiz(i + 1, quiz);
            println!("  answer: {}", choice_label(quiz.correct_index()));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut correct = 0;
    let total = quizzes.len();

    for (i, mut quiz) in quizzes.into_iter().enumerate() {
        print_quiz(i + 1, &quiz);

        let outcome = loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                println!();
                println!("{correct}/{i} correct");
                return Ok(());
            };

            let Some(index) = parse_answer(&line) else {
                println!("answer with a letter or a number");
                continue;
            };
            match quiz.answer(index) {
                Ok(outcome) => break outcome,
                Err(e) => println!("{e}"),
            }
        };

        if outcome.is_correct() {
            correct += 1;
            println!("correct");
        } else {
            println!("wrong, it was {}", choice_label(quiz.correct_index()));
        }
        record_outcome(&mut state.store, &outcome)?;
    }
    println!("{correct}/{total} correct");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_by_letter_or_number() {
        assert_eq!(parse_answer("a"), Some(0));
        assert_eq!(parse_answer(" c\n"), Some(2));
        assert_eq!(parse_answer("2"), Some(1));
        assert_eq!(parse_answer("0"), None);
        assert_eq!(parse_answer("ab"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn choice_shows_meaning_when_present() {
        let choice = QuizChoice {
            word: "run".into(),
            meaning: Some(wordbook_types::Meaning::new("run", "v", "달리다")),
            correct: true,
        };
        assert_eq!(format_choice(1, &choice), "  b) 달리다 (v)");

        let bare = QuizChoice {
            meaning: None,
            ..choice
        };
        assert_eq!(format_choice(0, &bare), "  a) run");
    }
}
