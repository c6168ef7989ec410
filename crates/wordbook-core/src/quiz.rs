//! Multiple-choice quizzes built from bookmark selections

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use wordbook_config::quiz::QuizConfig;
use wordbook_types::{BookmarkView, Meaning, SelectOption, SelectionCondition};

use crate::error::Result;
use crate::selection::BookmarkSelectionEngine;
use crate::store::{BookmarkQuery, BookmarkStore};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuizError {
    #[error("Quiz was already answered")]
    AlreadyAnswered,

    #[error("Choice {index} out of range (quiz has {len} choices)")]
    InvalidChoice { index: usize, len: usize },
}

/// Conditions and merge order used to pick quiz words
#[derive(Debug, Clone)]
pub struct QuizPlan {
    pub conditions: Vec<SelectionCondition>,
    pub option: SelectOption,
}

impl QuizPlan {
    /// Fresh words (rarely quizzed) interleaved with weak words (high incorrect rate).
    ///
    /// Both groups favor the least quizzed words and are shuffled in small bands so the
    /// order varies between sessions.
    pub fn from_config(config: &QuizConfig) -> Self {
        let fresh = SelectionCondition {
            high_frequency_limit: Some(config.frequency_limit),
            low_quiz_frequency: Some(true),
            shuffle: Some(true),
            shuffle_group_size: Some(config.shuffle_group_size),
            ..Default::default()
        };
        let weak = SelectionCondition {
            low_incorrect_rate_limit: Some(config.incorrect_rate_limit),
            low_quiz_frequency: Some(true),
            high_quiz_incorrect: Some(true),
            shuffle: Some(true),
            shuffle_group_size: Some(config.shuffle_group_size),
            ..Default::default()
        };

        Self {
            conditions: vec![fresh, weak],
            option: SelectOption::interleave(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizChoice {
    pub word: String,
    /// Meaning shown for this choice, None if the word has no meanings
    pub meaning: Option<Meaning>,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct { word: String },
    Incorrect { word: String, chosen: String },
}

impl QuizOutcome {
    pub fn word(&self) -> &str {
        match self {
            QuizOutcome::Correct { word } | QuizOutcome::Incorrect { word, .. } => word,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, QuizOutcome::Correct { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Quiz {
    target: BookmarkView,
    choices: Vec<QuizChoice>,
    answered: Option<usize>,
}

impl Quiz {
    /// Build a quiz for `target` with distractors drawn from `pool`
    pub fn new<R: Rng + ?Sized>(
        target: BookmarkView,
        pool: &[BookmarkView],
        choice_count: usize,
        rng: &mut R,
    ) -> Self {
        let candidates: Vec<&BookmarkView> =
            pool.iter().filter(|v| v.word != target.word).collect();
        let distractors: Vec<&BookmarkView> = candidates
            .choose_multiple(rng, choice_count.saturating_sub(1))
            .copied()
            .collect();

        let mut choices = Vec::with_capacity(distractors.len() + 1);
        choices.push(make_choice(&target, true, rng));
        for view in distractors {
            choices.push(make_choice(view, false, rng));
        }
        choices.shuffle(rng);

        Self {
            target,
            choices,
            answered: None,
        }
    }

    pub fn target(&self) -> &BookmarkView {
        &self.target
    }

    pub fn choices(&self) -> &[QuizChoice] {
        &self.choices
    }

    pub fn correct_index(&self) -> usize {
        self.choices.iter().position(|c| c.correct).unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.answered.is_some()
    }

    /// Answer once; later answers are rejected
    pub fn answer(&mut self, index: usize) -> std::result::Result<QuizOutcome, QuizError> {
        if self.answered.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let chosen = self.choices.get(index).ok_or(QuizError::InvalidChoice {
            index,
            len: self.choices.len(),
        })?;
        self.answered = Some(index);

        let word = self.target.word.clone();
        if chosen.correct {
            Ok(QuizOutcome::Correct { word })
        } else {
            Ok(QuizOutcome::Incorrect {
                word,
                chosen: chosen.word.clone(),
            })
        }
    }
}

/// Starred meanings win; among several one is picked at random
fn shown_meaning<R: Rng + ?Sized>(meanings: &[Meaning], rng: &mut R) -> Option<Meaning> {
    let starred: Vec<&Meaning> = meanings.iter().filter(|m| m.starred).collect();
    match starred.choose(rng) {
        Some(meaning) => Some((*meaning).clone()),
        None => meanings.first().cloned(),
    }
}

fn make_choice<R: Rng + ?Sized>(view: &BookmarkView, correct: bool, rng: &mut R) -> QuizChoice {
    QuizChoice {
        word: view.word.clone(),
        meaning: shown_meaning(&view.meanings, rng),
        correct,
    }
}

/// Store the result of an answered quiz, returns false if the word is no longer bookmarked
pub fn record_outcome<S: BookmarkStore + ?Sized>(store: &mut S, outcome: &QuizOutcome) -> Result<bool> {
    let (correct, incorrect) = if outcome.is_correct() { (1, 0) } else { (0, 1) };
    store.increase_quiz_score(outcome.word(), correct, incorrect)
}

pub struct QuizGenerator {
    plan: QuizPlan,
    choice_count: usize,
}

impl QuizGenerator {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            plan: QuizPlan::from_config(config),
            choice_count: config.choice_count,
        }
    }

    pub fn with_plan(plan: QuizPlan, choice_count: usize) -> Self {
        Self { plan, choice_count }
    }

    /// Up to `amount` quizzes; distractors come from the same selection
    pub fn generate<S, R>(
        &self,
        engine: &BookmarkSelectionEngine<S>,
        amount: usize,
        rng: &mut R,
    ) -> Result<Vec<Quiz>>
    where
        S: BookmarkQuery,
        R: Rng + ?Sized,
    {
        let selected = engine.select_with_rng(&self.plan.conditions, self.plan.option, rng)?;
        tracing::info!("generating {} quizzes from {} bookmarks", amount.min(selected.len()), selected.len());

        let quizzes = selected
            .iter()
            .take(amount)
            .map(|target| Quiz::new(target.clone(), &selected, self.choice_count, rng))
            .collect();

        Ok(quizzes)
    }
}
