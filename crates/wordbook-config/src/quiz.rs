use serde::{Deserialize, Serialize};

fn default_amount() -> usize {
    20
}

fn default_choice_count() -> usize {
    4
}

fn default_shuffle_group_size() -> usize {
    5
}

fn default_frequency_limit() -> u32 {
    10
}

fn default_incorrect_rate_limit() -> f64 {
    10.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuizConfig {
    /// Number of quizzes generated per session
    #[serde(default = "default_amount")]
    pub amount: usize,
    /// Choices per quiz, including the correct one
    #[serde(default = "default_choice_count")]
    pub choice_count: usize,
    #[serde(default = "default_shuffle_group_size")]
    pub shuffle_group_size: usize,
    /// Words quizzed at most this many times are treated as "fresh"
    #[serde(default = "default_frequency_limit")]
    pub frequency_limit: u32,
    /// Words at or above this incorrect rate are treated as "weak"
    #[serde(default = "default_incorrect_rate_limit")]
    pub incorrect_rate_limit: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            amount: default_amount(),
            choice_count: default_choice_count(),
            shuffle_group_size: default_shuffle_group_size(),
            frequency_limit: default_frequency_limit(),
            incorrect_rate_limit: default_incorrect_rate_limit(),
        }
    }
}
