//! Generated arithmetic questions, scaled by level.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quiz_core::model::{LevelId, QuestionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: i64,
}

impl Question {
    /// Grade a typed answer. `None` if the input isn't a whole number.
    #[must_use]
    pub fn check(&self, input: &str) -> Option<QuestionOutcome> {
        let given: i64 = input.trim().parse().ok()?;
        Some(QuestionOutcome {
            prompt: self.prompt.clone(),
            expected: self.answer.to_string(),
            given: given.to_string(),
            correct: given == self.answer,
        })
    }
}

/// Seeded question source; the same seed yields the same quizzes.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    rng: StdRng,
}

impl QuestionBank {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next question for `level`. Callers ask once per question,
    /// so a quiz never holds more than the one being answered.
    pub fn next_question(&mut self, level: LevelId) -> Question {
        match level {
            LevelId::Beginner => {
                let a: i64 = self.rng.random_range(1..=20);
                let b: i64 = self.rng.random_range(1..=20);
                if self.rng.random_bool(0.5) {
                    Question {
                        prompt: format!("{a} + {b}"),
                        answer: a + b,
                    }
                } else {
                    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
                    Question {
                        prompt: format!("{hi} - {lo}"),
                        answer: hi - lo,
                    }
                }
            }
            LevelId::Intermediate => {
                let a: i64 = self.rng.random_range(2..=12);
                let b: i64 = self.rng.random_range(2..=12);
                Question {
                    prompt: format!("{a} × {b}"),
                    answer: a * b,
                }
            }
            LevelId::Advanced => {
                let a: i64 = self.rng.random_range(2..=12);
                let b: i64 = self.rng.random_range(2..=12);
                let c: i64 = self.rng.random_range(1..=50);
                if self.rng.random_bool(0.5) {
                    Question {
                        prompt: format!("{a} × {b} + {c}"),
                        answer: a * b + c,
                    }
                } else {
                    Question {
                        prompt: format!("{a} × {b} - {c}"),
                        answer: a * b - c,
                    }
                }
            }
        }
    }
}
