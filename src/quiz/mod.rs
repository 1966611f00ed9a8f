use itertools::Itertools;
use rand::seq::index;
use rand::Rng;
use std::fmt;
use std::io;
use thiserror::Error;
use tracing::{debug, info};

use self::definition::*;
use crate::console::{Console, Message};

pub mod definition;
pub mod settings;


#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Questions or answers are empty. Quiz cannot start.")]
    EmptyBank,

    #[error("Input ended before the quiz was complete")]
    InputClosed,

    #[error("There is no active question")]
    NoActiveQuestion,

    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for QuizReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessResult {
    pub answer: String,
    pub is_correct: bool,
}

/// Draws `count` distinct positions from `0..bank_size`, in the order they were drawn.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, bank_size: usize, count: usize) -> Vec<usize> {
    index::sample(rng, bank_size, count).into_vec()
}

pub fn run<R, C>(
    bank: &QuestionBank,
    requested_count: usize,
    rng: &mut R,
    console: C,
) -> Result<QuizReport, QuizError>
where
    R: Rng + ?Sized,
    C: Console,
{
    Quiz::new(bank, requested_count, rng, console)?.run()
}

pub struct Quiz<'a, C> {
    bank: &'a QuestionBank,
    selection: Vec<usize>,
    position: usize,
    score: usize,
    console: C,
}

impl<'a, C: Console> Quiz<'a, C> {
    pub fn new<R: Rng + ?Sized>(
        bank: &'a QuestionBank,
        requested_count: usize,
        rng: &mut R,
        mut console: C,
    ) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let available = bank.len();
        let count = if requested_count > available {
            info!(
                requested = requested_count,
                available, "Not enough questions, using all available questions"
            );
            console.say(&Message::CountClamped {
                requested: requested_count,
                available,
            })?;
            available
        } else {
            requested_count
        };

        let selection = sample_indices(rng, available, count);
        debug!("Selected questions: [{}]", selection.iter().join(", "));

        Ok(Quiz {
            bank,
            selection,
            position: 0,
            score: 0,
            console,
        })
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.position >= self.selection.len()
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        let bank = self.bank;
        self.selection
            .get(self.position)
            .and_then(|index| bank.get(*index))
    }

    pub fn report(&self) -> QuizReport {
        QuizReport {
            score: self.score,
            total: self.selection.len(),
        }
    }

    /// Scores a guess against the current question and moves on to the next one.
    pub fn guess(&mut self, guess: &str) -> Result<GuessResult, QuizError> {
        let question = self.current_question().ok_or(QuizError::NoActiveQuestion)?;
        let is_correct = question.is_guess_correct(guess);
        if is_correct {
            self.score += 1;
        }
        self.position += 1;
        debug!(
            question = %question.text,
            guess,
            is_correct,
            "Scored answer"
        );
        Ok(GuessResult {
            answer: question.answer.clone(),
            is_correct,
        })
    }

    fn ask_next(&mut self) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::NoActiveQuestion)?;
        self.console.say(&Message::QuestionBegins(
            self.position + 1,
            question.text.clone(),
        ))?;

        let guess = self.console.read_guess()?.ok_or(QuizError::InputClosed)?;
        let guess_result = self.guess(&guess)?;

        if guess_result.is_correct {
            self.console.say(&Message::GuessCorrect)?;
        } else {
            self.console
                .say(&Message::GuessIncorrect(guess_result.answer))?;
        }
        Ok(())
    }

    pub fn run(mut self) -> Result<QuizReport, QuizError> {
        while !self.is_over() {
            self.ask_next()?;
        }
        let report = self.report();
        self.console.say(&Message::QuizResults(report))?;
        Ok(report)
    }
}
