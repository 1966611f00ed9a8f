use std::io;

use crate::quiz::QuizReport;

#[cfg(test)]
pub mod mock;
pub mod terminal;

pub use terminal::TerminalConsole;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    CountClamped { requested: usize, available: usize },
    GuessCorrect,
    GuessIncorrect(String),
    QuestionBegins(usize, String),
    QuizResults(QuizReport),
}

/// Where the quiz talks to the player.
pub trait Console {
    fn say(&mut self, message: &Message) -> io::Result<()>;

    /// Blocks for one line of input. Returns `None` once input is exhausted.
    fn read_guess(&mut self) -> io::Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn say(&mut self, message: &Message) -> io::Result<()> {
        (**self).say(message)
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        (**self).read_guess()
    }
}
