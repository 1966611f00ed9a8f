use std::io::{self, BufRead, Stdout, Write};

use crate::console::{Console, Message};


const ANSWER_PROMPT: &str = "Your answer: ";

pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        TerminalConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalConsole { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn interpret_message(message: &Message) -> String {
        use Message::*;
        match message {
            CountClamped { requested, available } => format!(
                "Warning: Requested {} questions, but only {} available. Using all available questions.",
                requested, available
            ),
            QuestionBegins(number, text) => format!("\nQuestion {}: {}", number, text),
            GuessCorrect => "Correct!".into(),
            GuessIncorrect(answer) => format!("Incorrect. The correct answer was: {}", answer),
            QuizResults(report) => format!("\nQuiz complete! Your score: {}", report),
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, message: &Message) -> io::Result<()> {
        writeln!(self.output, "{}", Self::interpret_message(message))
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}", ANSWER_PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
