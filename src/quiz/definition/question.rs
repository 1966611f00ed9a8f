fn sanitize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub answer: String,
}

impl Question {
    pub fn new<T: Into<String>, A: Into<String>>(text: T, answer: A) -> Self {
        Question {
            text: text.into(),
            answer: answer.into(),
        }
    }

    pub fn is_guess_correct(&self, guess: &str) -> bool {
        sanitize(guess) == sanitize(&self.answer)
    }
}
