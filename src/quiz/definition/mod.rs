use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub mod question;

pub use question::Question;


#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Question or answer file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("The number of questions ({questions}) and answers ({answers}) do not match")]
    MismatchedLengths { questions: usize, answers: usize },

    #[error("An error occurred while loading {}: {source}", path.display())]
    UnknownIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn open_file(source: &Path) -> Result<File, LoadError> {
    File::open(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(source.to_path_buf()),
        _ => LoadError::UnknownIo {
            path: source.to_path_buf(),
            source: e,
        },
    })
}

fn read_lines(file: File, source: &Path) -> Result<Vec<String>, LoadError> {
    BufReader::new(file)
        .lines()
        .map(|line| line.map(|l| l.trim().to_owned()))
        .collect::<io::Result<Vec<String>>>()
        .map_err(|e| LoadError::UnknownIo {
            path: source.to_path_buf(),
            source: e,
        })
}

/// Questions paired with their accepted answers, in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(
        question_source: &Path,
        answer_source: &Path,
    ) -> Result<QuestionBank, LoadError> {
        // Both files must open before either is decoded.
        let question_file = open_file(question_source)?;
        let answer_file = open_file(answer_source)?;
        let questions = read_lines(question_file, question_source)?;
        let answers = read_lines(answer_file, answer_source)?;
        let bank = QuestionBank::from_lines(questions, answers)?;
        info!(
            questions = %question_source.display(),
            answers = %answer_source.display(),
            count = bank.len(),
            "Loaded question bank"
        );
        Ok(bank)
    }

    pub fn from_lines(
        questions: Vec<String>,
        answers: Vec<String>,
    ) -> Result<QuestionBank, LoadError> {
        if questions.len() != answers.len() {
            return Err(LoadError::MismatchedLengths {
                questions: questions.len(),
                answers: answers.len(),
            });
        }
        let questions = questions
            .into_iter()
            .zip(answers)
            .map(|(text, answer)| Question { text, answer })
            .collect();
        Ok(QuestionBank { questions })
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.text.as_str())
    }

    pub fn answers(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.answer.as_str())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
