use parking_lot::RwLock;
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;

use crate::console::{Console, Message};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Prompt,
}

#[derive(Clone, Default)]
pub struct MockConsole {
    entries: Arc<RwLock<Vec<Entry>>>,
    guesses: Arc<RwLock<VecDeque<String>>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_guesses(guesses: &[&str]) -> Self {
        let console = MockConsole::new();
        console.push_guesses(guesses);
        console
    }

    pub fn push_guesses(&self, guesses: &[&str]) {
        self.guesses
            .write()
            .extend(guesses.iter().map(|g| g.to_string()));
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message),
                Entry::Prompt => None,
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.read().clone()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| matches!(entry, Entry::Text(m) if m == message))
    }

    pub fn prompt_count(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|entry| **entry == Entry::Prompt)
            .count()
    }

    pub fn remaining_guesses(&self) -> usize {
        self.guesses.read().len()
    }
}

impl Console for MockConsole {
    fn say(&mut self, message: &Message) -> io::Result<()> {
        self.entries.write().push(Entry::Text(message.clone()));
        Ok(())
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        self.entries.write().push(Entry::Prompt);
        Ok(self.guesses.write().pop_front())
    }
}
