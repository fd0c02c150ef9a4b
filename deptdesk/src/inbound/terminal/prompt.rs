//! Interactive input behind a trait so the shell can run from a script.

#[cfg(any(test, feature = "test-support"))]
use std::collections::VecDeque;
use std::io;

use dialoguer::{Confirm, Input, Password, Select};

/// Source of user input for the shell.
///
/// End of input is reported as [`io::ErrorKind::UnexpectedEof`], which the
/// shell treats as quitting.
pub trait Prompter {
    /// Free text, pre-filled with `initial`. May be empty.
    fn input(&mut self, label: &str, initial: &str) -> io::Result<String>;

    /// Hidden text.
    fn password(&mut self, label: &str) -> io::Result<String>;

    /// Yes/no question, defaulting to no.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> io::Result<usize>;
}

/// Prompter for a real terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    /// Create a prompter on the process terminal.
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, label: &str, initial: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
    }

    fn password(&mut self, label: &str) -> io::Result<String> {
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> io::Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
    }
}

/// Prompter that replays a fixed list of answers.
///
/// Every prompt consumes one answer. `select` answers name the item,
/// `confirm` answers are `y`/`yes` for yes; anything else is no.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

#[cfg(any(test, feature = "test-support"))]
impl ScriptedPrompter {
    /// Queue `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, label: &str) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("script exhausted at prompt `{label}`"),
            )
        })
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Prompter for ScriptedPrompter {
    fn input(&mut self, label: &str, _initial: &str) -> io::Result<String> {
        self.next(label)
    }

    fn password(&mut self, label: &str) -> io::Result<String> {
        self.next(label)
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.next(question)?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> io::Result<usize> {
        let answer = self.next(prompt)?;
        items
            .iter()
            .position(|item| item.eq_ignore_ascii_case(&answer))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("`{answer}` is not one of {items:?}"),
                )
            })
    }
}
