//! Interactive confirmation.
//!
//! The reconciler asks through the [`Prompt`] trait so that tests can answer
//! deterministically instead of reading standard input.
use std::io::{self, BufRead, Write};

/// Capability to ask the operator a yes/no question.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt: Send + Sync {
    /// Ask `question`; return `true` only on an affirmative answer.
    fn confirm(&self, question: &str) -> bool;
}

/// [`Prompt`] that reads one line from standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, question: &str) -> bool {
        ask(&mut io::stdin().lock(), &mut io::stdout().lock(), question)
    }
}

/// Write `question` to `output` and read the answer from `input`.
///
/// End of input and read errors count as "no".
pub fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> bool {
    if write!(output, "  {question} Continue? (y/N): ")
        .and_then(|()| output.flush())
        .is_err()
    {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&answer),
    }
}

/// Return `true` for `y` or `yes`, ignoring case and surrounding whitespace.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
