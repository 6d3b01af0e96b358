use std::io::{self, BufRead, Write};

use tracing::debug;

/// A yes/no question asked before destructive changes.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// Asks on `output` and reads one line from `input`. Anything that is not a
/// lone `y` or `yes` (any case), including EOF and read errors, is a no.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question} [y/N]: ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn terminal() -> Self {
        Prompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        let answer = match self.ask(question) {
            Ok(line) => is_affirmative(&line),
            Err(err) => {
                debug!(error = %err, "confirmation read failed");
                false
            }
        };
        debug!(question, answer, "confirmation");
        answer
    }
}

pub fn is_affirmative(line: &str) -> bool {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => word.eq_ignore_ascii_case("y") || word.eq_ignore_ascii_case("yes"),
        _ => false,
    }
}
