use std::io::{BufRead, Write};

use log::{info, trace, warn};

use crate::error::GameError;
use crate::hint::{classify, Hint};
use crate::secret::{SECRET_MAX, SECRET_MIN};

const WELCOME: &str = "Welcome to the Number Guessing Game!";
const CHALLENGE: &str = "Can you guess what it is?";
const PROMPT: &str = "Enter your guess: ";
const INVALID: &str = "Please enter a whole number.";

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum State {
    AwaitingGuess,
    Finished,
}

/// Result of a finished session.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Outcome {
    pub secret: i64,
    pub attempts: u32,
}

/// Parses one raw input line. Bytes that are not UTF-8 are as invalid as any
/// other non-number.
pub fn parse_guess_bytes(line: &[u8]) -> Result<i64, GameError> {
    match std::str::from_utf8(line) {
        Ok(text) => parse_guess(text),
        Err(_) => Err(GameError::InvalidGuess(
            String::from_utf8_lossy(line).trim().to_string(),
        )),
    }
}

pub fn parse_guess(line: &str) -> Result<i64, GameError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| GameError::InvalidGuess(trimmed.to_string()))
}

/// One game: a fixed secret, a running attempt count and the latest hint.
#[derive(Debug)]
pub struct Session {
    secret: i64,
    attempts: u32,
    last_hint: Option<Hint>,
    state: State,
}

impl Session {
    pub fn new(secret: i64) -> Self {
        Session {
            secret,
            attempts: 0,
            last_hint: None,
            state: State::AwaitingGuess,
        }
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn last_hint(&self) -> Option<Hint> {
        self.last_hint
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Counts and classifies one guess. Once finished, further guesses are
    /// ignored and the counter stays put.
    pub fn submit(&mut self, guess: i64) -> Hint {
        if self.state == State::Finished {
            return Hint::ExactMatch;
        }
        self.attempts += 1;
        let hint = classify(guess, self.secret);
        trace!("Attempt {}: guess {} -> {:?}", self.attempts, guess, hint);
        self.last_hint = Some(hint);
        if hint.is_exact() {
            self.state = State::Finished;
        }
        hint
    }

    /// Plays the session to the end over the given input and output.
    /// Lines that are not whole numbers are rejected and re-prompted without
    /// counting as an attempt.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<Outcome, GameError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", WELCOME)?;
        writeln!(
            output,
            "I have selected a number between {} and {}.",
            SECRET_MIN, SECRET_MAX
        )?;
        writeln!(output, "{}", CHALLENGE)?;

        let mut line = Vec::new();
        while self.state == State::AwaitingGuess {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(GameError::InputClosed {
                    attempts: self.attempts,
                });
            }
            let guess = match parse_guess_bytes(&line) {
                Ok(guess) => guess,
                Err(err) => {
                    warn!("Rejected input: {}", err);
                    writeln!(output, "{}", INVALID)?;
                    continue;
                }
            };

            let hint = self.submit(guess);
            if hint.is_exact() {
                writeln!(
                    output,
                    "Congratulations! You've guessed the number {} in {} attempts.",
                    self.secret, self.attempts
                )?;
            } else {
                writeln!(output, "{}", hint)?;
            }
        }
        output.flush()?;

        info!("Session finished after {} attempts", self.attempts);
        Ok(Outcome {
            secret: self.secret,
            attempts: self.attempts,
        })
    }
}
