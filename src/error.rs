#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("I/O error while talking to the player (error: {0})")]
    Io(#[from] std::io::Error),
    #[error("Not a whole number: {0:?}")]
    InvalidGuess(String),
    #[error("Input closed after {attempts} attempts, before the number was guessed")]
    InputClosed { attempts: u32 },
}
