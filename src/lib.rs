#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod hint;
pub mod secret;

pub use error::GameError;
pub use game::{Outcome, Session};
pub use hint::{classify, Hint};
pub use secret::SecretSelector;
