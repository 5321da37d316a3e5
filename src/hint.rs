use std::fmt;

// upper bounds (inclusive) on |guess - secret| for each bucket
const VERY_HOT: u64 = 10;
const HOT: u64 = 20;
const WARM: u64 = 30;
const COLD: u64 = 50;

/// Proximity feedback for a single guess.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Hint {
    ExactMatch,
    VeryHot,
    Hot,
    Warm,
    Cold,
    IceCold,
}

impl Hint {
    pub fn is_exact(&self) -> bool {
        matches!(self, Hint::ExactMatch)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Hint::ExactMatch => "Right",
            Hint::VeryHot => "Very Hot!",
            Hint::Hot => "Hot!",
            Hint::Warm => "Warm!",
            Hint::Cold => "Cold!",
            Hint::IceCold => "Ice Cold!",
        };
        write!(f, "{}", text)
    }
}

/// Classifies a guess by its distance from the secret. Any integer is accepted,
/// including guesses outside the range the secret was drawn from.
pub fn classify(guess: i64, secret: i64) -> Hint {
    if guess == secret {
        return Hint::ExactMatch;
    }
    match guess.abs_diff(secret) {
        d if d <= VERY_HOT => Hint::VeryHot,
        d if d <= HOT => Hint::Hot,
        d if d <= WARM => Hint::Warm,
        d if d <= COLD => Hint::Cold,
        _ => Hint::IceCold,
    }
}
