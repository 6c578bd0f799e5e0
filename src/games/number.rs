use rand::Rng;

pub const POINTS_FOR_WIN: u64 = 2;
pub const MAX_ATTEMPTS: u32 = 3;

const SECRET_MIN: u32 = 1;
const SECRET_MAX: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberGameState {
    InProgress,
    Won,
    Lost,
}

/// One guessing session. Starting a session picks the secret; a fresh value
/// is the restart.
pub struct NumberGame {
    secret: u32,
    attempts: u32,
    state: NumberGameState,
}

impl NumberGame {
    pub fn start(rng: &mut impl Rng) -> Self {
        return NumberGame {
            secret: rng.gen_range(SECRET_MIN..=SECRET_MAX),
            attempts: 0,
            state: NumberGameState::InProgress,
        };
    }

    /// Guesses outside `[1, 10]`, or after the session ended, are ignored
    /// and do not consume an attempt.
    pub fn guess(&mut self, guess: u32) -> NumberGameState {
        if self.state != NumberGameState::InProgress {
            return self.state;
        }

        if !(SECRET_MIN..=SECRET_MAX).contains(&guess) {
            return self.state;
        }

        self.attempts += 1;

        if guess == self.secret {
            self.state = NumberGameState::Won;
        } else if self.attempts >= MAX_ATTEMPTS {
            self.state = NumberGameState::Lost;
        }

        return self.state;
    }

    pub fn state(&self) -> NumberGameState {
        return self.state;
    }

    pub fn attempts_left(&self) -> u32 {
        return MAX_ATTEMPTS - self.attempts;
    }

    /// The session's single point emission, available once it is terminal.
    pub fn award(&self) -> Option<u64> {
        return match self.state {
            NumberGameState::InProgress => None,
            NumberGameState::Won => Some(POINTS_FOR_WIN),
            NumberGameState::Lost => Some(0),
        };
    }
}

#[cfg(test)]
impl NumberGame {
    fn with_secret(secret: u32) -> Self {
        return NumberGame {
            secret,
            attempts: 0,
            state: NumberGameState::InProgress,
        };
    }
}
