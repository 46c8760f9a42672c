//! Gallows drawings, one per wrong guess.

/// Progressive stages; index = number of wrong guesses so far.
pub const STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Wrong guesses allowed before the round is lost: the last stage is the loss.
pub const MAX_WRONG: u32 = (STAGES.len() - 1) as u32;

/// Drawing for `wrong_count` wrong guesses, clamped to the final stage.
pub fn stage(wrong_count: u32) -> &'static str {
    let index = (wrong_count as usize).min(STAGES.len() - 1);
    STAGES[index]
}
