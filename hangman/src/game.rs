//! Guess session state machine.
//!
//! A session starts `InProgress` and moves to exactly one of the terminal
//! states `Won` or `Lost`. All input checks live here so the round driver can
//! hand raw lines straight to [`GuessSession::validate`].

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::art::MAX_WRONG;
use crate::words::canonical;

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// Effect of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit,
    Miss,
}

/// Why a guess was refused. The message is shown to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("❌ Please enter a single letter.")]
    NotSingleCharacter,
    #[error("❌ That is not a letter. Please enter a letter.")]
    NotAlphabetic,
    #[error("⚠️ You already guessed '{0}'.")]
    AlreadyGuessed(char),
    #[error("The round is already over.")]
    RoundOver,
}

/// Compute the state that follows an accepted guess.
///
/// `solved` is whether every letter of the word is now guessed.
pub fn transition(
    state: GameState,
    guess: Guess,
    solved: bool,
    wrong_count: u32,
    max_wrong: u32,
) -> GameState {
    match (state, guess) {
        (GameState::InProgress, Guess::Hit) if solved => GameState::Won,
        (GameState::InProgress, Guess::Miss) if wrong_count >= max_wrong => GameState::Lost,
        (state, _) => state,
    }
}

/// In-memory state for one round of hangman.
#[derive(Debug, Clone)]
pub struct GuessSession {
    secret: String,
    guessed: BTreeSet<char>,
    wrong_count: u32,
    max_wrong: u32,
    state: GameState,
}

impl GuessSession {
    /// Start a round with the standard wrong-guess budget.
    pub fn new(secret: &str) -> Self {
        Self::with_max_wrong(secret, MAX_WRONG)
    }

    pub fn with_max_wrong(secret: &str, max_wrong: u32) -> Self {
        Self {
            secret: secret.chars().map(canonical).collect(),
            guessed: BTreeSet::new(),
            wrong_count: 0,
            max_wrong,
            state: GameState::InProgress,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn attempts_left(&self) -> u32 {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    /// Turn a raw input line into a guess that [`apply`](Self::apply) will accept.
    pub fn validate(&self, raw: &str) -> Result<char, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::RoundOver);
        }
        let mut chars = raw.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return Err(GuessError::NotSingleCharacter),
        };
        if !letter.is_alphabetic() {
            return Err(GuessError::NotAlphabetic);
        }
        let letter = canonical(letter);
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }
        Ok(letter)
    }

    /// Record a guess and advance the state machine.
    pub fn apply(&mut self, letter: char) -> Result<Guess, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::RoundOver);
        }
        let letter = canonical(letter);
        if !self.guessed.insert(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let guess = if self.secret.contains(letter) {
            Guess::Hit
        } else {
            self.wrong_count += 1;
            Guess::Miss
        };
        let next = transition(
            self.state,
            guess,
            self.is_solved(),
            self.wrong_count,
            self.max_wrong,
        );
        debug!(%letter, ?guess, wrong_count = self.wrong_count, from = ?self.state, to = ?next, "guess applied");
        self.state = next;
        Ok(guess)
    }

    pub fn is_solved(&self) -> bool {
        self.secret.chars().all(|letter| self.guessed.contains(&letter))
    }

    pub fn progress(&self) -> String {
        display_progress(&self.secret, &self.guessed)
    }
}

/// The word with unguessed letters replaced by `_`, letters separated by spaces.
pub fn display_progress(secret: &str, guessed: &BTreeSet<char>) -> String {
    secret
        .chars()
        .map(|letter| if guessed.contains(&letter) { letter } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut GuessSession, letters: &str) {
        for letter in letters.chars() {
            let letter = session.validate(&letter.to_string()).expect("valid guess");
            session.apply(letter).expect("apply");
        }
    }

    #[test]
    fn guessing_every_letter_wins() {
        let mut session = GuessSession::new("cloud");
        play(&mut session, "clou");
        assert_eq!(session.state(), GameState::InProgress);
        play(&mut session, "d");
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.wrong_count(), 0);
        assert_eq!(session.progress(), "c l o u d");
    }

    #[test]
    fn six_misses_lose() {
        let mut session = GuessSession::new("tiger");
        play(&mut session, "qxzjv");
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_left(), 1);
        play(&mut session, "k");
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.wrong_count(), 6);
    }

    #[test]
    fn loss_does_not_depend_on_remaining_letters() {
        let mut session = GuessSession::new("tiger");
        play(&mut session, "tigeqxzjvk");
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.progress(), "t i g e _");
    }

    #[test]
    fn rejects_malformed_input_without_mutation() {
        let session = GuessSession::new("apple");
        assert_eq!(session.validate(""), Err(GuessError::NotSingleCharacter));
        assert_eq!(session.validate("ab"), Err(GuessError::NotSingleCharacter));
        assert_eq!(session.validate(" a"), Err(GuessError::NotSingleCharacter));
        assert_eq!(session.validate("7"), Err(GuessError::NotAlphabetic));
        assert_eq!(session.validate("?"), Err(GuessError::NotAlphabetic));
        assert!(session.guessed.is_empty());
        assert_eq!(session.wrong_count(), 0);
    }

    #[test]
    fn repeated_guesses_are_rejected_case_insensitively() {
        let mut session = GuessSession::new("apple");
        play(&mut session, "az");
        assert_eq!(session.validate("A"), Err(GuessError::AlreadyGuessed('a')));
        assert_eq!(session.validate("z"), Err(GuessError::AlreadyGuessed('z')));
        assert_eq!(session.apply('Z'), Err(GuessError::AlreadyGuessed('z')));
        assert_eq!(session.wrong_count(), 1);
    }

    #[test]
    fn uppercase_guess_matches_lowercase_word() {
        let mut session = GuessSession::new("Chair");
        let letter = session.validate("C").expect("valid");
        assert_eq!(session.apply(letter), Ok(Guess::Hit));
        assert_eq!(session.progress(), "c _ _ _ _");
    }

    #[test]
    fn terminal_session_refuses_guesses() {
        let mut session = GuessSession::with_max_wrong("ab", 1);
        play(&mut session, "z");
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.validate("a"), Err(GuessError::RoundOver));
        assert_eq!(session.apply('a'), Err(GuessError::RoundOver));
    }

    #[test]
    fn transition_keeps_terminal_states() {
        assert_eq!(
            transition(GameState::Won, Guess::Miss, true, 9, 6),
            GameState::Won
        );
        assert_eq!(
            transition(GameState::InProgress, Guess::Hit, false, 0, 6),
            GameState::InProgress
        );
        assert_eq!(
            transition(GameState::InProgress, Guess::Miss, false, 6, 6),
            GameState::Lost
        );
    }

    #[test]
    fn progress_of_solved_word_has_no_underscores() {
        let guessed: BTreeSet<char> = "python".chars().collect();
        assert_eq!(display_progress("python", &guessed), "p y t h o n");
        assert_eq!(display_progress("python", &BTreeSet::new()), "_ _ _ _ _ _");
    }
}
