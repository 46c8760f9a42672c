//! Round driver: renders the session and feeds it validated guesses.

use std::io::{BufRead, Write};

use anyhow::Result;
use interact::{Console, Prompt, Reply, confirm, request_validated_input};
use tracing::{debug, info};

use crate::art;
use crate::game::{GameState, Guess, GuessSession};
use crate::words::{WordList, WordPicker};

const GUESS_PROMPT: &str = "\nGuess a letter: ";
const REPLAY_PROMPT: &str = "\nDo you want to play again? (y/n): ";

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Won,
    Lost,
    /// Input closed before the round finished.
    Abandoned,
}

/// Play a single round against `secret`.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    secret: &str,
) -> Result<RoundEnd> {
    let mut session = GuessSession::new(secret);
    console.say("Welcome to Hangman!")?;
    console.say(art::stage(0))?;
    console.say(session.progress())?;

    while !session.state().is_terminal() {
        let prompt = Prompt::new(GUESS_PROMPT);
        let letter = match request_validated_input(console, &prompt, |raw| session.validate(raw))? {
            Reply::Accepted(letter) => letter,
            Reply::Sentinel | Reply::Closed => {
                console.say(format!("\nNo more input. The word was: {}", session.secret()))?;
                return Ok(RoundEnd::Abandoned);
            }
        };

        match session.apply(letter)? {
            Guess::Hit => {
                console.say("✅ Good guess!")?;
                console.say(art::stage(session.wrong_count()))?;
            }
            Guess::Miss => {
                console.say("❌ Wrong guess!")?;
                console.say(art::stage(session.wrong_count()))?;
                console.say(format!("Attempts left: {}", session.attempts_left()))?;
            }
        }
        console.say(session.progress())?;
    }

    let end = match session.state() {
        GameState::Won => {
            console.say(format!(
                "\n🎉 Congratulations! You guessed the word: {}",
                session.secret()
            ))?;
            RoundEnd::Won
        }
        _ => {
            console.say(format!("\n💀 Game Over! The word was: {}", session.secret()))?;
            RoundEnd::Lost
        }
    };
    info!(?end, wrong_count = session.wrong_count(), "round finished");
    Ok(end)
}

/// Play rounds until the player declines a replay or input closes.
///
/// Each round draws a fresh word from `words` through `picker`.
pub fn run_games<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    words: &WordList,
    picker: &mut dyn WordPicker,
) -> Result<Vec<RoundEnd>> {
    let mut ends = Vec::new();
    loop {
        let secret = words.pick(picker);
        debug!(len = secret.len(), "secret word picked");
        let end = play_round(console, secret)?;
        ends.push(end);
        if end == RoundEnd::Abandoned || !confirm(console, REPLAY_PROMPT)? {
            break;
        }
    }
    console.say("Thanks for playing Hangman!")?;
    Ok(ends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::FixedPicker;
    use interact::test_support::{output_text, scripted_console};

    #[test]
    fn winning_round_reveals_word() {
        let mut console = scripted_console(&["c", "l", "o", "u", "d"]);
        let end = play_round(&mut console, "cloud").expect("round");
        assert_eq!(end, RoundEnd::Won);
        let output = output_text(&console);
        assert!(output.contains("c l o u d"));
        assert!(output.contains("You guessed the word: cloud"));
        assert!(!output.contains("Wrong guess"));
    }

    #[test]
    fn losing_round_counts_down_attempts() {
        let mut console = scripted_console(&["q", "x", "z", "j", "v", "k"]);
        let end = play_round(&mut console, "tiger").expect("round");
        assert_eq!(end, RoundEnd::Lost);
        let output = output_text(&console);
        assert!(output.contains("Attempts left: 5"));
        assert!(output.contains("Attempts left: 0"));
        assert!(output.contains("Game Over! The word was: tiger"));
    }

    #[test]
    fn invalid_guesses_are_reported_and_reprompted() {
        let mut console = scripted_console(&["ab", "3", "c", "C", "l", "o", "u", "d"]);
        let end = play_round(&mut console, "cloud").expect("round");
        assert_eq!(end, RoundEnd::Won);
        let output = output_text(&console);
        assert!(output.contains("Please enter a single letter."));
        assert!(output.contains("That is not a letter."));
        assert!(output.contains("You already guessed 'c'."));
        assert_eq!(output.matches("Guess a letter: ").count(), 8);
    }

    #[test]
    fn closed_input_abandons_round() {
        let mut console = scripted_console(&["a"]);
        let end = play_round(&mut console, "apple").expect("round");
        assert_eq!(end, RoundEnd::Abandoned);
        assert!(output_text(&console).contains("The word was: apple"));
    }

    #[test]
    fn replays_until_declined() {
        let words = WordList::new(["ox"]).expect("words");
        let mut console = scripted_console(&["o", "x", "y", "x", "o", "n"]);
        let ends = run_games(&mut console, &words, &mut FixedPicker(0)).expect("games");
        assert_eq!(ends, vec![RoundEnd::Won, RoundEnd::Won]);
        let output = output_text(&console);
        assert_eq!(output.matches("Welcome to Hangman!").count(), 2);
        assert!(output.ends_with("Thanks for playing Hangman!\n"));
    }
}
