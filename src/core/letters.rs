//! Per-letter feedback aggregation for keyboard coloring

use super::Feedback;
use std::collections::BTreeMap;

/// Best feedback seen for each guessed letter
///
/// Walks the history in submission order and only ever upgrades a letter
/// (`Gray < Yellow < Green`). Letters that were never guessed are absent.
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, used_letter_colors};
///
/// let guesses = ["ab".to_string(), "ba".to_string()];
/// let feedback = [
///     vec![Feedback::Gray, Feedback::Yellow],
///     vec![Feedback::Green, Feedback::Gray],
/// ];
/// let colors = used_letter_colors(&guesses, &feedback);
/// assert_eq!(colors[&'a'], Feedback::Gray);
/// assert_eq!(colors[&'b'], Feedback::Green);
/// ```
#[must_use]
pub fn used_letter_colors<G, F>(guesses: &[G], feedback: &[F]) -> BTreeMap<char, Feedback>
where
    G: AsRef<str>,
    F: AsRef<[Feedback]>,
{
    let mut colors = BTreeMap::new();

    for (guess, row) in guesses.iter().zip(feedback) {
        for (letter, &fb) in guess.as_ref().chars().zip(row.as_ref()) {
            colors
                .entry(letter)
                .and_modify(|best: &mut Feedback| {
                    if fb.priority() > best.priority() {
                        *best = fb;
                    }
                })
                .or_insert(fb);
        }
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Gray, Green, Yellow};

    #[test]
    fn prioritizes_colors() {
        let guesses = ["abcde", "fghij"];
        let feedback = [
            [Gray, Yellow, Green, Gray, Gray],
            [Yellow, Green, Gray, Gray, Gray],
        ];
        let colors = used_letter_colors(&guesses, &feedback);

        assert_eq!(colors[&'a'], Gray);
        assert_eq!(colors[&'b'], Yellow);
        assert_eq!(colors[&'c'], Green);
        assert_eq!(colors[&'f'], Yellow);
        assert_eq!(colors[&'g'], Green);
        assert_eq!(colors.len(), 10);
    }

    #[test]
    fn never_downgrades() {
        let guesses = ["aaa", "aaa", "aaa"];
        let feedback = [[Green, Gray, Gray], [Gray, Gray, Gray], [Yellow, Gray, Gray]];
        let colors = used_letter_colors(&guesses, &feedback);
        assert_eq!(colors[&'a'], Green);
    }

    #[test]
    fn upgrades_within_one_guess() {
        let colors = used_letter_colors(&["eerie"], &[[Gray, Yellow, Gray, Gray, Green]]);
        assert_eq!(colors[&'e'], Green);
        assert_eq!(colors[&'r'], Gray);
    }

    #[test]
    fn unguessed_letters_absent() {
        let colors = used_letter_colors(&["abc"], &[[Gray, Gray, Gray]]);
        assert!(!colors.contains_key(&'z'));
    }

    #[test]
    fn empty_history() {
        let guesses: [&str; 0] = [];
        let feedback: [Vec<Feedback>; 0] = [];
        assert!(used_letter_colors(&guesses, &feedback).is_empty());
    }
}
