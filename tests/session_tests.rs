use std::io::Cursor;

use wordle_assistant::session::separator;
use wordle_assistant::{Config, Error, Session, SessionEnd, WordleAssistant};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn config(rounds: usize, suggestions: usize) -> Config {
    Config {
        rounds,
        suggestions,
        ..Config::default()
    }
}

fn play(
    candidates: &[&str],
    starter: &str,
    input: &str,
    config: &Config,
) -> (wordle_assistant::Result<SessionEnd>, String, WordleAssistant) {
    let assistant = WordleAssistant::new(words(candidates), words(&[starter]));
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), assistant, config);
    let end = session.run();
    let assistant = session.assistant().clone();
    let output = String::from_utf8(session.into_output()).unwrap();
    (end, output, assistant)
}

#[test]
fn test_prints_starter() {
    let (end, output, _) = play(&["crate", "trace"], "crane", "", &config(0, 5));
    assert!(output.starts_with(&separator("Wordle Solver")));
    assert!(output.contains("Start with this word:\ncrane\n"));
    assert_eq!(
        end.unwrap(),
        SessionEnd::RoundsExhausted {
            candidates: words(&["crate", "trace"])
        }
    );
}

#[test]
fn test_solved_stops_prompting() {
    let input = "\ncra_e\n\nthis is never read\n";
    let (end, output, _) = play(&["crate", "trace", "slate"], "crane", input, &config(5, 5));

    assert_eq!(end.unwrap(), SessionEnd::Solved("crate".to_string()));
    assert!(output.ends_with(&format!("{}\ncrate\n", separator("The word is"))));
    assert!(!output.contains("Most likely words"));
}

#[test]
fn test_ranked_round() {
    // moist is not a candidate, BOAST is accepted case-insensitively
    let input = "\nab\n_____\na____\nmoist\nBOAST\n";
    let candidates = ["toast", "boast", "moist", "sandy", "handy", "salty"];
    let (end, output, assistant) = play(&candidates, "crane", input, &config(1, 2));

    assert_eq!(
        end.unwrap(),
        SessionEnd::RoundsExhausted {
            candidates: words(&["toast", "salty"])
        }
    );
    assert!(output.contains("Invalid input. Please enter 5 letters."));
    assert!(output.contains(&format!(
        "{}\ntoast\nboast\nEnter the word you guessed: ",
        separator("Most likely words to guess next")
    )));
    assert!(output.contains("Invalid guess. Please enter a valid word."));
    assert!(!output.contains("salty"));
    assert_eq!(assistant.guessed(), &words(&["crane", "boast"])[..]);
}

#[test]
fn test_unique_round() {
    let input = "U\n\n\n";
    let candidates = ["geese", "toast", "slate", "mulch"];
    let (end, output, assistant) = play(&candidates, "pinch", input, &config(1, 5));

    assert!(output.contains("Unique guess:\nslate\n"));
    assert_eq!(
        end.unwrap(),
        SessionEnd::RoundsExhausted {
            candidates: words(&["geese", "toast"])
        }
    );
    assert_eq!(assistant.guessed(), &words(&["pinch", "slate"])[..]);
}

#[test]
fn test_several_rounds() {
    let input = "u\n\n\nu\n\n\n";
    let candidates = ["abbey", "mulch", "dowdy", "fjord", "gawky"];
    let (end, output, assistant) = play(&candidates, "pinch", input, &config(2, 5));

    // pinch rules out mulch, fjord rules out dowdy
    assert!(output.contains("Unique guess:\nfjord\n"));
    assert!(output.contains("Unique guess:\ngawky\n"));
    assert_eq!(
        end.unwrap(),
        SessionEnd::RoundsExhausted {
            candidates: words(&["abbey"])
        }
    );
    assert_eq!(assistant.guessed(), &words(&["pinch", "fjord", "gawky"])[..]);
}

#[test]
fn test_input_closed() {
    let (end, _, _) = play(&["crate", "trace"], "crane", "u\n_r___\n", &config(5, 5));
    assert!(matches!(end, Err(Error::InputClosed)));
}

#[test]
fn test_unique_exhausted() {
    let (end, _, _) = play(&["geese", "apple", "jazzy"], "pinch", "u\n\n\n", &config(5, 5));
    assert!(matches!(end, Err(Error::ExhaustedCandidates { .. })));
}

#[test]
fn test_ranked_with_no_candidates() {
    let (end, output, _) = play(&["crate", "trace"], "crane", "\nz____\n\n", &config(5, 5));
    assert!(matches!(end, Err(Error::ExhaustedCandidates { .. })));
    assert!(!output.contains("Enter the word you guessed"));
}
