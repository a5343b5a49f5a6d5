//! End-to-end session tests over in-memory channels.

use tictactoe_engine::{MatchState, Seat};
use tictactoe_server::{CLEAR_SCREEN, Config, Session, SessionError, SessionSummary};

async fn play(input: &str, config: Config) -> (Result<SessionSummary, SessionError>, String) {
    play_bytes(input.as_bytes(), config).await
}

async fn play_bytes(
    input: &[u8],
    config: Config,
) -> (Result<SessionSummary, SessionError>, String) {
    let mut session = Session::new(input, Vec::new(), config);
    let result = session.run().await;
    let (_, output) = session.into_parts();
    (result, String::from_utf8(output).expect("utf-8 output"))
}

fn lines(items: &[&str]) -> String {
    items.iter().map(|item| format!("{item}\n")).collect()
}

#[tokio::test]
async fn test_win_then_replay_then_tie() {
    let input = lines(&[
        "Ann", "X", "Bob", // setup
        "0", "3", "1", "4", "2", // Ann takes the top row
        "y", // replay on a fresh board
        "0", "1", "2", "4", "3", "5", "7", "6", "8", // tie
        "n",
    ]);
    let (result, output) = play(&input, Config::quiet()).await;

    let summary = result.expect("session completes");
    assert_eq!(
        summary.outcomes(),
        &[MatchState::WinnerDeclared(Seat::First), MatchState::TieDeclared]
    );
    assert!(output.contains("Congrats Ann Wins\n"));
    assert!(output.contains("Match Got Tie\n"));
    assert!(output.contains("Name: Ann Choice: X\nName: Bob Choice: O\n"));
    // Position 0 was accepted again in the second match, so the board was reset.
    assert!(!output.contains("Invalid Position"));
    assert_eq!(output.matches("Do you want to Play Again [y/n]: ").count(), 2);
}

#[tokio::test]
async fn test_invalid_positions_reprompt() {
    let input = lines(&[
        "Ann", "O", "Bob", //
        "abc", "9", "-1", "4", // three bad tries, then centre
        "4", "0", // Bob hits an occupied cell first
        "2", "1", "6", // Ann completes the anti-diagonal
        "no",
    ]);
    let (result, output) = play(&input, Config::quiet()).await;

    assert_eq!(result.unwrap().matches(), 1);
    assert_eq!(
        output
            .matches("Invalid Position, Enter Correct Marker Position (Ann): ")
            .count(),
        3
    );
    assert_eq!(
        output
            .matches("Invalid Position, Enter Correct Marker Position (Bob): ")
            .count(),
        1
    );
    assert!(output.contains("Congrats Ann Wins\n"));
}

#[tokio::test]
async fn test_prompt_order() {
    let input = lines(&["Ann", "X", "Bob", "0", "3", "1", "4", "2", "n"]);
    let (_, output) = play(&input, Config::quiet()).await;

    let order = [
        "Enter Player1 Name: ",
        "Enter Marker Choice For Ann [X/O]: ",
        "Enter Player2 Name: ",
        "Enter Marker Position (Ann): ",
        "Enter Marker Position (Bob): ",
        "Congrats Ann Wins",
        "Do you want to Play Again [y/n]: ",
    ];
    let mut from = 0;
    for prompt in order {
        let at = output[from..]
            .find(prompt)
            .unwrap_or_else(|| panic!("missing {prompt:?} after byte {from}"));
        from += at + prompt.len();
    }
}

#[tokio::test]
async fn test_board_cleared_before_each_render() {
    let input = lines(&["Ann", "X", "Bob", "0", "3", "1", "4", "2", "n"]);
    let (_, output) = play(&input, Config::quiet().with_clear_screen(true)).await;

    // Five turns plus the final board.
    assert_eq!(output.matches(CLEAR_SCREEN).count(), 6);
}

#[tokio::test]
async fn test_splash_precedes_setup() {
    let input = lines(&["Ann", "X", "Bob", "0", "3", "1", "4", "2", "n"]);
    let (_, output) = play(&input, Config::quiet().with_splash(true)).await;

    assert!(output.starts_with("TIC TAC TOE LOADING ...."));
    let started = output.find("Game Started").unwrap();
    assert!(started < output.find("Enter Player1 Name: ").unwrap());
}

#[tokio::test]
async fn test_disconnect_mid_match() {
    let input = lines(&["Ann", "X", "Bob", "0"]);
    let (result, output) = play(&input, Config::quiet()).await;

    assert!(matches!(result, Err(SessionError::Disconnected)));
    assert!(output.ends_with("Enter Marker Position (Bob): "));
}

#[tokio::test]
async fn test_non_utf8_input_is_treated_as_text() {
    // Latin-1 name, then a stray byte where a position is expected.
    let input = b"Jos\xe9\nX\nBob\n\xff\n0\n3\n1\n4\n2\nn\n";
    let (result, output) = play_bytes(input, Config::quiet()).await;

    assert_eq!(result.expect("session completes").matches(), 1);
    assert!(output.contains("Enter Marker Choice For Jos\u{fffd} [X/O]: "));
    assert_eq!(
        output
            .matches("Invalid Position, Enter Correct Marker Position (Jos\u{fffd}): ")
            .count(),
        1
    );
    assert!(output.contains("Congrats Jos\u{fffd} Wins\n"));
}
