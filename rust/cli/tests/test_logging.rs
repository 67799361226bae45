mod helpers;

use advisor_cli::run_with_input;
use helpers::TestLogSubscriber;
use std::io::Cursor;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

fn captured(input: &str) -> (i32, TestLogSubscriber) {
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
    let code = tracing::subscriber::with_default(registry, || {
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_with_input(
            ["advisor", "menu", "--engine", "passive"],
            &mut stdin,
            &mut out,
            &mut err,
        )
    });
    (code, subscriber)
}

#[test]
fn hand_logs_each_street_and_decision() {
    let input = "1\nAH\nKS\n100\n1\n50\n1\n2\n2\nQH\nQD\n100\n2\n2D\n7C\n9H\nTS\n3C\n4\n";
    let (code, logs) = captured(input);
    assert_eq!(code, 0);

    assert_eq!(logs.with_message("hand started").len(), 1);
    assert_eq!(logs.with_message("street dealt").len(), 3);
    let decisions = logs.with_message("decision");
    assert_eq!(decisions.len(), 4);
    assert!(decisions.iter().all(|e| e.level == Level::INFO));
    assert_eq!(decisions[0].field("street"), Some("Pre-flop"));
    assert_eq!(decisions[3].field("action"), Some("CALL"));
    assert_eq!(logs.with_message("hand complete").len(), 1);
}

#[test]
fn inverted_blinds_are_accepted_with_a_warning() {
    let input = "1\nAH\nKS\n100\n1\n50\n5\n2\n4\n";
    let (code, logs) = captured(input);
    assert_eq!(code, 0);
    let warnings = logs.with_message("small blind exceeds big blind");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, Level::WARN);
}

#[test]
fn rejected_input_is_logged_at_debug() {
    let (code, logs) = captured("zero\n4\n");
    assert_eq!(code, 0);
    let rejected = logs.with_message("input rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].level, Level::DEBUG);
    assert_eq!(rejected[0].field("input"), Some("zero"));
}
