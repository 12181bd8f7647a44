use better_rest::BEDTIME_FAILURE_MESSAGE;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_better-rest"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn successful_estimate_exits_zero() {
    let output = run(&["--wake", "07:00", "--clock", "12h"]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("Your ideal bedtime is\n"));
    assert!(text.trim_end().ends_with("AM") || text.trim_end().ends_with("PM"));
}

#[test]
fn missing_model_file_exits_one_with_fixed_message() {
    let output = run(&["--wake", "07:00", "--model", "/nonexistent/model.toml"]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("Error\n"));
    assert!(text.contains(BEDTIME_FAILURE_MESSAGE));
}

#[test]
fn out_of_range_sleep_exits_two() {
    let output = run(&["--sleep", "3"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_config_file_exits_two() {
    let output = run(&["--config", "/nonexistent/better-rest.toml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn json_output_carries_alert_and_result() {
    let output = run(&["--wake", "07:00", "--clock", "24h", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["alert"]["title"], "Your ideal bedtime is");
    assert_eq!(value["alert"]["showing"], true);
    assert_eq!(value["result"]["status"], "bed_time");
    assert_eq!(value["alert"]["message"], value["result"]["text"]);
    assert_eq!(value["inputs"]["wake_up"], "07:00");
    assert_eq!(value["inputs"]["coffee_cups"], 1);
}

#[test]
fn json_output_on_failure() {
    let output = run(&["--json", "--model", "/nonexistent/model.toml"]);
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["alert"]["title"], "Error");
    assert_eq!(value["result"]["status"], "failure");
    assert_eq!(value["result"]["message"], BEDTIME_FAILURE_MESSAGE);
}
