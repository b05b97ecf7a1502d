//! Scripted sessions driven through in-memory buffers.

use std::io::{self, Cursor};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use super::*;
use crate::input::INVALID_NUMBER_MESSAGE;

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn session(input: &str) -> TestSession {
    Session::new(Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    ))
}

/// Run a script to completion, returning the transcript and the final history.
fn run_script(input: &str) -> (String, History) {
    let mut s = session(input);
    s.run().unwrap();
    let history = s.history().clone();
    let (_, out) = s.into_console().into_parts();
    (String::from_utf8(out).unwrap(), history)
}

fn lines(history: &History) -> Vec<String> {
    history.iter().map(ToString::to_string).collect()
}

#[test]
fn addition_is_printed_and_recorded() {
    let (out, history) = run_script("1\n2\n3\n0\n");
    assert!(out.contains("Result: 2 + 3 = 5\n"));
    assert_eq!(lines(&history), ["2 + 3 = 5"]);
}

#[test]
fn divide_by_zero_reports_and_keeps_history_empty() {
    let (out, history) = run_script("4\n5\n0\n0\n");
    assert!(out.contains("Error: Cannot divide by zero.\n"));
    assert!(!out.contains("Result:"));
    assert!(history.is_empty());
}

#[test]
fn empty_history_message() {
    let (out, history) = run_script("5\n0\n");
    assert!(out.contains("No history yet.\n"));
    assert!(history.is_empty());
}

#[test]
fn whole_real_result_is_normalized() {
    let (out, history) = run_script("3\n2.5\n4\n0\n");
    assert!(out.contains("Result: 2.5 * 4 = 10\n"));
    assert_eq!(history.iter().next().unwrap().result, Number::Int(10));
}

#[test]
fn fractional_division_result() {
    let (out, _) = run_script("4\n7\n2\n0\n");
    assert!(out.contains("Result: 7 / 2 = 3.5\n"));
}

#[test]
fn cancel_at_first_operand_returns_to_menu() {
    let (out, history) = run_script("1\nq\n0\n");
    assert!(history.is_empty());
    assert!(!out.contains(SECOND_OPERAND_PROMPT));
    assert_eq!(out.matches(CHOICE_PROMPT).count(), 2);
}

#[test]
fn cancel_at_second_operand_discards_first() {
    let (out, history) = run_script("2\n7\nQUIT\n0\n");
    assert!(history.is_empty());
    assert!(out.contains(SECOND_OPERAND_PROMPT));
    assert!(!out.contains("Result:"));
}

#[test]
fn invalid_operands_are_retried() {
    let (out, history) = run_script("1\nabc\n\n   \n4\n5\n0\n");
    assert_eq!(out.matches(INVALID_NUMBER_MESSAGE).count(), 3);
    assert_eq!(lines(&history), ["4 + 5 = 9"]);
}

#[test]
fn invalid_menu_option_stays_in_menu() {
    let (out, history) = run_script("9\nadd\n0\n");
    assert_eq!(out.matches(INVALID_OPTION).count(), 2);
    assert_eq!(out.matches(CHOICE_PROMPT).count(), 3);
    assert!(history.is_empty());
}

#[test]
fn history_lists_entries_in_order() {
    let (out, history) = run_script("1\n1\n1\n2\n10\n4\n5\n0\n");
    assert_eq!(history.len(), 2);
    assert!(out.contains("--- History ---\n1. 1 + 1 = 2\n2. 10 - 4 = 6\n"));
}

#[test]
fn history_counts_only_successful_computations() {
    // success, cancel, divide by zero, success
    let script = "3\n3\n3\n1\nq\n4\n1\n0\n2\n1\n0.5\n0\n";
    let (_, history) = run_script(script);
    assert_eq!(lines(&history), ["3 * 3 = 9", "1 - 0.5 = 0.5"]);
}

#[test]
fn exit_prints_farewell() {
    let (out, _) = run_script("0\n");
    assert!(out.ends_with(&format!("{CHOICE_PROMPT}{FAREWELL}\n")));
}

#[test]
fn end_of_input_at_menu_exits() {
    let (out, history) = run_script("");
    assert!(out.contains(FAREWELL));
    assert!(history.is_empty());
}

#[test]
fn end_of_input_while_collecting_operands_exits_cleanly() {
    let (out, history) = run_script("1\n4");
    assert!(out.contains(SECOND_OPERAND_PROMPT));
    assert!(out.contains(FAREWELL));
    assert!(history.is_empty());
}

#[test]
fn custom_title_appears_in_banner() {
    let mut s = session("0\n").with_title("Pocket Calc");
    s.run().unwrap();
    let (_, out) = s.into_console().into_parts();
    assert!(String::from_utf8(out).unwrap().contains("==== Pocket Calc ====\n"));
}

#[test]
fn compute_step_failure_returns_to_menu() {
    let mut s = session("");
    let next = s
        .step(State::Compute(Operation::Divide, Number::Int(1), Number::Int(0)))
        .unwrap();
    assert_eq!(next, State::Menu);
    assert!(s.history().is_empty());
}

#[test]
fn operand_steps_carry_values_forward() {
    let mut s = session("6\n3\n");
    let state = s.step(State::CollectOperandA(Operation::Divide)).unwrap();
    assert_eq!(state, State::CollectOperandB(Operation::Divide, Number::Int(6)));
    let state = s.step(state).unwrap();
    assert_eq!(
        state,
        State::Compute(Operation::Divide, Number::Int(6), Number::Int(3))
    );
    assert_eq!(s.step(state).unwrap(), State::Menu);
    assert_eq!(lines(s.history()), ["6 / 3 = 2"]);
}

#[test]
fn exit_is_terminal() {
    let mut s = session("1\n2\n3\n");
    assert_eq!(s.step(State::Exit).unwrap(), State::Exit);
    assert!(s.history().is_empty());
}

/// Shared buffer collecting formatted log output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a script with a subscriber capped at `level`, returning the log text.
fn logs_at(level: Level, input: &str) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || run_script(input));
    logs.text()
}

#[test]
fn divide_by_zero_is_quiet_at_warn_level() {
    let logs = logs_at(Level::WARN, "4\n5\n0\n0\n");
    assert!(logs.is_empty(), "unexpected log output: {logs}");
}

#[test]
fn divide_by_zero_is_logged_at_debug_level() {
    let logs = logs_at(Level::DEBUG, "4\n5\n0\n0\n");
    assert!(logs.contains("computation failed"));
    assert!(logs.contains("Cannot divide by zero."));
}
