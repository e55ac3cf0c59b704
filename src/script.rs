//! Purpose: Apply line-delimited JSON roster operations read from stdin.
//! Exports: `Op`, `ErrorPolicy`, `OutputFormat`, `ScriptConfig`, `ScriptOutcome`, `run_script`.
//! Role: Input engine used by the CLI; isolates stream handling from main.
//! Invariants: One operation per line; blank lines are ignored.
//! Invariants: Skip mode only continues at line boundaries.
//! Invariants: All stdout output goes through `render` or `receipt`.
use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, warn};

use rollcall::core::error::{Error, ErrorKind};
use rollcall::core::record::Record;
use rollcall::core::roster::Roster;
use rollcall::receipt::{receipt_line, Receipt};
use rollcall::render;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Op {
    Add {
        name: String,
        age: i32,
        major: String,
    },
    Remove {
        name: String,
    },
    List,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ErrorPolicy {
    Stop,
    Skip,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Jsonl,
}

#[derive(Copy, Clone, Debug)]
pub struct ScriptConfig {
    pub format: OutputFormat,
    pub errors: ErrorPolicy,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ScriptOutcome {
    pub applied: u64,
    pub skipped: u64,
}

pub fn run_script<R, W>(
    reader: R,
    config: ScriptConfig,
    out: &mut W,
) -> Result<ScriptOutcome, Error>
where
    R: BufRead,
    W: Write,
{
    let mut roster = Roster::new();
    let mut outcome = ScriptOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|err| io_error(err, "failed to read stdin"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let op = match serde_json::from_str::<Op>(trimmed) {
            Ok(op) => op,
            Err(parse_err) => match config.errors {
                ErrorPolicy::Stop => {
                    return Err(Error::new(ErrorKind::Usage)
                        .with_message(format!("line {line_no}: {parse_err}"))
                        .with_hint("Use --on-error skip to continue past malformed lines."));
                }
                ErrorPolicy::Skip => {
                    outcome.skipped += 1;
                    warn!(line = line_no, error = %parse_err, "skipped malformed line");
                    continue;
                }
            },
        };

        debug!(line = line_no, ?op, "applying operation");
        apply(&mut roster, op, config.format, out)?;
        outcome.applied += 1;
    }

    Ok(outcome)
}

fn apply<W: Write>(
    roster: &mut Roster,
    op: Op,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), Error> {
    match op {
        Op::Add { name, age, major } => {
            let record = Record::new(name, age, major);
            match format {
                OutputFormat::Text => emit_line(out, &render::added_line(&record.name))?,
                OutputFormat::Jsonl => {
                    emit_line(out, &receipt_line(&Receipt::add(record.clone()))?)?
                }
            }
            roster.add(record);
        }
        Op::Remove { name } => {
            let outcome = roster.remove(&name);
            match format {
                OutputFormat::Text => emit_line(out, &render::remove_line(&outcome))?,
                OutputFormat::Jsonl => emit_line(
                    out,
                    &receipt_line(&Receipt::remove(name, outcome.removed()))?,
                )?,
            }
        }
        Op::List => match format {
            OutputFormat::Text => {
                for line in render::listing_lines(roster.records()) {
                    emit_line(out, &line)?;
                }
            }
            OutputFormat::Jsonl => emit_line(out, &receipt_line(&Receipt::list(roster.records()))?)?,
        },
    }
    Ok(())
}

fn emit_line<W: Write>(out: &mut W, line: &str) -> Result<(), Error> {
    writeln!(out, "{line}").map_err(|err| io_error(err, "failed to write output"))
}

fn io_error(err: io::Error, message: &str) -> Error {
    Error::new(ErrorKind::Io)
        .with_message(message)
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::{run_script, ErrorPolicy, OutputFormat, ScriptConfig, ScriptOutcome};
    use rollcall::core::error::{Error, ErrorKind};
    use serde_json::Value;
    use std::io::Cursor;

    fn run(input: &str, config: ScriptConfig) -> (Result<ScriptOutcome, Error>, String) {
        let mut out = Vec::new();
        let result = run_script(Cursor::new(input.as_bytes()), config, &mut out);
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    fn text_config(errors: ErrorPolicy) -> ScriptConfig {
        ScriptConfig {
            format: OutputFormat::Text,
            errors,
        }
    }

    #[test]
    fn text_flow_prints_contract_lines() {
        let input = concat!(
            r#"{"op":"add","name":"Alice","age":20,"major":"Computer Science"}"#,
            "\n",
            r#"{"op":"remove","name":"alice"}"#,
            "\n",
            r#"{"op":"list"}"#,
            "\n",
        );
        let (result, output) = run(input, text_config(ErrorPolicy::Stop));
        let outcome = result.expect("script");
        assert_eq!(outcome.applied, 3);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(
            output,
            "Student Alice added.\nStudent alice removed.\nNo students found.\n"
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let input = "\n  \n{\"op\":\"list\"}\n\n";
        let (result, output) = run(input, text_config(ErrorPolicy::Stop));
        assert_eq!(result.expect("script").applied, 1);
        assert_eq!(output, "No students found.\n");
    }

    #[test]
    fn stop_policy_fails_on_the_first_malformed_line() {
        let input = concat!(
            r#"{"op":"add","name":"Alice","age":20,"major":"Computer Science"}"#,
            "\n",
            "not json\n",
            r#"{"op":"list"}"#,
            "\n",
        );
        let (result, output) = run(input, text_config(ErrorPolicy::Stop));
        let err = result.expect_err("expected usage error");
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(err.message().expect("message").starts_with("line 2:"));
        // The add before the malformed line was already emitted.
        assert_eq!(output, "Student Alice added.\n");
    }

    #[test]
    fn skip_policy_counts_and_continues() {
        let input = concat!(
            "not json\n",
            r#"{"op":"add","name":"Bob","age":22,"major":"Mathematics"}"#,
            "\n",
            r#"{"op":"list"}"#,
            "\n",
        );
        let (result, output) = run(input, text_config(ErrorPolicy::Skip));
        let outcome = result.expect("script");
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(
            output,
            "Student Bob added.\nList of students:\nName: Bob, Age: 22, Major: Mathematics\n"
        );
    }

    #[test]
    fn jsonl_receipts_follow_the_schema() {
        let input = concat!(
            r#"{"op":"add","name":"Alice","age":20,"major":"Computer Science"}"#,
            "\n",
            r#"{"op":"remove","name":"David"}"#,
            "\n",
            r#"{"op":"list"}"#,
            "\n",
        );
        let config = ScriptConfig {
            format: OutputFormat::Jsonl,
            errors: ErrorPolicy::Stop,
        };
        let (result, output) = run(input, config);
        assert_eq!(result.expect("script").applied, 3);

        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json"))
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].get("kind").and_then(Value::as_str), Some("add"));
        assert_eq!(lines[1].get("kind").and_then(Value::as_str), Some("remove"));
        assert_eq!(lines[1].get("removed").and_then(Value::as_bool), Some(false));
        assert_eq!(lines[2].get("kind").and_then(Value::as_str), Some("list"));
        assert_eq!(lines[2].get("count").and_then(Value::as_u64), Some(1));
    }
}
