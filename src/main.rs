//! Purpose: `rollcall` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, prints roster output on stdout.
//! Invariants: Commands emit stable stdout lines (text or JSONL by flags).
//! Invariants: Diagnostics go to stderr; stdout carries only roster output.
//! Invariants: Process exit code is derived from `core::error::to_exit_code`.
use std::io::{self, IsTerminal};

use clap::{error::ErrorKind as ClapErrorKind, CommandFactory, Parser, Subcommand};
use clap_complete::aot::Shell;
use tracing_subscriber::EnvFilter;

mod demo;
mod script;

use rollcall::core::error::{to_exit_code, Error, ErrorKind};
use script::{ErrorPolicy, OutputFormat, ScriptConfig};

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(exit_code);
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Run `rollcall --help` for usage."));
            }
        },
    };

    match cli.command {
        Command::Demo => {
            demo::run();
            Ok(0)
        }
        Command::Script { format, on_error } => {
            let config = ScriptConfig {
                format,
                errors: on_error,
            };
            if io::stdin().is_terminal() {
                tracing::info!("reading operations from the terminal; close with ctrl-d");
            }
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            let outcome = script::run_script(stdin.lock(), config, &mut stdout)?;
            tracing::debug!(
                applied = outcome.applied,
                skipped = outcome.skipped,
                "script finished"
            );
            Ok(0)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "rollcall", &mut io::stdout());
            Ok(0)
        }
    }
}

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about = "In-memory student roster with a line-oriented console contract",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"The roster lives in memory for the life of one invocation. Records are
name/age/major; removal matches names case-insensitively and deletes only
the first match.

Mental model:
  - `demo` runs the fixed add/remove/list walkthrough
  - `script` applies JSON operations from stdin (one per line)
"#,
    after_help = r#"EXAMPLES
  $ rollcall demo
  $ printf '%s\n' '{"op":"add","name":"Alice","age":20,"major":"Computer Science"}' \
      '{"op":"list"}' | rollcall script
  $ rollcall script --format jsonl --on-error skip < ops.jsonl

  $ rollcall <command> --help
  https://github.com/sandover/rollcall"#,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Run the fixed demonstration sequence")]
    Demo,
    #[command(about = "Apply JSON roster operations from stdin, one per line")]
    Script {
        #[arg(
            long,
            default_value = "text",
            value_enum,
            help = "Output for applied operations: text|jsonl"
        )]
        format: OutputFormat,
        #[arg(
            long = "on-error",
            default_value = "stop",
            value_enum,
            help = "Malformed line policy: stop|skip"
        )]
        on_error: ErrorPolicy,
    },
    #[command(about = "Generate shell completions")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .trim()
        .to_string()
}

fn emit_error(err: &Error) {
    eprintln!("error: {}", error_message(err));
    if let Some(hint) = err.hint() {
        eprintln!("hint: {hint}");
    }
}

fn error_message(err: &Error) -> String {
    let mut message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?} error", err.kind()));
    if let Some(source) = std::error::Error::source(err) {
        message.push_str(&format!(" ({source})"));
    }
    message
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
