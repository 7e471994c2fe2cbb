//! Command-line front end for the SDT explainer
//!
//! - `sdt explain <EXPR>` prints the worked example for one expression
//! - `sdt analyze -g <PRODUCTION>... -r <RULE>...` classifies semantic rules
//! - `sdt repl` runs an interactive session over both tools
//!
//! Rendered panels go to stdout; messages and logs go to stderr. Logging is
//! controlled by `SDT_LOG` (e.g. `SDT_LOG=debug`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use sdt::ui::{self, Event, Panel, RenderOptions, Session, SessionConfig, Update};
use sdt::{ExplainerSolution, RuleAnalysisReport, input};
use tracing_subscriber::EnvFilter;

/// Syntax-directed translation explainer
#[derive(Parser, Debug)]
#[command(name = "sdt")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    display: DisplayArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Spaces before each card body line
    #[arg(long, global = true, default_value_t = 2)]
    indent: usize,

    /// Omit the "Understanding the Results" card
    #[arg(long, global = true)]
    no_guide: bool,

    /// How long REPL messages stay visible, in milliseconds
    #[arg(long, global = true, default_value_t = 3000)]
    message_ms: u64,
}

impl DisplayArgs {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            message_duration: Duration::from_millis(self.message_ms),
            render: RenderOptions {
                indent: self.indent,
                show_guide: !self.no_guide,
                ..RenderOptions::default()
            },
            ..SessionConfig::default()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show grammar, parse tree, semantic rules and result for an expression
    Explain {
        /// Arithmetic expression, e.g. "2+3*4"
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },

    /// Classify semantic rules as S-attributed or L-attributed
    Analyze {
        /// Grammar production (repeatable)
        #[arg(short = 'g', long = "production")]
        productions: Vec<String>,

        /// Semantic rule (repeatable)
        #[arg(short = 'r', long = "rule")]
        rules: Vec<String>,

        /// File with one production per line
        #[arg(long)]
        grammar_file: Option<PathBuf>,

        /// File with one semantic rule per line
        #[arg(long)]
        rules_file: Option<PathBuf>,
    },

    /// Interactive session; type `:help` for commands
    Repl,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SDT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.display.session_config();

    let result = match cli.command {
        Command::Explain { expression } => explain(&expression.join(" "), &config.render),
        Command::Analyze {
            productions,
            rules,
            grammar_file,
            rules_file,
        } => read_field(productions, grammar_file.as_ref())
            .and_then(|grammar| Ok((grammar, read_field(rules, rules_file.as_ref())?)))
            .map_err(|err| err.to_string())
            .and_then(|(grammar, rules)| analyze(&grammar, &rules, &config.render)),
        Command::Repl => repl(config).map_err(|err| err.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("[error] {message}");
            ExitCode::FAILURE
        }
    }
}

fn explain(raw: &str, options: &RenderOptions) -> Result<(), String> {
    let expression = input::expression(raw).map_err(|err| err.to_string())?;
    let solution = ExplainerSolution::generate(expression);
    println!("{}", ui::render_expression_results(&solution, options));
    Ok(())
}

fn analyze(grammar: &str, rules: &str, options: &RenderOptions) -> Result<(), String> {
    let report = RuleAnalysisReport::from_fields(grammar, rules).map_err(|err| err.to_string())?;
    println!("{}", ui::render_rules_results(&report, options));
    Ok(())
}

/// Combine repeated flag values and an optional file into one multi-line field
fn read_field(lines: Vec<String>, file: Option<&PathBuf>) -> io::Result<String> {
    let mut field = String::new();
    if let Some(path) = file {
        field = std::fs::read_to_string(path)?;
    }
    for line in lines {
        input::append_line(&mut field, &line);
    }
    Ok(field)
}

const REPL_HELP: &str = "\
commands:
  <expression>          evaluate an expression (expression panel)
  :tool expression|rules show a panel
  :grammar <production> add a grammar production
  :rule <rule>          add a semantic rule
  :analyze              analyze the entered rules
  :clear grammar|rules  empty a field
  :fields               show the current field contents
  :messages             list visible messages
  :help                 show this help
  :quit                 leave";

fn repl(config: SessionConfig) -> io::Result<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    eprintln!("{REPL_HELP}");
    loop {
        write!(stdout, "{}> ", session.panel().map_or("sdt", |p| p.as_str()))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        let now = Instant::now();

        let event = match line.split_once(' ').unwrap_or((line, "")) {
            ("", _) => continue,
            (":quit" | ":q", _) => return Ok(()),
            (":help", _) => {
                eprintln!("{REPL_HELP}");
                continue;
            }
            (":fields", _) => {
                let fields = session.fields();
                println!("expression: {}", fields.expression);
                println!("grammar:\n{}", fields.grammar);
                println!("rules:\n{}", fields.rules);
                continue;
            }
            (":messages", _) => {
                for (message, phase) in session.messages(now) {
                    eprintln!("{} ({phase:?})", ui::render_message(message));
                }
                continue;
            }
            (":tool", name) => match name.parse::<Panel>() {
                Ok(panel) => Event::ShowPanel(panel),
                Err(err) => {
                    eprintln!("[error] {err}");
                    continue;
                }
            },
            (":grammar", text) => Event::AddGrammarLine(text.to_string()),
            (":rule", text) => Event::AddRuleLine(text.to_string()),
            (":clear", "grammar") => Event::SetGrammar(String::new()),
            (":clear", "rules") => Event::SetRules(String::new()),
            (":analyze", _) => {
                show(&mut session, Panel::Rules, now);
                Event::AnalyzeRules
            }
            (command, _) if command.starts_with(':') => {
                eprintln!("[error] unknown command '{command}' (try :help)");
                continue;
            }
            _ => {
                show(&mut session, Panel::Expression, now);
                session.handle(Event::SetExpression(line.to_string()), now);
                Event::SubmitExpression
            }
        };

        match session.handle(event, now) {
            Update::Rendered(panel) | Update::PanelShown(panel) => {
                if let Some(output) = session.output(panel) {
                    println!("{output}");
                }
            }
            Update::Rejected(err) => eprintln!("[error] {err}"),
            Update::FieldChanged | Update::Ignored => {}
        }
    }
}

/// Switch panels if a different one is visible
fn show(session: &mut Session, panel: Panel, now: Instant) {
    if session.panel() != Some(panel) {
        session.handle(Event::ShowPanel(panel), now);
        let note = session.notify(format!("Showing {}", panel.title()), now);
        eprintln!("{}", ui::render_message(&note));
    }
}
