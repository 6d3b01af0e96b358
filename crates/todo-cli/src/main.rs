use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use todo_core::action::{self, ActionFlags};
use todo_core::config;
use todo_core::dispatch::dispatch;
use todo_core::prompt::Prompt;
use todo_core::storage::TodoFile;

const LOG_ENV: &str = "TODO_LOG";

const ACTIONS_HELP: &str = "\
Actions:
  desc...          add new todo
  -c               print also completed todos
  -c id...         mark specified todos as complete
  -i id...         mark specified todos as incomplete
  -e id desc...    edit description of specified todo
  -e id /sub/rep/  replace substring sub with rep in description of specified todo
  -s id id         swap position of specified todos
  -r               remove completed todos
  -r id...         remove specified todos
  -h               show usage message";

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "command line todo list",
    override_usage = "todo [-c|-i|-e|-s|-r|-h] [id...] [desc...]",
    disable_help_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Print completed todos too, or mark ids complete
    #[arg(short = 'c')]
    complete: bool,
    /// Mark ids incomplete
    #[arg(short = 'i')]
    incomplete: bool,
    /// Edit a description, or substitute with /sub/rep/
    #[arg(short = 'e')]
    edit: bool,
    /// Swap two todos
    #[arg(short = 's')]
    swap: bool,
    /// Remove ids, or all completed todos
    #[arg(short = 'r')]
    remove: bool,
    /// Todo file (overrides TODO_FILE and ~/.todo.toml)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,
    /// Print help
    #[arg(short = 'h', long = "help")]
    help: bool,
    /// Ids and description words
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    fn flags(&self) -> ActionFlags {
        ActionFlags {
            complete: self.complete,
            incomplete: self.incomplete,
            edit: self.edit,
            swap: self.swap,
            remove: self.remove,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.help {
        Cli::command()
            .after_help(help_footer(cli.file.as_deref()))
            .print_help()?;
        return Ok(());
    }

    let action = action::resolve(cli.flags(), cli.args.as_slice())?;
    let file = TodoFile::new(config::resolve_todo_path(cli.file.as_deref())?);
    let mut out = io::stdout();
    let mut prompt = Prompt::terminal();
    dispatch(&action, &file, &mut out, &mut prompt)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();
}

fn help_footer(file: Option<&Path>) -> String {
    match config::resolve_todo_path(file) {
        Ok(path) => format!("{ACTIONS_HELP}\n\ntodos are stored at {}", path.display()),
        Err(_) => ACTIONS_HELP.to_string(),
    }
}
