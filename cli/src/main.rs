mod list;
mod prompt;
mod tui;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use todolist_core::{
    resolve_id, short_id, Confirmation, FileTaskStore, Filter, StoreConfig, TaskStore, TodoController,
};
use tracing_subscriber::EnvFilter;

use crate::prompt::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "A small todo list kept in a JSON slot", long_about = None)]
struct Cli {
    /// Directory holding the task list (default: ~/.todolist)
    #[arg(long, global = true, env = "TODOLIST_DIR")]
    data_dir: Option<PathBuf>,
    /// Slot key naming the task list file inside the data directory
    #[arg(long, global = true, env = "TODOLIST_SLOT")]
    slot: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a new task (usage: add Buy milk)
    Add {
        /// Task text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List tasks
    List {
        /// One of: all, active, completed
        #[arg(short, long, default_value = "all")]
        filter: Filter,
    },
    /// Mark a task completed, or active again
    Toggle {
        /// Task id or a unique prefix of it
        id: String,
    },
    /// Remove a task after confirmation
    Remove {
        /// Task id or a unique prefix of it
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn init_logging(config: &StoreConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if to_file {
        // The TUI owns the terminal, so logs go next to the task list.
        std::fs::create_dir_all(&config.data_dir)?;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())
            .with_context(|| format!("Could not open {}", config.log_path().display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(log_file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = StoreConfig::resolve(cli.data_dir, cli.slot)?;
    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(&config, tui_mode)?;

    let store = FileTaskStore::new(&config)?;
    tracing::debug!(path = %store.path().display(), "using task list");

    match cli.command {
        Some(Commands::Add { args }) => {
            let mut controller = TodoController::new(store, ConsoleNotifier::stdio());
            match controller.submit(&args.join(" "))? {
                Some(task) => println!("  ID: {}", short_id(&task.id)),
                None => eprintln!("Nothing added: task text is empty."),
            }
        }
        Some(Commands::List { filter }) => {
            let mut controller = TodoController::new(store, ConsoleNotifier::stdio());
            controller.select_filter(filter);
            list::show_list(&controller.filter_bar(), controller.rows());
        }
        Some(Commands::Toggle { id }) => {
            let id = resolve_id(&id, &store.load())?;
            let mut controller = TodoController::new(store, ConsoleNotifier::stdio());
            if controller.toggle(id)? {
                let state = controller
                    .rows()
                    .iter()
                    .find(|r| r.id == id)
                    .map(|r| if r.completed { "completed" } else { "active" })
                    .unwrap_or("updated");
                println!("Task {} marked {}.", short_id(&id), state);
            }
        }
        Some(Commands::Remove { id, yes }) => {
            let id = resolve_id(&id, &store.load())?;
            let mut controller = TodoController::new(store, ConsoleNotifier::stdio());
            let removed = if yes {
                match controller.request_delete(id) {
                    Some(pending) => controller.resolve_delete(pending, Confirmation::Confirmed)?,
                    None => false,
                }
            } else {
                controller.delete(id)?
            };
            if !removed {
                println!("Nothing removed.");
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(store)?;
        }
    }
    Ok(())
}
