use clap::{Parser, Subcommand};
use todo_core::config::{BASE_URL_ENV, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "List and create todos on a todo service")]
pub struct Cli {
    /// Base URL of the todo service
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every todo on the server
    List,
    /// Create one todo and print it
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Load the list, then keep prompting for new todos (default)
    Session,
}

impl Cli {
    pub fn selected(&self) -> Command {
        self.command.clone().unwrap_or(Command::Session)
    }
}
