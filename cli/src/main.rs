mod cli;
mod terminal;
mod transport;

use std::io;

use anyhow::Context;
use clap::Parser;
use todo_core::{ClientConfig, FormFields, TodoApp, TodoClient, TodoForm, TodoTable};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use terminal::{prompt, PrintNotifier};
use transport::UreqTransport;

type App = TodoApp<UreqTransport, TodoTable, FormFields, PrintNotifier>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.base_url.clone());
    debug!(base_url = %config.base_url, command = ?cli.selected(), "starting");

    match cli.selected() {
        Command::List => list(&config).await,
        Command::Add { title, description } => add(&config, FormFields::new(title, description)).await,
        Command::Session => session(&config).await,
    }
}

fn app(config: &ClientConfig, form: FormFields) -> App {
    TodoApp::new(
        TodoClient::from_config(config),
        UreqTransport::default(),
        TodoTable::new(),
        form,
        PrintNotifier,
    )
}

async fn list(config: &ClientConfig) -> anyhow::Result<()> {
    let app = app(config, FormFields::default());
    app.fetch_todos()
        .await
        .with_context(|| format!("could not load todos from {}", config.base_url))?;
    print!("{}", app.view().render_text());
    Ok(())
}

async fn add(config: &ClientConfig, form: FormFields) -> anyhow::Result<()> {
    let app = app(config, form);
    app.submit_todo()
        .await
        .with_context(|| format!("could not create todo on {}", config.base_url))?;
    print!("{}", app.view().render_text());
    Ok(())
}

/// The page lifecycle on a terminal: one load, then a form submission per
/// pair of answers until stdin closes.
async fn session(config: &ClientConfig) -> anyhow::Result<()> {
    let app = app(config, FormFields::default());
    if app.fetch_todos().await.is_err() {
        warn!("starting with an empty table");
    }
    print!("{}", app.view().render_text());

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    loop {
        let Some(title) = prompt(&mut stdin, &mut stdout, "Title", &app.form().title())? else {
            debug!("input closed");
            break;
        };
        app.form().set_title(title);
        let Some(description) = prompt(&mut stdin, &mut stdout, "Description", &app.form().description())? else {
            break;
        };
        app.form().set_description(description);

        if app.submit_todo().await.is_ok() {
            print!("{}", app.view().render_text());
        }
    }
    Ok(())
}
