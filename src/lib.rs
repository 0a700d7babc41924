// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use application::{GraphqlTransport, NotesClient, OperationOutcome};
use infrastructure::config::default_config_path;
use infrastructure::{Config, HttpTransport};
use ports::TextPresenter;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting quicknotes with arguments");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Command::InitConfig { force } = args.command {
        return init_config(args.config.as_deref(), force, &mut out);
    }

    let config = Config::load_or_default(args.config.as_deref())?;
    let endpoint = resolve_endpoint(args.endpoint.as_deref(), &config);
    let transport = HttpTransport::new(&endpoint, config.timeout())?;
    info!(endpoint = transport.endpoint(), "Using GraphQL endpoint");
    let mut client = NotesClient::new(transport);

    execute(&mut client, &args.command, args.refresh, &mut out)
}

/// The `--endpoint` flag (or its environment variable) wins over the config file.
pub fn resolve_endpoint(flag: Option<&str>, config: &Config) -> String {
    match flag {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => config.endpoint.url.clone(),
    }
}

/// Run one command against `client`, writing user-facing output to `out`.
pub fn execute<T: GraphqlTransport, W: Write>(
    client: &mut NotesClient<T>,
    command: &Command,
    refresh: bool,
    out: &mut W,
) -> Result<()> {
    let presenter = TextPresenter::new();

    let outcome = match command {
        Command::Send { text } => {
            client.set_note(text.as_str());
            client.send_notes().context("Failed to send note")?
        }
        Command::Change { text } => {
            client.set_note(text.as_str());
            client.change_notes().context("Failed to change notes")?
        }
        Command::Delete { text } => {
            client.set_note(text.as_str());
            client.delete_notes().context("Failed to delete notes")?
        }
        Command::Update { id, text } => {
            client.set_new_note(text.as_str());
            client
                .update_note_by_id(*id)
                .with_context(|| format!("Failed to update note {}", id))?
        }
        Command::Remove { id } => client
            .delete_note_by_id(*id)
            .with_context(|| format!("Failed to delete note {}", id))?,
        Command::Fetch { json, keys } => {
            client.fetch_notes().context("Failed to fetch notes")?;
            return write_fetched(client, &presenter, *json, *keys, out);
        }
        Command::InitConfig { .. } => bail!("init-config does not talk to the server"),
    };

    write_outcome(&presenter, &outcome, out)?;

    if refresh {
        debug!("Refreshing note list after mutation");
        client.fetch_notes().context("Failed to fetch notes")?;
        write_fetched(client, &presenter, false, false, out)?;
    }
    Ok(())
}

fn write_outcome<W: Write>(
    presenter: &TextPresenter,
    outcome: &OperationOutcome,
    out: &mut W,
) -> Result<()> {
    let rendered = presenter.render_outcome(outcome);
    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}

fn write_fetched<T: GraphqlTransport, W: Write>(
    client: &NotesClient<T>,
    presenter: &TextPresenter,
    json: bool,
    keys: bool,
    out: &mut W,
) -> Result<()> {
    let rendered = if keys {
        presenter.render_keys(&client.render_items())
    } else if json {
        presenter.render_json(&client.notes()?)?
    } else {
        presenter.render_list(&client.notes()?)
    };

    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}

/// Write a default config file and print its location to `out`.
pub fn init_config<W: Write>(path: Option<&Path>, force: bool, out: &mut W) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path().context("Could not determine config directory")?,
    };

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::create_default(&path)?;
    info!(?path, "Wrote default config");
    writeln!(out, "{}", path.display())?;
    Ok(())
}
