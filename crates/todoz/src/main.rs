//! # Todoz CLI
//!
//! The binary is intentionally thin: everything from `todozapp` inward is
//! UI-agnostic, so this crate owns **all** user-facing concerns — argument
//! parsing, store location, dispatch, and terminal rendering — and nothing
//! else.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (this crate)                                     │
//! │  - clap argument parsing (args.rs)                          │
//! │  - Store location + context wiring (main.rs)                │
//! │  - Terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (todozapp::dispatch)                            │
//! │  - Maps intents onto store operations                       │
//! │  - Returns a fresh projection + structured messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + Projector (todozapp::store, todozapp::view)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexes
//!
//! Users refer to items by the 1-based position shown in `todoz list`. The
//! position is always computed against the full newest-first list, so the
//! numbers stay stable when a filter is active. A stale index (the item is
//! already gone) is a warning, never an error — the store treats unknown ids
//! as no-ops and so does the CLI.
//!
//! ## Exit Codes
//!
//! Only environment problems (no usable data directory, config write
//! failures) exit non-zero. Validation no-ops and degraded persistence print
//! a message and exit 0: a wrong save is cheaper than a failing list.

use anyhow::{bail, Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use todozapp::config::TodozConfig;
use todozapp::dispatch::{dispatch, Intent};
use todozapp::model::Filter;
use todozapp::store::fs_backend::FsBackend;
use todozapp::store::TodoStore;
use uuid::Uuid;

mod args;
mod print;

use args::{Cli, Commands};
use print::ListRow;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store_dir = resolve_store_dir(&cli)?;

    let config = TodozConfig::load(&store_dir).unwrap_or_default();
    let backend = FsBackend::new(store_dir.clone()).with_data_file(config.get_data_file());
    let mut store = TodoStore::load(backend);

    match cli.command {
        Some(Commands::Add { text, detail }) => handle_add(&mut store, text, detail),
        Some(Commands::List { filter }) => handle_list(&mut store, filter),
        Some(Commands::Done { index }) => handle_toggle(&mut store, index, true),
        Some(Commands::Undone { index }) => handle_toggle(&mut store, index, false),
        Some(Commands::Remove { index }) => handle_remove(&mut store, index),
        Some(Commands::Clear) => handle_clear(&mut store),
        Some(Commands::Config { key, value }) => handle_config(&store_dir, key, value),
        None => handle_list(&mut store, None),
    }
}

fn resolve_store_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.store {
        return Ok(dir.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "todoz", "todoz")
        .context("could not determine a data directory for this platform")?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(store: &mut TodoStore<FsBackend>, text: String, detail: String) -> Result<()> {
    let result = dispatch(store, Intent::AddItem { text, detail });
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(store: &mut TodoStore<FsBackend>, filter_arg: Option<String>) -> Result<()> {
    // An unrecognized filter value is ignored, not an error: warn and keep
    // the session default
    let filter = match filter_arg.as_deref() {
        Some(value) => match Filter::parse(value) {
            Some(filter) => filter,
            None => {
                print::print_unknown_filter(value);
                store.filter()
            }
        },
        None => store.filter(),
    };

    let result = dispatch(store, Intent::SetFilter { filter });

    // Positions against the full list, so `done 2` means the same thing
    // whichever filter produced the listing
    let positions: HashMap<Uuid, usize> = store
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id, i + 1))
        .collect();
    let rows: Vec<ListRow> = result
        .projection
        .visible
        .iter()
        .map(|item| ListRow {
            index: positions.get(&item.id).copied().unwrap_or(0),
            item,
        })
        .collect();

    print::print_list(&rows, &result.projection);
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(store: &mut TodoStore<FsBackend>, index: usize, completed: bool) -> Result<()> {
    let Some(id) = resolve_id(store, index) else {
        print::print_no_such_index(index);
        return Ok(());
    };

    let result = dispatch(store, Intent::ToggleItem { id, completed });
    print::print_messages(&result.messages);
    print::print_status(&result.projection);
    Ok(())
}

fn handle_remove(store: &mut TodoStore<FsBackend>, index: usize) -> Result<()> {
    let Some(id) = resolve_id(store, index) else {
        print::print_no_such_index(index);
        return Ok(());
    };

    let result = dispatch(store, Intent::RemoveItem { id });
    print::print_messages(&result.messages);
    print::print_status(&result.projection);
    Ok(())
}

fn handle_clear(store: &mut TodoStore<FsBackend>) -> Result<()> {
    let result = dispatch(store, Intent::ClearCompleted);
    if result.messages.is_empty() {
        print::print_nothing_to_clear();
    } else {
        print::print_messages(&result.messages);
    }
    print::print_status(&result.projection);
    Ok(())
}

fn handle_config(store_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = TodozConfig::load(store_dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("data-file = {}", config.get_data_file());
            Ok(())
        }
        (Some("data-file"), None) => {
            println!("{}", config.get_data_file());
            Ok(())
        }
        (Some("data-file"), Some(value)) => {
            config.set_data_file(&value);
            config.save(store_dir)?;
            println!("data-file set to {}", config.get_data_file());
            Ok(())
        }
        (Some(other), _) => bail!("Unknown config key: {}", other),
    }
}

/// Map a 1-based display index to an item id. `None` for out-of-range.
fn resolve_id(store: &TodoStore<FsBackend>, index: usize) -> Option<Uuid> {
    let slot = index.checked_sub(1)?;
    store.items().get(slot).map(|item| item.id)
}
