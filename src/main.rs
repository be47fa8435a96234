use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use curate::cli::CliArgs;
use curate::config::CuratorConfig;
use curate::config_paths;
use curate::input::{parse_line, Input, HELP};
use curate::messages::{AppMsg, Msg, NavMsg};
use curate::model::AppModel;
use curate::prompt::StdinPrompter;
use curate::runtime::{Runtime, RuntimeOptions};
use curate::session::Session;
use curate::store::{DatasetStore, FileStore};
use curate::view;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    curate::tracing::init();

    if args.init_config {
        let config = args.into_config(CuratorConfig::load()).config;
        config
            .save()
            .map_err(anyhow::Error::msg)
            .context("writing config")?;
        if let Some(path) = config_paths::config_file() {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let startup = args.into_config(CuratorConfig::load());
    let store_path = startup
        .config
        .resolved_store_path()
        .context("no config directory available; pass --store")?;
    let store = FileStore::new(store_path);
    tracing::info!("Using store {}", store.path().display());

    let stored = match store.load() {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!("Error parsing stored dataset: {}", e);
            None
        }
    };

    let mut session = Session::load();
    if let Some(index) = startup.index {
        session.data_idx = index;
    }

    let options = RuntimeOptions {
        session_path: config_paths::session_file(),
        export_dir: startup.config.resolved_export_dir(),
        preview_path: config_paths::preview_file(),
        open_browser: true,
    };
    let model = AppModel::new(startup.config, session, stored);
    let mut runtime = Runtime::new(
        model,
        store,
        StdinPrompter::new(startup.assume_yes),
        options,
    );

    if let Some(path) = startup.upload {
        runtime.dispatch(AppMsg::LoadFile(path));
    }

    run(&mut runtime)
}

/// Read commands until EOF or `quit`
fn run(runtime: &mut Runtime<FileStore, StdinPrompter>) -> Result<()> {
    print!("{}", view::render(runtime.model()));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Nothing) => {}
            Ok(Input::Help) => println!("{}", HELP),
            Ok(Input::Show) => print!("{}", view::render(runtime.model())),
            Ok(Input::Message(msg)) => {
                if let Some(notice) = boundary_notice(runtime.model(), &msg) {
                    println!("{}", notice);
                    continue;
                }
                if runtime.dispatch(msg) {
                    print!("{}", view::render(runtime.model()));
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

/// Prev/Next are unavailable at the ends of the collection
fn boundary_notice(model: &AppModel, msg: &Msg) -> Option<&'static str> {
    match msg {
        Msg::Nav(NavMsg::Prev) if !model.can_go_prev() => Some("Already at the first record."),
        Msg::Nav(NavMsg::Next) if !model.can_go_next() => Some("Already at the last record."),
        _ => None,
    }
}
