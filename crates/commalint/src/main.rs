mod options;

use std::io::IsTerminal as _;
use std::process::ExitCode;

use anyhow::Context as _;
use camino::Utf8Path;
use clap::Parser as _;
use commalint_db::{File, SpacingConfig, diagnostics, fix_file};
use commalint_errors::Renderer;
use options::{CheckArgs, Options};
use salsa::{DatabaseImpl, Setter as _};
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    match Options::parse() {
        Options::Check(args) => {
            let renderer = if std::io::stderr().is_terminal() {
                Renderer::styled()
            } else {
                Renderer::plain()
            };
            check(&args, &renderer).map(exit_code)
        }
    }
}

fn exit_code(remaining: usize) -> ExitCode {
    if remaining == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Checks every file named by `args` and returns how many diagnostics remain.
fn check(args: &CheckArgs, renderer: &Renderer) -> anyhow::Result<usize> {
    let config = args.config()?;
    let mut db = DatabaseImpl::default();
    let mut remaining = 0;

    for path in &args.paths {
        remaining += check_path(&mut db, renderer, path, config, args.fix)?;
    }

    Ok(remaining)
}

/// Checks one file, optionally fixing it in place. Returns the number of
/// diagnostics left in the file.
fn check_path(
    db: &mut DatabaseImpl,
    renderer: &Renderer,
    path: &Utf8Path,
    config: SpacingConfig,
    fix: bool,
) -> anyhow::Result<usize> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))?;
    let file = File::new(&*db, path.to_owned(), text, config);

    if fix {
        let (fixed, applied) = fix_file(&*db, file);
        if applied > 0 {
            std::fs::write(path, &fixed).with_context(|| format!("failed to write `{path}`"))?;
            eprintln!("{path}: applied {applied} fix{}", if applied == 1 { "" } else { "es" });
            file.set_text(db).to(fixed);
        }
    }

    let db = &*db;
    let diagnostics = diagnostics(db, file);
    info!(%path, diagnostics = diagnostics.len(), "checked");

    let text = file.text(db);
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic.render(renderer, path.as_str(), text));
    }

    Ok(diagnostics.len())
}
