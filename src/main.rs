use std::io;
use anyhow::Context;
use notes_manager::{init_logging, NotesConfig, NotesManager, Shell};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = NotesConfig::from_env();
    let manager = NotesManager::with_config(config);

    let stdin = io::stdin();
    let mut shell = Shell::new(manager, stdin.lock(), io::stdout(), io::stderr());
    shell.run().context("terminal I/O failed")?;

    Ok(())
}
