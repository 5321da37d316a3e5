use anyhow::{Context, Result};
use std::io;

use number_guessing::{SecretSelector, Session};

fn main() -> Result<()> {
    env_logger::init();

    let mut selector = SecretSelector::from_time();
    let mut session = Session::new(selector.select_secret());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("Number guessing session did not finish")?;
    Ok(())
}
