//! Drive the screens without a window: reads steps from stdin and prints the
//! final screen as text.
//!
//! ```text
//! printf 'set email a@b.c\nset password pw\npress login\n' | waypoint-headless [config.json]
//! ```

use std::io::{self, Read};

use kv_log_macro as log;
use waypoint::{run_script, Config, FormState, Router, TextRenderer};

fn main() -> waypoint::Result<()> {
    waypoint::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut script = String::new();
    io::stdin().read_to_string(&mut script)?;

    let mut router = Router::from_config(&config, FormState::new(), TextRenderer::new());
    run_script(&mut router, &script)?;

    log::info!("Script finished", { route: router.screen().path() });
    println!("{}", router.renderer().text());

    Ok(())
}
