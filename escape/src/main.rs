//! Headless runner: drives the simulation core against the buffer
//! machine. Useful for soak runs and debugging without a frontend; a
//! Ctrl-C raises the machine's quit flag and the core stops at its next
//! sleep.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::Result;
use log::LevelFilter;

use escape::preferences::{Preferences, PREFERENCES_FILE_NAME};
use escape::State;
use spectrum::{BufferMachine, Machine};

fn main() -> Result<()> {
    let prefs_path = PathBuf::from(PREFERENCES_FILE_NAME);
    let prefs = Preferences::load(&prefs_path)?;

    spectrum::initialize_logger(LevelFilter::Info, prefs.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("logger init failed: {e}"))?;

    let mut machine = BufferMachine::new();
    let quit = machine.quit_flag();
    ctrlc::set_handler(move || {
        quit.store(true, Ordering::SeqCst);
    })?;

    let mut state = State::new()?;
    prefs.apply(&mut state);

    escape::setup(&mut state, &mut machine);

    // Headless: skip the menu wait and go straight in.
    escape::setup2(&mut state, &mut machine);

    log::info!("running (tick budget: {})", prefs.tick_budget);
    let mut ticks: u64 = 0;
    loop {
        if escape::main_loop_iter(&mut state, &mut machine) {
            log::info!("host quit after {ticks} ticks");
            break;
        }
        ticks += 1;
        if prefs.tick_budget != 0 && ticks >= prefs.tick_budget {
            log::info!("tick budget exhausted");
            break;
        }
    }

    log::info!(
        "final state: clock {}, morale {}, score {:?}",
        state.gametime,
        state.morale,
        state.score
    );
    machine.draw(None);
    Ok(())
}
