//! Sector Run entry point
//!
//! Runs a headless demo: the autopilot plays one full session
//! on a simulated 60 Hz scheduler and the final snapshot is printed as JSON.
//!
//! Usage: `sector-run [seed] [tuning.json]`

mod headless {
    use sector_run::sim::{GamePhase, ManualClock, Session, autopilot};
    use sector_run::{Snapshot, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    fn load_tuning(path: Option<&str>) -> Result<Tuning, String> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {}", path, e))?;
                Tuning::from_json(&json).map_err(|e| e.to_string())
            }
            None => Ok(Tuning::default()),
        }
    }

    pub fn run() -> Result<Snapshot, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let seed = match args.first() {
            Some(s) => s.parse::<u64>().map_err(|e| format!("bad seed {:?}: {}", s, e))?,
            None => 0x5EC7_0001,
        };
        let tuning = load_tuning(args.get(1).map(String::as_str))?;

        // Wall clock follows simulated frames so the victory cooldown
        // does not need real waiting
        let clock = ManualClock::new(0.0);
        let mut session = Session::seeded(tuning, seed, clock.clone()).map_err(|e| e.to_string())?;
        log::info!("Headless demo starting with seed {}", seed);

        let mut snapshot = session.snapshot();
        let mut last_phase = snapshot.phase;
        let mut won = false;

        for frame in 0..MAX_FRAMES {
            if let Some(command) = autopilot(&snapshot) {
                session.enqueue(command);
            }
            clock.advance(FRAME_MS);
            snapshot = session.tick(frame as f64 * FRAME_MS);

            if snapshot.phase != last_phase {
                log::info!(
                    "frame {}: {:?} -> {:?} ({}, {}/{} columns, {}s left)",
                    frame,
                    last_phase,
                    snapshot.phase,
                    snapshot.sector_label,
                    snapshot.columns_passed,
                    snapshot.columns_required,
                    snapshot.time_left
                );
                won |= snapshot.phase == GamePhase::Victory;
                last_phase = snapshot.phase;
            }

            // Back on the title screen after a dismissed victory
            if won && snapshot.phase == GamePhase::Idle {
                break;
            }
        }

        if !won {
            log::warn!("Demo ended without a victory");
        }
        Ok(snapshot)
    }
}

fn main() {
    env_logger::init();
    log::info!("Sector Run starting...");
    log::info!("Rendering is external - running the headless autopilot demo");

    match headless::run() {
        Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to encode snapshot: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    }
}
