use std::process::ExitCode;
use std::time::Instant;

use knight_gap::{Board, IntoPretty, Outcome, SearchEngine};
use log::{debug, error, info};

const PROGRESS_INTERVAL: usize = 100_000;

fn main() -> ExitCode {
    env_logger::init();

    let now = Instant::now();
    let mut expanded = 0;
    let outcome = SearchEngine::new(Board::initial()).run(|key| {
        expanded += 1;
        if expanded % PROGRESS_INTERVAL == 0 {
            debug!("Expanded {expanded} states (latest key {}).", key.0);
        }
    });
    info!("Search took {:?}.", now.elapsed());

    match outcome {
        Ok(Outcome::Solved(solution)) => {
            println!("{}", (&solution).pretty());
            ExitCode::SUCCESS
        }

        Ok(Outcome::Exhausted(stats)) => {
            println!(
                "NO SOLUTION: goal unreachable after expanding {} states.",
                stats.expanded
            );
            ExitCode::from(1)
        }

        Err(err) => {
            error!("Search aborted: {err}");
            ExitCode::from(2)
        }
    }
}
