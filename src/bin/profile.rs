use std::time::Instant;

use mazecarve::generators::generate_seeded;

/// Side length of the mazes generated while profiling.
const PROFILE_SIZE: u16 = 1024;

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);

    let started = Instant::now();
    let mut passages = 0;
    for seed in 0..num_iters {
        match generate_seeded(PROFILE_SIZE, PROFILE_SIZE, seed) {
            Ok(grid) => passages += grid.passages(),
            Err(e) => {
                eprintln!("{}", e);
                return Ok(());
            }
        }
    }
    println!(
        "Generated {} mazes of {}x{} ({} passages) in {:?}",
        num_iters,
        PROFILE_SIZE,
        PROFILE_SIZE,
        passages,
        started.elapsed()
    );
    Ok(())
}
