use mazecarve::{
    config::{Config, LOG_FILE_NAME, LOG_LEVEL_ENV},
    generators::{generate, generate_seeded},
    render::{print_styled, render_ascii},
};
use tracing::Level;

/// Send logs to a file so they do not interleave with the maze on stdout.
/// The returned guard flushes pending records when dropped.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", Config::USAGE);
            return Ok(());
        }
    };

    let grid = match config.seed {
        Some(seed) => generate_seeded(config.width, config.height, seed),
        None => generate(config.width, config.height),
    };
    let grid = match grid {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!("Maze generation failed: {}", e);
            eprintln!("{}", e);
            return Ok(());
        }
    };
    tracing::info!(
        "Generated {}x{} maze with {} passages",
        grid.width(),
        grid.height(),
        grid.passages()
    );

    if config.plain {
        println!("{}", render_ascii(&grid));
        Ok(())
    } else {
        print_styled(&grid, &mut std::io::stdout())
    }
}
