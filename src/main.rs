use mask_checker::{CheckerConfig, MaskChecker};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = CheckerConfig::parse_args(&args)?;

    let checker = MaskChecker::new(config);
    let summary = checker.run(&mut |name| println!("Processed: {name}"))?;

    print!("{}", summary.report);
    println!(
        "Finished: {} of {} tiles over the color limit ({:.1} ms)",
        summary.failing_tiles, summary.tiles_processed, summary.latency_ms
    );
    Ok(())
}
