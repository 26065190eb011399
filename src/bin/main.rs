use mapfill::{builders, scenarios::Scenario, sizes::SizeReport};
use std::{env, process::ExitCode};
use tracing::Level;
use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

// Set to a file path to also record a chrome trace of every build.
const TRACE_VAR: &str = "MAPFILL_TRACE";

fn init_tracing() -> Option<FlushGuard> {
    let (chrome, guard) = match env::var_os(TRACE_VAR) {
        Some(path) => {
            let (layer, guard) = ChromeLayerBuilder::new().file(path).build();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };
    tracing_subscriber::registry()
        .with(chrome)
        .with(fmt::layer().with_filter(LevelFilter::INFO))
        .init();
    guard
}

fn run(args: &[String]) -> Result<(), String> {
    for scenario in Scenario::from_args(args)? {
        let _span = tracing::info_span!("scenario", %scenario).entered();

        let markers = builders::map_with_marker(scenario.entries, scenario.initial_capacity);
        tracing::event!(
            Level::INFO,
            value = "marker",
            len = markers.len(),
            capacity = markers.capacity()
        );

        let dynamics = builders::map_with_dynamic(scenario.entries, scenario.initial_capacity);
        tracing::event!(
            Level::INFO,
            value = "dynamic",
            len = dynamics.len(),
            capacity = dynamics.capacity()
        );
    }
    println!("{}", SizeReport::measure());
    Ok(())
}

fn main() -> ExitCode {
    let _guard = init_tracing();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
