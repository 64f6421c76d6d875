use gridpath::config::{Config, DEFAULT_CONFIG_PATH};
use gridpath::input::{InputCollector, SearchInput};
use gridpath::logging;
use gridpath::pathfinding::{format_path, search};
use gridpath::renderer::Renderer;
use gridpath::scenario::Scenario;
use gridpath::InputError;
use std::io;

/// Command line options
#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    scenario: Option<String>,
    save_scenario: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Args, InputError> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| InputError::Malformed(format!("{} needs a file path", flag)))
        };
        match arg.as_str() {
            "--config" => parsed.config = Some(value("--config")?),
            "--scenario" => parsed.scenario = Some(value("--scenario")?),
            "--save-scenario" => parsed.save_scenario = Some(value("--save-scenario")?),
            other => {
                return Err(InputError::Malformed(format!("unknown argument '{}'", other)));
            }
        }
    }

    Ok(parsed)
}

fn collect_input(args: &Args, config: &Config) -> Result<SearchInput, InputError> {
    let input = match &args.scenario {
        Some(path) => {
            log::info!("Loading scenario from {}", path);
            Scenario::load_from_file(path)?.to_input()?
        }
        None => {
            let stdin = io::stdin();
            InputCollector::new(stdin.lock(), io::stdout()).collect(&config.grid)?
        }
    };

    if let Some(path) = &args.save_scenario {
        Scenario::from_input(&input).save_to_file(path)?;
        log::info!("Scenario saved to {}", path);
    }

    Ok(input)
}

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Usage: gridpath [--config <file>] [--scenario <file>] [--save-scenario <file>]");
            std::process::exit(1);
        }
    };

    let config = Config::load(args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH));
    if let Err(e) = logging::apply(&config.logging) {
        log::warn!("Could not open log file: {}", e);
    }

    let input = match collect_input(&args, &config) {
        Ok(input) => input,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let outcome = search(&input.grid, input.start, input.goal);
    match outcome.path() {
        Some(path) => {
            log::info!("The destination cell is found");
            println!("The Optimal Path is");
            println!("{}", format_path(path));
        }
        None => log::info!("No path found"),
    }
    log::debug!(
        "Visited {} cells, {} frontier entries left, {} cell records",
        outcome.visited().len(),
        outcome.frontier().len(),
        outcome.cell_records().len()
    );

    let renderer = Renderer::new(
        input.grid,
        input.start,
        input.goal,
        &outcome,
        config.visual.clone(),
        config.window.clone(),
    );
    macroquad::Window::from_config(Renderer::window_conf(&config.window), renderer.run());
}
