//! Headless solver for scenario files
//!
//! Runs the search on a JSON scenario and prints the path, its cost and a text map.
//! Exit status: 0 path found, 2 no path, 1 error.

use gridpath::logging;
use gridpath::pathfinding::{format_map, format_path, search};
use gridpath::scenario::Scenario;
use std::env;
use std::process;

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.json> [--verbose]", args[0]);
        eprintln!("Finds a 4-connected shortest path between the scenario's start and goal");
        process::exit(1);
    }
    if args.iter().skip(2).any(|a| a == "--verbose") {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let filename = &args[1];
    let input = match Scenario::load_from_file(filename).and_then(|s| s.to_input()) {
        Ok(input) => input,
        Err(e) => {
            log::error!("{}: {}", filename, e);
            process::exit(1);
        }
    };

    let outcome = search(&input.grid, input.start, input.goal);

    println!("=== Scenario: {} ===", filename);
    println!(
        "Grid: {}x{}, start {}, goal {}\n",
        input.grid.rows, input.grid.cols, input.start, input.goal
    );
    print!("{}", format_map(&input.grid, input.start, input.goal, outcome.path()));

    println!("\n=== Result ===");
    match (outcome.path(), outcome.cost()) {
        (Some(path), Some(cost)) => {
            println!("Path: {}", format_path(path));
            if let Some(forward) = outcome.path_from_start() {
                println!("Start to goal: {}", format_path(&forward));
            }
            println!("Cost: {} steps", cost);
        }
        _ => println!("No path found"),
    }
    println!("Visited cells: {}", outcome.visited().len());
    println!("Frontier entries left: {}", outcome.frontier().len());

    if log::log_enabled!(log::Level::Debug) {
        let mut records: Vec<_> = outcome.cell_records().iter().collect();
        records.sort_by_key(|(pos, _)| **pos);
        for (pos, record) in records {
            log::debug!(
                "{} f={} g={} h={} parent={}",
                pos, record.f, record.g, record.h, record.parent
            );
        }
    }

    if !outcome.is_found() {
        process::exit(2);
    }
}
