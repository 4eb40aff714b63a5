use std::io::{self, BufRead};
use std::process::ExitCode;

use train_lookup::dataset;
use train_lookup::search::{SearchConfig, SearchRequest, search};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dataset = match dataset::load(dataset::DEFAULT_DATASET_PATH) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!(
                "failed to load {}: {e}",
                dataset::DEFAULT_DATASET_PATH
            );
            return ExitCode::FAILURE;
        }
    };

    println!("----------- Train schedule lookup -----------");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let departure_station = match prompt(&mut lines, "Choose a departure station") {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let arrival_station = match prompt(&mut lines, "Choose an arrival station") {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let criteria = match prompt(&mut lines, "Choose a sort criteria (price, arrival-time, departure-time)") {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let request = SearchRequest::new(departure_station, arrival_station, criteria);

    let result = match search(&dataset, &request, &SearchConfig::default()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("---------------- Search result ----------------");

    if result.is_empty() {
        println!("No trains run between the given stations.");
    }

    for train in &result.trains {
        println!("{train}");
    }

    println!("------------------------------------------------");

    ExitCode::SUCCESS
}

/// Print a prompt and read one line from stdin.
///
/// The input is trimmed of whitespace and surrounding double quotes, so
/// pasted quoted identifiers work. End of input reads as an empty line.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<String> {
    println!("{label}");

    let line = lines.next().unwrap_or_else(|| Ok(String::new()))?;

    Ok(line.trim().trim_matches('"').to_string())
}
