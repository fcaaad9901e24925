use std::process;

use shapekit::types::DemoReport;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let json_mode = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| !a.starts_with("--")).collect();

    let subcommand = positional.first().map_or("run", |s| s.as_str());

    if positional.len() > 1 {
        print_usage();
        process::exit(2);
    }

    let report = shapekit::run_demos();

    match subcommand {
        "run" => run(&report, json_mode),
        "list" => list(&report, json_mode),
        _ => {
            print_usage();
            process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: shapekit [run|list] [--json]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run     Run every demo and print each result (default)");
    eprintln!("  list    Print the demo names, one per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json  Output the full report as JSON");
}

fn run(report: &DemoReport, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(report).unwrap());
        return;
    }

    for demo in &report.demos {
        println!("{demo}");
    }
}

fn list(report: &DemoReport, json_mode: bool) {
    let names = report.names();

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&names).unwrap());
        return;
    }

    for name in names {
        println!("{name}");
    }
}
