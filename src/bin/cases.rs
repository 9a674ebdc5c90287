use std::path::PathBuf;
use std::time::Instant;

use gridlock::heuristic::{Heuristic, ADVERTISED};
use gridlock::parse::read_puzzle;
use gridlock::report::{write_reports, SolveReport};
use gridlock::search::{best_first, bfs, SearchOutcome};

enum Strategy {
    Bfs,
    BestFirst(Heuristic),
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: cases <dir> <first> <last> [--heuristic <name>]... [--bfs] [--report <path>]\n\n\
             Runs every case file <dir>/GameP<nn>.txt for <nn> in the inclusive\n\
             range <first>..<last> (two-digit numbering); unreadable or invalid\n\
             cases are skipped.\n\n\
             Heuristics: {}",
            ADVERTISED.join(", ")
        );
        std::process::exit(2);
    }

    let dir = PathBuf::from(&args[1]);
    let first = parse_case_number(&args[2], "first");
    let last = parse_case_number(&args[3], "last");
    if first > last {
        eprintln!("Case range {first}..{last} is empty.");
        std::process::exit(2);
    }

    let mut heuristics: Vec<String> = Vec::new();
    let mut with_bfs = false;
    let mut report_path: Option<PathBuf> = None;

    let mut i = 4;
    while i < args.len() {
        match args[i].as_str() {
            "--heuristic" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("--heuristic requires a name");
                    std::process::exit(2);
                };
                heuristics.push(name.clone());
                i += 2;
            }
            "--bfs" => {
                with_bfs = true;
                i += 1;
            }
            "--report" => {
                let Some(p) = args.get(i + 1) else {
                    eprintln!("--report requires a path");
                    std::process::exit(2);
                };
                report_path = Some(PathBuf::from(p));
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let mut runs: Vec<(String, Strategy)> = Vec::new();
    if heuristics.is_empty() || with_bfs {
        runs.push(("bfs".to_string(), Strategy::Bfs));
    }
    for name in &heuristics {
        runs.push((
            format!("best-first({name})"),
            Strategy::BestFirst(Heuristic::from_name(name)),
        ));
    }

    let mut reports: Vec<SolveReport> = Vec::new();

    for case in first..=last {
        let name = format!("GameP{case:02}.txt");
        let path = dir.join(&name);

        let parsed = match read_puzzle(&path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Skipping {}: {e}", path.display());
                continue;
            }
        };

        for s in &parsed.skipped {
            eprintln!(
                "{}:{}: skipped line ({}): {}",
                path.display(),
                s.line,
                s.reason,
                s.content.trim()
            );
        }
        if let Some((declared, found)) = parsed.count_mismatch {
            eprintln!(
                "{}: header declares {declared} vehicles but {found} parsed; using the parsed list",
                path.display()
            );
        }

        println!("== {name} ==");
        print!("{}", parsed.board);
        println!();

        for (strategy_label, strategy) in &runs {
            let started = Instant::now();
            let outcome = match strategy {
                Strategy::Bfs => bfs(&parsed.board),
                Strategy::BestFirst(h) => best_first(&parsed.board, *h),
            };
            let elapsed = started.elapsed().as_secs_f64();
            print_outcome(strategy_label, &outcome, elapsed);
            reports.push(SolveReport::from_outcome(
                &name,
                strategy_label,
                &outcome,
                elapsed,
            ));
        }

        println!("----------------------------------------");
    }

    if let Some(path) = report_path {
        if let Err(e) = write_reports(&path, &reports) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_case_number(text: &str, what: &str) -> u32 {
    match text.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid {what} case number `{text}`: {e}");
            std::process::exit(2);
        }
    }
}

fn print_outcome(strategy: &str, outcome: &SearchOutcome, elapsed: f64) {
    match outcome.move_count() {
        Some(0) => println!("{strategy}: already solved, 0 moves"),
        Some(n) => println!("{strategy}: solved in {n} moves"),
        None => println!("{strategy}: no solution"),
    }
    println!(
        "  expanded {} states, generated {}, {:.3}s",
        outcome.expanded, outcome.generated, elapsed
    );
}
