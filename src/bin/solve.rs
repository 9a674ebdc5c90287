use std::path::{Path, PathBuf};
use std::time::Instant;

use gridlock::board::Board;
use gridlock::heuristic::{Heuristic, ADVERTISED};
use gridlock::parse::{parse_puzzle, read_puzzle, ParsedPuzzle};
use gridlock::puzzles;
use gridlock::report::{write_reports, SolveReport};
use gridlock::search::{best_first, bfs, SearchOutcome};

enum Strategy {
    Bfs,
    BestFirst(Heuristic),
}

fn usage() -> ! {
    eprintln!(
        "Usage: solve <puzzle.txt | -> [options]\n       \
         solve --demo <name> [options]\n       \
         solve --demos\n\n\
         Options:\n  \
         --heuristic <name>  run best-first search with <name> (repeatable)\n  \
         --bfs               also run breadth-first search with --heuristic\n  \
         --show              render the board before solving\n  \
         --report <path>     write a JSON report of all runs\n\n\
         Heuristics: {}\nBuilt-in puzzles: {}",
        ADVERTISED.join(", "),
        puzzles::available_names().join(", ")
    );
    std::process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    if args[1] == "--demos" {
        for name in puzzles::available_names() {
            println!("{name}");
        }
        return;
    }

    let mut input: Option<String> = None;
    let mut demo: Option<String> = None;
    let mut heuristics: Vec<String> = Vec::new();
    let mut with_bfs = false;
    let mut show = false;
    let mut report_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--demo" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("--demo requires a puzzle name");
                    std::process::exit(2);
                };
                demo = Some(name.clone());
                i += 2;
            }
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
            "--show" => {
                show = true;
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
            x if x.starts_with("--") => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
            x => {
                if input.is_some() {
                    eprintln!("More than one puzzle input given.");
                    std::process::exit(2);
                }
                input = Some(x.to_string());
                i += 1;
            }
        }
    }

    let (label, board) = load_board(input, demo);

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

    if show {
        print!("{board}");
        println!();
    }

    let mut reports: Vec<SolveReport> = Vec::new();
    for (strategy_label, strategy) in &runs {
        let started = Instant::now();
        let outcome = match strategy {
            Strategy::Bfs => bfs(&board),
            Strategy::BestFirst(h) => best_first(&board, *h),
        };
        let elapsed = started.elapsed().as_secs_f64();
        print_outcome(strategy_label, &board, &outcome, elapsed);
        reports.push(SolveReport::from_outcome(
            &label,
            strategy_label,
            &outcome,
            elapsed,
        ));
    }

    if let Some(path) = report_path {
        if let Err(e) = write_reports(&path, &reports) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
    }
}

fn load_board(input: Option<String>, demo: Option<String>) -> (String, Board) {
    match (input, demo) {
        (Some(_), Some(_)) => {
            eprintln!("Give either a puzzle file or --demo, not both.");
            std::process::exit(2);
        }
        (None, None) => usage(),
        (None, Some(name)) => match puzzles::by_name(&name) {
            Ok(Some(board)) => (name, board),
            Ok(None) => {
                eprintln!(
                    "Unknown demo puzzle: {name}\n\nBuilt-in puzzles:\n  - {}",
                    puzzles::available_names().join("\n  - ")
                );
                std::process::exit(2);
            }
            Err(e) => {
                eprintln!("Failed to build demo puzzle {name}: {e}");
                std::process::exit(1);
            }
        },
        (Some(path), None) => {
            let parsed = if path == "-" {
                match std::io::read_to_string(std::io::stdin()) {
                    Ok(text) => parse_puzzle(&text),
                    Err(e) => {
                        eprintln!("Failed to read stdin: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                read_puzzle(Path::new(&path))
            };

            let parsed = match parsed {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Failed to load {path}: {e}");
                    std::process::exit(1);
                }
            };

            print_diagnostics(&path, &parsed);
            let label = if path == "-" { "stdin".to_string() } else { path };
            (label, parsed.board)
        }
    }
}

fn print_diagnostics(path: &str, parsed: &ParsedPuzzle) {
    for s in &parsed.skipped {
        eprintln!(
            "{path}:{}: skipped line ({}): {}",
            s.line,
            s.reason,
            s.content.trim()
        );
    }
    if let Some((declared, found)) = parsed.count_mismatch {
        eprintln!(
            "{path}: header declares {declared} vehicles but {found} parsed; using the parsed list"
        );
    }
}

fn print_outcome(strategy: &str, board: &Board, outcome: &SearchOutcome, elapsed: f64) {
    println!("strategy: {strategy}");
    match &outcome.path {
        Some(path) if path.is_empty() => {
            println!("  already solved, 0 moves");
        }
        Some(path) => {
            println!("  solved in {} moves", path.len());
            for (n, mv) in path.iter().enumerate() {
                let orientation = board.vehicles()[mv.vehicle].orientation;
                println!(
                    "  {:>3}. vehicle {} slides {}",
                    n + 1,
                    mv.vehicle,
                    mv.direction(orientation)
                );
            }
        }
        None => {
            println!("  no solution");
        }
    }
    println!(
        "  expanded {} states, generated {}, {:.3}s",
        outcome.expanded, outcome.generated, elapsed
    );
}
