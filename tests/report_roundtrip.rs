use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gridlock::heuristic::Heuristic;
use gridlock::puzzles;
use gridlock::report::{read_reports, write_reports, MoveRecord, ReportError, SolveReport};
use gridlock::search::{best_first, bfs};

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("gridlock_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!(
        "failed to create a unique temp dir under {}",
        base.display()
    );
}

#[test]
fn solve_reports_roundtrip_through_json() {
    let dir = unique_temp_dir("solve_reports");
    let path = dir.join("reports.json");

    let board = puzzles::corner_escape().unwrap();
    let reports = vec![
        SolveReport::from_outcome("corner_escape", "bfs", &bfs(&board), 0.004),
        SolveReport::from_outcome(
            "corner_escape",
            "best-first(blocking)",
            &best_first(&board, Heuristic::Blocking),
            0.002,
        ),
    ];

    write_reports(&path, &reports).unwrap();
    let loaded = read_reports(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    for (orig, back) in reports.iter().zip(&loaded) {
        assert_eq!(back.puzzle, orig.puzzle);
        assert_eq!(back.strategy, orig.strategy);
        assert_eq!(back.solved, orig.solved);
        assert_eq!(back.moves, orig.moves);
        assert_eq!(back.path, orig.path);
        assert_eq!(back.expanded, orig.expanded);
        assert_eq!(back.generated, orig.generated);
        assert_eq!(back.elapsed_secs, orig.elapsed_secs);
    }

    // Both strategies found the same two-move line.
    assert!(loaded[0].solved);
    assert_eq!(loaded[0].moves, Some(2));
    assert_eq!(
        loaded[0].path,
        vec![
            MoveRecord {
                vehicle: 1,
                step: -1
            },
            MoveRecord {
                vehicle: 0,
                step: 1
            },
        ]
    );
    assert_eq!(loaded[1].path, loaded[0].path);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn exhausted_runs_serialize_without_a_path() {
    let dir = unique_temp_dir("exhausted_reports");
    let path = dir.join("reports.json");

    let board = puzzles::gridlocked().unwrap();
    let report = SolveReport::from_outcome("gridlocked", "bfs", &bfs(&board), 0.001);

    write_reports(&path, std::slice::from_ref(&report)).unwrap();
    let loaded = read_reports(&path).unwrap();

    assert_eq!(loaded.len(), 1);
    assert!(!loaded[0].solved);
    assert_eq!(loaded[0].moves, None);
    assert!(loaded[0].path.is_empty());
    assert_eq!(loaded[0].expanded, 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_report_files_are_errors() {
    let dir = unique_temp_dir("bad_reports");

    let missing = dir.join("missing.json");
    assert!(matches!(
        read_reports(&missing),
        Err(ReportError::Io {
            stage: "report_open",
            ..
        })
    ));

    let garbage = dir.join("garbage.json");
    fs::write(&garbage, "this is not json").unwrap();
    assert!(matches!(
        read_reports(&garbage),
        Err(ReportError::Io {
            stage: "report_parse",
            ..
        })
    ));

    let _ = fs::remove_dir_all(&dir);
}
