use gridlock::movegen::successors;
use gridlock::puzzles;
use gridlock::state::{Move, SearchState};

#[test]
fn every_resting_position_is_its_own_successor() {
    // three_step: the target can slide right once, the short blocker can go
    // up one or down three stops, the long blocker up two or down one.
    let root = SearchState::root(puzzles::three_step().unwrap());
    let succs = successors(&root);

    assert_eq!(succs.len(), 8);
    assert!(succs.iter().all(|s| s.moves == 1));
}

#[test]
fn slide_distance_is_not_recorded_in_the_path() {
    let root = SearchState::root(puzzles::three_step().unwrap());
    let succs = successors(&root);

    // All three down-slides of vehicle 1 carry the same one-entry path but
    // land on different boards.
    let down: Vec<_> = succs
        .iter()
        .filter(|s| s.path == vec![Move::new(1, 1)])
        .collect();
    assert_eq!(down.len(), 3);
    assert_ne!(down[0].board, down[1].board);
    assert_ne!(down[1].board, down[2].board);
    assert_ne!(down[0].board, down[2].board);
}

#[test]
fn enumeration_order_is_vehicle_then_negative_step_first() {
    let root = SearchState::root(puzzles::corner_escape().unwrap());
    let succs = successors(&root);

    let paths: Vec<_> = succs.iter().map(|s| s.path.clone()).collect();
    assert_eq!(paths, vec![vec![Move::new(1, -1)], vec![Move::new(1, 1)]]);
}

#[test]
fn blocked_vehicles_generate_nothing() {
    // corner_escape's target is walled in on both sides at the root.
    let root = SearchState::root(puzzles::corner_escape().unwrap());
    assert!(successors(&root)
        .iter()
        .all(|s| s.path[0].vehicle != 0));

    // gridlocked pins everything.
    let pinned = SearchState::root(puzzles::gridlocked().unwrap());
    assert!(successors(&pinned).is_empty());
}

#[test]
fn distinct_routes_to_one_board_collapse_by_identity() {
    let root = SearchState::root(puzzles::corner_escape().unwrap());
    let first = successors(&root);

    // Slide the blocker up, then down from there: same board as sliding it
    // down directly, reached through a longer path.
    let up = &first[0];
    let down_again = successors(up)
        .into_iter()
        .find(|s| s.path == vec![Move::new(1, -1), Move::new(1, 1)])
        .unwrap();

    assert_eq!(down_again.board, root.board);
    assert_eq!(&down_again, &root);
    assert_ne!(down_again.path, root.path);

    let mut set = std::collections::HashSet::new();
    set.insert(root);
    assert!(!set.insert(down_again));
}
