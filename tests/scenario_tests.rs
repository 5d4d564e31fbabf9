//! End-to-end walk through the classic three-disk puzzle.

use hanoi_state::core::{replay, Move, PuzzleState};
use hanoi_state::{Checkpoint, InvalidMove, PuzzleBuilder};

const SOLUTION: [(usize, usize); 7] = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];

#[test]
fn three_disk_solution_visits_expected_configurations() {
    let expected = [
        vec![vec![3, 2], vec![], vec![1]],
        vec![vec![3], vec![2], vec![1]],
        vec![vec![3], vec![2, 1], vec![]],
        vec![vec![], vec![2, 1], vec![3]],
        vec![vec![1], vec![2], vec![3]],
        vec![vec![1], vec![], vec![3, 2]],
        vec![vec![], vec![], vec![3, 2, 1]],
    ];

    let mut state = PuzzleState::initial(3, 3).unwrap();
    assert_eq!(state.stacks(), vec![vec![3, 2, 1], vec![], vec![]]);

    for ((from, to), stacks) in SOLUTION.iter().zip(expected) {
        assert!(!state.is_goal_state());
        state = state.transition(*from, *to).unwrap();
        assert_eq!(state.stacks(), stacks);
    }

    assert!(state.is_goal_state());
    assert_eq!(state.depth(), 7);
}

#[test]
fn three_disk_solution_renders_each_board() {
    let start = PuzzleBuilder::new().pegs(3).disks(3).build().unwrap();
    let boards: Vec<String> = replay(&start, SOLUTION.map(Move::from))
        .unwrap()
        .path()
        .iter()
        .map(PuzzleState::render)
        .collect();

    assert_eq!(boards.len(), 8);
    assert_eq!(boards[0], " 1 | |\n 2 | |\n 3 | |\n");
    assert_eq!(boards[4], " | | |\n | 1 |\n | 2 3\n");
    assert_eq!(boards[7], " | | 1\n | | 2\n | | 3\n");
}

#[test]
fn goal_state_still_accepts_moves() {
    let goal = replay(
        &PuzzleState::initial(3, 3).unwrap(),
        SOLUTION.map(Move::from),
    )
    .unwrap();

    assert_eq!(goal.possible_actions(), vec![Move::new(2, 0), Move::new(2, 1)]);
    let undone = goal.transition(2, 0).unwrap();
    assert!(!undone.is_goal_state());
}

#[test]
fn possible_actions_match_successful_transitions() {
    let state = replay(
        &PuzzleState::initial(3, 3).unwrap(),
        [Move::new(0, 2), Move::new(0, 1)],
    )
    .unwrap();

    let actions = state.possible_actions();
    assert_eq!(
        actions,
        vec![Move::new(1, 0), Move::new(2, 0), Move::new(2, 1)]
    );
    for step in actions {
        assert!(state.apply_move(step).is_ok());
    }
    assert!(matches!(
        state.transition(0, 1),
        Err(InvalidMove::DiskTooLarge { disk: 3, target: 2, .. })
    ));
}

#[test]
fn checkpoint_resumes_midway() {
    let halfway = replay(
        &PuzzleState::initial(3, 3).unwrap(),
        SOLUTION[..4].iter().copied().map(Move::from),
    )
    .unwrap();

    let json = Checkpoint::capture(&halfway).to_json().unwrap();
    let resumed = Checkpoint::from_json(&json).unwrap().restore().unwrap();

    let finished = replay(&resumed, SOLUTION[4..].iter().copied().map(Move::from)).unwrap();
    assert!(finished.is_goal_state());
    assert_eq!(finished.moves(), SOLUTION.map(Move::from).to_vec());
}
