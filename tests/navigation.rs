// tests/navigation.rs
use grid_robot::{
    Command, NavigationError, Navigator, Orientation, Pose, RoomSize, StartPosition, navigate,
};

fn setup() -> (RoomSize, Navigator) {
    let room = RoomSize::new(5, 5);
    (room, Navigator::new(room))
}

fn start(x: i32, y: i32, orientation: &str) -> StartPosition {
    StartPosition::new(x, y, orientation)
}

#[test]
fn test_single_forward_move() {
    let (room, _) = setup();
    let report = navigate(room, &start(1, 2, "N"), "F").unwrap();
    assert_eq!(report, Pose::new(1, 3, Orientation::North));
}

#[test]
fn test_turns_and_moves() {
    let (room, _) = setup();

    // R: face East at (1,1). FF: (3,1). L: face North. FF: (3,3).
    let report = navigate(room, &start(1, 1, "N"), "RFFLFF").unwrap();
    assert_eq!(report, Pose::new(3, 3, Orientation::North));
}

#[test]
fn test_longer_route_leaves_room() {
    let (room, _) = setup();

    // L: face West at (1,2). F: (0,2). F: (-1,2) is outside.
    let err = navigate(room, &start(1, 2, "N"), "LFFRFRFRFF").unwrap_err();
    assert_eq!(err, NavigationError::OutOfBounds { x: -1, y: 2 });
    assert!(!err.is_validation());
}

#[test]
fn test_leaving_west_edge_reports_offending_cell() {
    let (room, _) = setup();
    let err = navigate(room, &start(0, 0, "W"), "F").unwrap_err();
    assert_eq!(err, NavigationError::OutOfBounds { x: -1, y: 0 });
    assert_eq!(err.to_string(), "Out of bounds at -1 0");
}

#[test]
fn test_aborts_on_first_violation() {
    let (room, _) = setup();

    // From y=2 the 3rd F reaches y=4, the 4th would be y=5.
    let err = navigate(room, &start(1, 2, "N"), "FFFFFFFFF").unwrap_err();
    assert_eq!(err, NavigationError::OutOfBounds { x: 1, y: 5 });
}

#[test]
fn test_no_recovery_after_violation() {
    let (room, _) = setup();

    // Turning back after the fatal move must not rescue the run.
    let err = navigate(room, &start(4, 4, "E"), "FLLF").unwrap_err();
    assert_eq!(err, NavigationError::OutOfBounds { x: 5, y: 4 });
}

#[test]
fn test_zero_room_is_rejected() {
    let err = navigate(RoomSize::new(0, 0), &start(0, 0, "N"), "F").unwrap_err();
    assert_eq!(err, NavigationError::InvalidRoomSize);
    assert!(err.is_validation());
}

#[test]
fn test_invalid_command_string_rejected_before_simulation() {
    let (room, _) = setup();

    // 'F' in the middle would otherwise move; nothing is simulated.
    let err = navigate(room, &start(1, 1, "N"), "INVALID").unwrap_err();
    assert_eq!(err, NavigationError::InvalidCommands);
}

#[test]
fn test_validation_precedes_out_of_bounds() {
    let (room, _) = setup();
    let err = navigate(room, &start(0, 0, "W"), "FX").unwrap_err();
    assert_eq!(err, NavigationError::InvalidCommands);
}

#[test]
fn test_bad_orientation_is_rejected() {
    let (room, _) = setup();
    let err = navigate(room, &start(1, 1, "X"), "FF").unwrap_err();
    assert_eq!(err, NavigationError::InvalidOrientation("X".to_string()));
    assert_eq!(err.to_string(), "Invalid orientation. Use N, E, S, or W.");
}

#[test]
fn test_empty_commands_return_start() {
    let (room, navigator) = setup();
    for orientation in Orientation::ALL {
        let pose = Pose::new(2, 3, orientation);
        let report = navigate(room, &StartPosition::from(pose), "").unwrap();
        assert_eq!(report, pose);
        assert_eq!(navigator.run(pose, &[]), Ok(pose));
    }
}

#[test]
fn test_four_turns_close_the_loop() {
    let (_, navigator) = setup();
    for orientation in Orientation::ALL {
        let pose = Pose::new(2, 2, orientation);
        for turn in [Command::Left, Command::Right] {
            let end = navigator.run(pose, &[turn; 4]).unwrap();
            assert_eq!(end, pose, "four {turn:?} turns from {orientation:?}");
        }
    }
}

#[test]
fn test_opposite_turns_cancel() {
    let (_, navigator) = setup();
    for orientation in Orientation::ALL {
        let pose = Pose::new(2, 2, orientation);
        assert_eq!(navigator.run(pose, &[Command::Left, Command::Right]), Ok(pose));
        assert_eq!(navigator.run(pose, &[Command::Right, Command::Left]), Ok(pose));
    }
}

#[test]
fn test_forward_per_heading() {
    let (_, navigator) = setup();
    let cases = [
        (Orientation::North, (2, 3)),
        (Orientation::East, (3, 2)),
        (Orientation::South, (2, 1)),
        (Orientation::West, (1, 2)),
    ];
    for (orientation, (x, y)) in cases {
        let pose = navigator.step(Pose::new(2, 2, orientation), 'F').unwrap();
        assert_eq!(pose, Pose::new(x, y, orientation));
    }
}

#[test]
fn test_step_guards_unknown_token() {
    let (_, navigator) = setup();
    let err = navigator
        .step(Pose::new(1, 1, Orientation::North), 'X')
        .unwrap_err();
    assert_eq!(err, NavigationError::InvalidCommand('X'));
}

#[test]
fn test_step_turns_match_tables() {
    let (_, navigator) = setup();
    let pose = Pose::new(1, 1, Orientation::North);
    assert_eq!(
        navigator.step(pose, 'L').unwrap().orientation,
        Orientation::West
    );
    assert_eq!(
        navigator.step(pose, 'R').unwrap().orientation,
        Orientation::East
    );
}

#[test]
fn test_trace_lists_every_pose() {
    let (_, navigator) = setup();
    let commands = Command::parse_sequence("FRF").unwrap();
    let poses = navigator
        .trace(Pose::new(0, 0, Orientation::North), &commands)
        .unwrap();

    assert_eq!(
        poses,
        vec![
            Pose::new(0, 0, Orientation::North),
            Pose::new(0, 1, Orientation::North),
            Pose::new(0, 1, Orientation::East),
            Pose::new(1, 1, Orientation::East),
        ]
    );
}

#[test]
fn test_trace_fails_like_run() {
    let (_, navigator) = setup();
    let commands = Command::parse_sequence("FF").unwrap();
    let start = Pose::new(0, 3, Orientation::North);
    assert_eq!(
        navigator.trace(start, &commands),
        Err(NavigationError::OutOfBounds { x: 0, y: 5 })
    );
    assert_eq!(
        navigator.run(start, &commands),
        Err(NavigationError::OutOfBounds { x: 0, y: 5 })
    );
}

#[test]
fn test_in_bounds_walk_ends_inside() {
    // Boustrophedon sweep of a 4x3 room never leaves it.
    let room = RoomSize::new(4, 3);
    let report = navigate(room, &start(0, 0, "E"), "FFFLFLFFFRFRFFF").unwrap();
    assert!(room.contains(report.position));
    assert_eq!(report, Pose::new(3, 2, Orientation::East));
}
