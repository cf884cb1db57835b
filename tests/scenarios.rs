// tests/scenarios.rs
use table_robot::{
    Command, CommandProcessor, CommandResult, IGNORED_UNPLACED, NOT_PLACED, OutputChannel,
    Position, RecordingSink, Robot, Table,
};

fn setup() -> CommandProcessor<RecordingSink> {
    CommandProcessor::new(Robot::new(Table::default()), RecordingSink::new())
}

fn reports(processor: &CommandProcessor<RecordingSink>) -> Vec<&str> {
    processor.sink().messages(OutputChannel::Report)
}

#[test]
fn test_move_north_from_origin() {
    let mut p = setup();
    p.process_all(["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
    assert_eq!(reports(&p), vec!["0,1,NORTH"]);
}

#[test]
fn test_turn_left_on_the_spot() {
    let mut p = setup();
    p.process_all(["PLACE 0,0,NORTH", "LEFT", "REPORT"]);
    assert_eq!(reports(&p), vec!["0,0,WEST"]);
}

#[test]
fn test_multi_step_route() {
    let mut p = setup();
    p.process_all(["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"]);
    assert_eq!(reports(&p), vec!["3,3,NORTH"]);
}

#[test]
fn test_move_off_south_edge_is_rejected() {
    let mut p = setup();
    let results = p.process_all(["PLACE 0,0,SOUTH", "MOVE", "REPORT"]);

    assert_eq!(
        results[1],
        CommandResult::failed("Cannot move robot - would fall off the table")
    );
    assert_eq!(reports(&p), vec!["0,0,SOUTH"]);
}

#[test]
fn test_commands_before_place_produce_no_report() {
    let mut p = setup();
    let results = p.process_all(["MOVE", "LEFT", "REPORT"]);

    // Skipped by the session gate: soft successes with a warning each.
    assert!(results.iter().all(|r| *r == CommandResult::ok()));
    assert!(reports(&p).is_empty());
    assert_eq!(
        p.sink().messages(OutputChannel::Warning),
        vec![IGNORED_UNPLACED; 3]
    );
    assert!(!p.robot().is_placed());

    // Without the gate, REPORT itself refuses to run on an unplaced robot.
    let mut robot = Robot::new(Table::default());
    assert_eq!(
        Command::Report.execute(&mut robot),
        CommandResult::failed(NOT_PLACED)
    );
}

#[test]
fn test_malformed_place_is_an_invalid_command() {
    let mut p = setup();
    let results = p.process_all(["PLACE 1,2", "PLACE a,b,NORTH"]);

    assert_eq!(
        results,
        vec![
            CommandResult::failed("Invalid command: PLACE 1,2"),
            CommandResult::failed("Invalid command: PLACE a,b,NORTH"),
        ]
    );
    // Invalid lines are neither executed nor gated.
    assert!(p.sink().is_empty());
    assert!(!p.has_valid_placement());
}

#[test]
fn test_oversized_place_is_rejected_like_any_off_table_place() {
    let mut p = setup();
    let results = p.process_all(["PLACE 99999999999,0,NORTH", "MOVE", "PLACE 0,0,EAST", "REPORT"]);

    assert_eq!(
        results[0],
        CommandResult::failed("Cannot place robot at position 99999999999,0 - position is invalid")
    );
    assert_eq!(
        p.sink().messages(OutputChannel::Warning),
        vec![IGNORED_UNPLACED]
    );
    assert_eq!(reports(&p), vec!["0,0,EAST"]);
}

#[test]
fn test_invalid_placements_then_valid_one() {
    let mut p = setup();
    let results = p.process_all([
        "PLACE 5,5,NORTH",
        "PLACE -1,0,NORTH",
        "PLACE 0,5,NORTH",
        "PLACE 2,2,NORTH",
        "REPORT",
    ]);

    assert!(!results[0].success);
    assert_eq!(
        results[1].error.as_deref(),
        Some("Invalid command: PLACE -1,0,NORTH")
    );
    assert_eq!(
        results[2].error.as_deref(),
        Some("Cannot place robot at position 0,5 - position is invalid")
    );
    assert_eq!(reports(&p), vec!["2,2,NORTH"]);
}

#[test]
fn test_ignored_commands_do_not_stop_a_batch() {
    let mut p = setup();
    p.process_all(["MOVE", "LEFT", "RIGHT", "REPORT", "PLACE 1,1,SOUTH", "REPORT"]);
    assert_eq!(reports(&p), vec!["1,1,SOUTH"]);
}

#[test]
fn test_case_and_whitespace_insensitive_session() {
    let mut p = setup();
    p.process_all(["  place  1,1,north  ", "  Move  ", "right", "  REPORT  "]);
    assert_eq!(reports(&p), vec!["1,2,EAST"]);
}

#[test]
fn test_replacing_moves_the_robot() {
    let mut p = setup();
    p.process_all(["PLACE 2,2,NORTH", "MOVE", "PLACE 0,0,WEST", "REPORT"]);
    assert_eq!(reports(&p), vec!["0,0,WEST"]);
}

#[test]
fn test_walk_the_perimeter_of_a_rectangular_table() {
    let mut p = CommandProcessor::new(
        Robot::new(Table::new(3, 2).unwrap()),
        RecordingSink::new(),
    );
    p.process_all([
        "PLACE 0,0,EAST",
        "MOVE",
        "MOVE",
        "MOVE", // blocked at x = 2
        "LEFT",
        "MOVE",
        "MOVE", // blocked at y = 1
        "REPORT",
    ]);
    assert_eq!(reports(&p), vec!["2,1,NORTH"]);
    assert_eq!(p.robot().position(), Some(Position::new(2, 1)));
}

#[test]
fn test_reset_rearms_the_gate_between_batches() {
    let mut p = setup();
    p.process_all(["PLACE 2,2,NORTH", "MOVE", "REPORT"]);
    p.reset();
    p.process_all(["REPORT", "PLACE 0,0,SOUTH", "REPORT"]);

    assert_eq!(reports(&p), vec!["2,3,NORTH", "0,0,SOUTH"]);
    assert_eq!(
        p.sink().messages(OutputChannel::Warning),
        vec![IGNORED_UNPLACED]
    );
}
