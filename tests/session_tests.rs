//! Session tests - actions and frame ticks driving the store

use tui_life::core::{Grid, GridStore};
use tui_life::engine::{LifeConfig, Session};
use tui_life::types::{Coord, GridPreset, LifeAction, SpeedPreset, TICK_MS};

fn blinker_session(interval_ms: u32) -> Session {
    let grid = Grid::with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
    Session::with_store(GridStore::from_grid(grid, 1), interval_ms, 0.5).unwrap()
}

/// Feed `frames` ticks of `TICK_MS`; returns generations advanced.
fn run_frames(session: &mut Session, frames: u32) -> u32 {
    (0..frames).map(|_| session.tick(TICK_MS)).sum()
}

#[test]
fn test_stopped_session_never_advances() {
    let mut session = blinker_session(100);
    assert_eq!(run_frames(&mut session, 500), 0);
    assert_eq!(session.status().generation, 0);
}

#[test]
fn test_start_then_stop() {
    let mut session = blinker_session(100);
    assert!(session.apply_action(LifeAction::Start));
    assert!(!session.apply_action(LifeAction::Start));

    // 7 frames = 112ms: one generation
    assert_eq!(run_frames(&mut session, 7), 1);

    assert!(session.apply_action(LifeAction::Stop));
    assert_eq!(run_frames(&mut session, 100), 0);
    assert_eq!(session.status().generation, 1);
    assert!(!session.status().running);
}

#[test]
fn test_toggle_play() {
    let mut session = blinker_session(100);
    session.apply_action(LifeAction::TogglePlay);
    assert!(session.status().running);
    session.apply_action(LifeAction::TogglePlay);
    assert!(!session.status().running);
}

#[test]
fn test_step_advances_exactly_once() {
    let mut session = blinker_session(100);
    assert!(session.apply_action(LifeAction::Step));
    assert_eq!(session.status().generation, 1);
    assert_eq!(session.store().get_cell(2, 1), Ok(true));
    assert!(!session.status().running);
}

#[test]
fn test_speed_presets_start_playback() {
    let mut session = blinker_session(100);
    session.apply_action(LifeAction::Slow);
    let status = session.status();
    assert!(status.running);
    assert_eq!(status.interval_ms, 1000);
    assert_eq!(status.speed, Some(SpeedPreset::Slow));

    // 62 frames = 992ms: not yet
    assert_eq!(run_frames(&mut session, 62), 0);
    assert_eq!(run_frames(&mut session, 1), 1);

    session.apply_action(LifeAction::Fast);
    assert_eq!(session.status().interval_ms, 100);
}

#[test]
fn test_speed_change_discards_partial_interval() {
    let mut session = blinker_session(100);
    session.apply_action(LifeAction::Start);
    // 96ms accumulated toward the next generation.
    assert_eq!(run_frames(&mut session, 6), 0);

    session.apply_action(LifeAction::Fast);
    // Without the reset the next frame would fire.
    assert_eq!(run_frames(&mut session, 1), 0);
    assert_eq!(run_frames(&mut session, 6), 1);
}

#[test]
fn test_long_frame_catch_up_is_capped() {
    let mut session = blinker_session(100);
    session.apply_action(LifeAction::Start);
    assert_eq!(session.tick(10_000), 4);
    assert_eq!(session.status().generation, 4);
}

#[test]
fn test_clear_and_resize_keep_running_state() {
    let mut session = blinker_session(100);
    session.apply_action(LifeAction::Start);
    run_frames(&mut session, 13);
    assert_eq!(session.status().generation, 2);

    session.apply_action(LifeAction::Clear);
    let status = session.status();
    assert_eq!(status.generation, 0);
    assert_eq!(status.population, 0);
    assert!(status.running);

    session.apply_action(LifeAction::Resize(GridPreset::Medium));
    let status = session.status();
    assert_eq!((status.rows, status.columns), (40, 60));
    assert_eq!(status.generation, 0);
    assert!(status.running);
}

#[test]
fn test_randomize_uses_session_density() {
    let grid = Grid::new(10, 10).unwrap();
    let mut session = Session::with_store(GridStore::from_grid(grid, 3), 100, 1.0).unwrap();
    session.apply_action(LifeAction::Randomize);
    assert_eq!(session.status().population, 100);
    assert_eq!(session.status().generation, 0);
}

#[test]
fn test_cursor_edit_flow() {
    let mut session = blinker_session(100);
    session.apply_action(LifeAction::CursorRight);
    session.apply_action(LifeAction::CursorDown);
    assert_eq!(session.cursor(), Coord::new(1, 1));

    session.apply_action(LifeAction::ToggleCursor);
    assert_eq!(session.store().get_cell(1, 1), Ok(true));
    session.apply_action(LifeAction::ToggleCursor);
    assert_eq!(session.store().get_cell(1, 1), Ok(false));
}

#[test]
fn test_toggle_at_moves_cursor() {
    let mut session = blinker_session(100);
    assert_eq!(session.toggle_at(Coord::new(4, 3)), Ok(true));
    assert_eq!(session.cursor(), Coord::new(4, 3));
}

#[test]
fn test_session_from_config() {
    let config = LifeConfig::from_lookup(|key: &str| match key {
        "LIFE_PRESET" => Some("small".to_string()),
        "LIFE_INTERVAL_MS" => Some("250".to_string()),
        _ => None,
    })
    .unwrap();
    let session = Session::new(&config, 11).unwrap();
    let status = session.status();
    assert_eq!((status.rows, status.columns), (20, 30));
    assert_eq!(status.interval_ms, 250);
    assert_eq!(status.speed, None);
}
