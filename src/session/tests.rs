use std::time::Instant;

use super::*;
use crate::config::KeybindingsConfig;
use crate::draw::{Color, PALETTE, color::BLACK};
use crate::input::{InputEvent, Key, Tool};

fn create_test_session() -> Session {
    let action_map = KeybindingsConfig::default()
        .build_action_map()
        .expect("default keybindings are valid");
    Session::new(200, 150, BLACK, 10, action_map).expect("session creation")
}

async fn stroke(session: &mut Session, x1: f64, y1: f64, x2: f64, y2: f64) {
    session
        .handle_event(InputEvent::PointerDown { x: x1, y: y1 })
        .await
        .unwrap();
    session
        .handle_event(InputEvent::PointerMove { x: x2, y: y2 })
        .await
        .unwrap();
    session.handle_event(InputEvent::PointerUp).await.unwrap();
}

async fn press(session: &mut Session, key: Key) {
    session
        .handle_event(InputEvent::KeyPress { key })
        .await
        .unwrap();
}

async fn release(session: &mut Session, key: Key) {
    session
        .handle_event(InputEvent::KeyRelease { key })
        .await
        .unwrap();
}

#[tokio::test]
async fn tap_leaves_a_dot_and_one_snapshot() {
    let mut session = create_test_session();
    assert_eq!(session.history().len(), 1);

    session
        .handle_event(InputEvent::PointerDown { x: 50.0, y: 50.0 })
        .await
        .unwrap();
    session.handle_event(InputEvent::PointerUp).await.unwrap();

    let px = session.pixel(50, 50).unwrap();
    assert_eq!(px.a, 255);
    // Brush size 10 means a radius of 5 around the tap point.
    let edge = session.pixel(50, 53).unwrap();
    assert_eq!(edge.a, 255);
    let outside = session.pixel(50, 58).unwrap();
    assert_eq!(outside.a, 0);

    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn duplicate_pointer_up_records_once() {
    let mut session = create_test_session();
    stroke(&mut session, 10.0, 10.0, 60.0, 60.0).await;
    // Release and leave can both arrive for the same stroke.
    session.handle_event(InputEvent::PointerUp).await.unwrap();

    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn pointer_move_without_down_is_ignored() {
    let mut session = create_test_session();
    session
        .handle_event(InputEvent::PointerMove { x: 30.0, y: 30.0 })
        .await
        .unwrap();

    assert_eq!(session.pixel(30, 30).unwrap().a, 0);
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn undo_and_redo_round_trip_strokes() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 20.0, 80.0, 20.0).await;
    stroke(&mut session, 20.0, 60.0, 80.0, 60.0).await;

    assert_eq!(session.pixel(50, 20).unwrap().a, 255);
    assert_eq!(session.pixel(50, 60).unwrap().a, 255);

    assert!(session.undo().await.unwrap());
    assert_eq!(session.pixel(50, 20).unwrap().a, 255);
    assert_eq!(session.pixel(50, 60).unwrap().a, 0);

    assert!(session.undo().await.unwrap());
    assert_eq!(session.pixel(50, 20).unwrap().a, 0);

    assert!(session.redo().await.unwrap());
    assert!(session.redo().await.unwrap());
    assert_eq!(session.pixel(50, 20).unwrap().a, 255);
    assert_eq!(session.pixel(50, 60).unwrap().a, 255);
}

#[tokio::test]
async fn undo_at_initial_state_posts_notice() {
    let mut session = create_test_session();
    assert!(!session.undo().await.unwrap());
    assert_eq!(
        session.active_notice(Instant::now()),
        Some("Nothing to undo!")
    );
}

#[tokio::test]
async fn drawing_after_undo_discards_redo_branch() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 20.0, 80.0, 20.0).await;
    stroke(&mut session, 20.0, 60.0, 80.0, 60.0).await;
    assert!(session.undo().await.unwrap());

    stroke(&mut session, 20.0, 100.0, 80.0, 100.0).await;

    assert!(!session.redo().await.unwrap());
    assert_eq!(
        session.active_notice(Instant::now()),
        Some("Nothing to redo!")
    );
}

#[tokio::test]
async fn failed_restore_leaves_cursor_on_displayed_state() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 20.0, 80.0, 20.0).await;
    // A snapshot that will not decode, as the redo target.
    session
        .history
        .record(crate::history::Snapshot::from_png(vec![0xde, 0xad]));
    assert!(session.undo().await.unwrap());
    assert_eq!(session.history().index(), 1);

    assert!(session.redo().await.is_err());

    // Cursor rolled back, pixels untouched.
    assert_eq!(session.history().index(), 1);
    assert_eq!(session.pixel(50, 20).unwrap().a, 255);

    // History navigation still works from the consistent cursor.
    assert!(session.undo().await.unwrap());
    assert_eq!(session.pixel(50, 20).unwrap().a, 0);
}

#[tokio::test]
async fn eraser_clears_pixels_to_transparent() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 40.0, 80.0, 40.0).await;
    assert_eq!(session.pixel(50, 40).unwrap().a, 255);

    press(&mut session, Key::Char('e')).await;
    assert_eq!(session.tool(), Tool::Eraser);

    stroke(&mut session, 40.0, 40.0, 60.0, 40.0).await;
    assert_eq!(session.pixel(50, 40).unwrap().a, 0);
    // Untouched part of the stroke survives.
    assert_eq!(session.pixel(25, 40).unwrap().a, 255);
}

#[tokio::test]
async fn swatch_selection_sets_color_and_pen() {
    let mut session = create_test_session();
    session.activate_eraser();

    assert!(session.select_swatch(1));
    assert_eq!(session.color(), PALETTE[1]);
    assert_eq!(session.active_swatch(), Some(1));
    assert_eq!(session.tool(), Tool::Pen);

    assert!(!session.select_swatch(PALETTE.len()));
    assert_eq!(session.active_swatch(), Some(1));
}

#[tokio::test]
async fn custom_color_clears_swatch_marker() {
    let mut session = create_test_session();
    assert_eq!(session.active_swatch(), Some(0));

    session.set_color(Color::new(0.5, 0.25, 0.75, 1.0));
    assert_eq!(session.active_swatch(), None);
    assert_eq!(session.tool(), Tool::Pen);
}

#[tokio::test]
async fn ctrl_z_undoes_and_ctrl_y_redoes() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 20.0, 80.0, 20.0).await;

    press(&mut session, Key::Ctrl).await;
    press(&mut session, Key::Char('z')).await;
    assert_eq!(session.pixel(50, 20).unwrap().a, 0);

    press(&mut session, Key::Char('y')).await;
    assert_eq!(session.pixel(50, 20).unwrap().a, 255);
    release(&mut session, Key::Ctrl).await;

    // Without Ctrl held, 'z' is not bound.
    press(&mut session, Key::Char('z')).await;
    assert_eq!(session.pixel(50, 20).unwrap().a, 255);
}

#[tokio::test]
async fn tool_and_export_shortcuts() {
    let mut session = create_test_session();

    press(&mut session, Key::Char('e')).await;
    assert_eq!(session.tool(), Tool::Eraser);
    press(&mut session, Key::Char('p')).await;
    assert_eq!(session.tool(), Tool::Pen);

    assert!(!session.take_export_request());
    press(&mut session, Key::Ctrl).await;
    press(&mut session, Key::Char('s')).await;
    assert!(session.take_export_request());
    // The flag is consumed on retrieval.
    assert!(!session.take_export_request());
}

#[tokio::test]
async fn clear_blanks_canvas_but_stays_undoable() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 20.0, 80.0, 20.0).await;

    session.clear().unwrap();
    assert_eq!(session.pixel(50, 20).unwrap().a, 0);
    assert_eq!(session.history().len(), 3);

    assert!(session.undo().await.unwrap());
    assert_eq!(session.pixel(50, 20).unwrap().a, 255);
}

#[tokio::test]
async fn resize_blanks_canvas_and_keeps_history() {
    let mut session = create_test_session();
    stroke(&mut session, 20.0, 20.0, 80.0, 20.0).await;

    session.resize(400, 300).unwrap();
    assert_eq!(session.canvas().width(), 400);
    assert_eq!(session.pixel(50, 20).unwrap().a, 0);
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn canvas_bounds_offset_pointer_events() {
    let mut session = create_test_session();
    session.set_canvas_bounds(crate::input::CanvasBounds::new(100.0, 50.0));

    session
        .handle_event(InputEvent::PointerDown { x: 150.0, y: 90.0 })
        .await
        .unwrap();
    session.handle_event(InputEvent::PointerUp).await.unwrap();

    assert_eq!(session.pixel(50, 40).unwrap().a, 255);
    assert_eq!(session.pixel(150, 90).unwrap().a, 0);
}
