//! Navigation and canvas integration tests
//!
//! These run against the view descriptions shipped in `assets/views`.

use std::path::PathBuf;

use sparkle_core::{
    CanvasSettings, DrawList, NavigationError, Navigator, Stage, UiAction, Vec2, ViewDescription,
    ViewValidator,
};

#[derive(Default)]
struct TestStage {
    titles: Vec<String>,
    size: (u32, u32),
}

impl Stage for TestStage {
    fn show_view(&mut self, title: &str, width: u32, height: u32) {
        self.titles.push(title.to_string());
        self.size = (width, height);
    }
}

fn views_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/views")
}

fn make_navigator() -> Navigator<TestStage> {
    let mut navigator = Navigator::new(views_dir()).with_canvas_settings(CanvasSettings {
        seed: Some(2024),
        ..CanvasSettings::default()
    });
    navigator.init_stage(TestStage::default()).unwrap();
    navigator
}

#[test]
fn test_shipped_views_are_valid() {
    for name in ["welcome", "canvas"] {
        let path = views_dir().join(format!("{}.ron", name));
        let view = ViewDescription::load(&path).unwrap();
        assert_eq!(view.name, name);
        assert!(ViewValidator::validate_or_error(&view).is_ok());
    }
}

#[test]
fn test_welcome_to_canvas_flow() {
    let mut navigator = make_navigator();
    navigator.navigate("welcome").unwrap();
    assert_eq!(navigator.stage().unwrap().size, (320, 240));

    // Hello button changes the label
    let welcome = navigator.current_mut().unwrap();
    assert!(welcome.pointer_clicked(Vec2::new(160.0, 116.0), 1).is_none());
    assert_eq!(welcome.label_text("welcome_text"), Some("Welcome to Sparkle!"));

    // Open canvas button asks for navigation
    let action = welcome.pointer_clicked(Vec2::new(160.0, 166.0), 1);
    assert_eq!(action, Some(UiAction::Navigate { view: "canvas".to_string() }));

    navigator.navigate("canvas").unwrap();
    assert_eq!(navigator.current_name(), Some("canvas"));
    assert_eq!(navigator.stage().unwrap().size, (600, 600));
    assert_eq!(navigator.stage().unwrap().titles, vec!["Hello!", "Canvas"]);
}

#[test]
fn test_click_then_decay_scenario() {
    let mut navigator = make_navigator();
    let view = navigator.navigate("canvas").unwrap();
    let mut list = DrawList::new(600.0, 600.0);

    view.pointer_clicked(Vec2::new(50.0, 50.0), 1);
    assert_eq!(view.canvas().unwrap().particle_count(), 100);

    for _ in 0..180 {
        view.advance_frame(&mut list);
    }
    assert_eq!(view.canvas().unwrap().particle_count(), 0);
}

#[test]
fn test_second_stage_init_is_fatal_state_error() {
    let mut navigator = make_navigator();
    let result = navigator.init_stage(TestStage::default());
    assert!(matches!(result, Err(NavigationError::AlreadyInitialized)));
}

#[test]
fn test_unknown_view_not_found() {
    let mut navigator = make_navigator();
    assert!(matches!(
        navigator.navigate("settings"),
        Err(NavigationError::NotFound { .. })
    ));
}
