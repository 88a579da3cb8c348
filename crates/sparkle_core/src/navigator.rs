//! Scene navigation
//!
//! The [`Navigator`] owns the single application window (the *stage*) and
//! the view currently shown in it:
//! - The stage is set exactly once at startup
//! - Views are loaded by name from RON files at navigation time
//! - A history stack allows returning to the previous view
//!
//! # Example
//! ```ignore
//! let mut navigator = Navigator::new("assets/views")
//!     .with_canvas_settings(CanvasSettings::default());
//!
//! navigator.init_stage(window)?;
//! navigator.navigate("welcome")?;
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::active_view::ActiveView;
use crate::canvas::CanvasSettings;
use crate::view::{ViewDescription, ViewLoadError};
use crate::view_validator::{ValidationError, ViewValidator};

/// File extension of view descriptions
pub const VIEW_EXTENSION: &str = "ron";

/// The window a navigator shows views in
pub trait Stage {
    /// Replace the window content: retitle and resize to the view
    fn show_view(&mut self, title: &str, width: u32, height: u32);
}

/// Error type for navigation
#[derive(Debug)]
pub enum NavigationError {
    /// The stage was already set
    AlreadyInitialized,
    /// Navigation requested before the stage was set
    NotInitialized,
    /// No view resource with this name
    NotFound { name: String, path: PathBuf },
    /// The view resource exists but could not be read
    Io { name: String, source: io::Error },
    /// The view resource is not a valid RON view description
    Parse { name: String, source: ron::error::SpannedError },
    /// The view description failed validation
    Invalid { name: String, errors: Vec<ValidationError> },
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::AlreadyInitialized => write!(f, "Stage already initialized"),
            NavigationError::NotInitialized => write!(f, "Stage not initialized"),
            NavigationError::NotFound { name, path } => {
                write!(f, "No view resource found for '{}' ({})", name, path.display())
            }
            NavigationError::Io { name, source } => {
                write!(f, "Could not read view '{}': {}", name, source)
            }
            NavigationError::Parse { name, source } => {
                write!(f, "Could not parse view '{}': {}", name, source)
            }
            NavigationError::Invalid { name, errors } => {
                write!(f, "View '{}' is invalid: ", name)?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigationError::Io { source, .. } => Some(source),
            NavigationError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Swaps views in the application window
pub struct Navigator<S: Stage> {
    /// The application window, set once
    stage: Option<S>,
    /// Directory holding `<name>.ron` view descriptions
    resource_dir: PathBuf,
    /// Settings handed to every canvas created by a view
    canvas_settings: CanvasSettings,
    /// The view on screen
    current: Option<ActiveView>,
    /// Names of previously shown views (top = most recent)
    history: Vec<String>,
}

impl<S: Stage> Navigator<S> {
    /// Create a navigator loading views from `resource_dir`
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            stage: None,
            resource_dir: resource_dir.into(),
            canvas_settings: CanvasSettings::default(),
            current: None,
            history: Vec::new(),
        }
    }

    /// Set the canvas settings used by views created from now on
    pub fn with_canvas_settings(mut self, settings: CanvasSettings) -> Self {
        self.canvas_settings = settings;
        self
    }

    // --- Stage ---

    /// Hand the application window to the navigator
    ///
    /// Fails if a stage has already been set.
    pub fn init_stage(&mut self, stage: S) -> Result<(), NavigationError> {
        if self.stage.is_some() {
            return Err(NavigationError::AlreadyInitialized);
        }
        self.stage = Some(stage);
        Ok(())
    }

    pub fn stage(&self) -> Option<&S> {
        self.stage.as_ref()
    }

    pub fn stage_mut(&mut self) -> Option<&mut S> {
        self.stage.as_mut()
    }

    pub fn is_initialized(&self) -> bool {
        self.stage.is_some()
    }

    // --- Resources ---

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Path a view name resolves to
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.resource_dir.join(format!("{}.{}", name, VIEW_EXTENSION))
    }

    /// Load and validate a view description by name
    pub fn load_view(&self, name: &str) -> Result<ViewDescription, NavigationError> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(NavigationError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        let description = ViewDescription::load(&path).map_err(|e| match e {
            ViewLoadError::Io(source) => NavigationError::Io {
                name: name.to_string(),
                source,
            },
            ViewLoadError::Parse(source) => NavigationError::Parse {
                name: name.to_string(),
                source,
            },
        })?;

        ViewValidator::validate_or_error(&description).map_err(|errors| NavigationError::Invalid {
            name: name.to_string(),
            errors,
        })?;

        Ok(description)
    }

    // --- Navigation ---

    /// Show the view `name`, replacing the current one
    ///
    /// The current view is pushed onto the history stack.
    pub fn navigate(&mut self, name: &str) -> Result<&mut ActiveView, NavigationError> {
        let previous = self.current.as_ref().map(|v| v.name().to_string());
        self.show(name)?;
        if let Some(previous) = previous {
            self.history.push(previous);
        }
        self.current.as_mut().ok_or(NavigationError::NotInitialized)
    }

    /// Return to the previously shown view
    ///
    /// Returns `Ok(false)` when there is no previous view.
    pub fn back(&mut self) -> Result<bool, NavigationError> {
        let Some(name) = self.history.last().cloned() else {
            return Ok(false);
        };
        self.show(&name)?;
        self.history.pop();
        Ok(true)
    }

    fn show(&mut self, name: &str) -> Result<(), NavigationError> {
        if self.stage.is_none() {
            return Err(NavigationError::NotInitialized);
        }

        let description = self.load_view(name)?;
        let view = ActiveView::from_description(&description, &self.canvas_settings);

        if let Some(stage) = self.stage.as_mut() {
            let (width, height) = view.size();
            stage.show_view(view.title(), width, height);
        }

        log::info!(
            "Showing view '{}' ({}x{}, {} widgets)",
            description.name,
            description.width,
            description.height,
            description.widgets.len()
        );
        self.current = Some(view);
        Ok(())
    }

    // --- Current view ---

    pub fn current(&self) -> Option<&ActiveView> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ActiveView> {
        self.current.as_mut()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|v| v.name())
    }

    /// Number of views that `back` can return through
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Debug, Default)]
    struct RecordingStage {
        shown: Vec<(String, u32, u32)>,
    }

    impl Stage for RecordingStage {
        fn show_view(&mut self, title: &str, width: u32, height: u32) {
            self.shown.push((title.to_string(), width, height));
        }
    }

    /// Fresh directory under the system temp dir, unique per test
    fn view_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sparkle_nav_{}_{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_view(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(format!("{}.ron", name)), contents).unwrap();
    }

    fn simple_view(name: &str, width: u32, height: u32) -> String {
        format!(
            r#"ViewDescription(name: "{}", title: Some("Title {}"), width: {}, height: {})"#,
            name, name, width, height
        )
    }

    #[test]
    fn test_init_stage_once() {
        let mut nav: Navigator<RecordingStage> = Navigator::new("unused");
        assert!(!nav.is_initialized());
        assert!(nav.init_stage(RecordingStage::default()).is_ok());
        assert!(nav.is_initialized());
    }

    #[test]
    fn test_second_init_fails() {
        let mut nav: Navigator<RecordingStage> = Navigator::new("unused");
        nav.init_stage(RecordingStage::default()).unwrap();
        let result = nav.init_stage(RecordingStage::default());
        assert!(matches!(result, Err(NavigationError::AlreadyInitialized)));
    }

    #[test]
    fn test_navigate_before_init_fails() {
        let dir = view_dir("before_init");
        write_view(&dir, "welcome", &simple_view("welcome", 320, 240));
        let mut nav: Navigator<RecordingStage> = Navigator::new(&dir);
        assert!(matches!(nav.navigate("welcome"), Err(NavigationError::NotInitialized)));
    }

    #[test]
    fn test_navigate_shows_view_on_stage() {
        let dir = view_dir("shows");
        write_view(&dir, "welcome", &simple_view("welcome", 320, 240));
        let mut nav = Navigator::new(&dir);
        nav.init_stage(RecordingStage::default()).unwrap();

        let view = nav.navigate("welcome").unwrap();
        assert_eq!(view.name(), "welcome");
        assert_eq!(nav.current_name(), Some("welcome"));
        assert_eq!(
            nav.stage().unwrap().shown,
            vec![("Title welcome".to_string(), 320, 240)]
        );
    }

    #[test]
    fn test_missing_view_not_found() {
        let dir = view_dir("missing");
        let mut nav = Navigator::new(&dir);
        nav.init_stage(RecordingStage::default()).unwrap();
        match nav.navigate("nope") {
            Err(NavigationError::NotFound { name, path }) => {
                assert_eq!(name, "nope");
                assert!(path.ends_with("nope.ron"));
            }
            Err(e) => panic!("Expected NotFound, got {}", e),
            Ok(_) => panic!("Expected NotFound"),
        }
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_malformed_view_parse_error() {
        let dir = view_dir("malformed");
        write_view(&dir, "broken", "ViewDescription(name: ");
        let mut nav = Navigator::new(&dir);
        nav.init_stage(RecordingStage::default()).unwrap();
        assert!(matches!(nav.navigate("broken"), Err(NavigationError::Parse { .. })));
    }

    #[test]
    fn test_invalid_view_rejected() {
        let dir = view_dir("invalid");
        write_view(&dir, "zero", &simple_view("zero", 0, 0));
        let mut nav = Navigator::new(&dir);
        nav.init_stage(RecordingStage::default()).unwrap();
        match nav.navigate("zero") {
            Err(NavigationError::Invalid { errors, .. }) => {
                assert_eq!(errors, vec![ValidationError::ZeroSize]);
            }
            Err(e) => panic!("Expected Invalid, got {}", e),
            Ok(_) => panic!("Expected Invalid"),
        }
    }

    #[test]
    fn test_failed_navigation_keeps_current_view() {
        let dir = view_dir("keeps");
        write_view(&dir, "welcome", &simple_view("welcome", 320, 240));
        let mut nav = Navigator::new(&dir);
        nav.init_stage(RecordingStage::default()).unwrap();
        nav.navigate("welcome").unwrap();
        assert!(nav.navigate("missing").is_err());
        assert_eq!(nav.current_name(), Some("welcome"));
        assert_eq!(nav.history_depth(), 0);
    }

    #[test]
    fn test_back_returns_to_previous() {
        let dir = view_dir("back");
        write_view(&dir, "welcome", &simple_view("welcome", 320, 240));
        write_view(&dir, "canvas", &simple_view("canvas", 600, 600));
        let mut nav = Navigator::new(&dir);
        nav.init_stage(RecordingStage::default()).unwrap();

        nav.navigate("welcome").unwrap();
        nav.navigate("canvas").unwrap();
        assert_eq!(nav.history_depth(), 1);

        assert!(nav.back().unwrap());
        assert_eq!(nav.current_name(), Some("welcome"));
        assert_eq!(nav.history_depth(), 0);
        assert!(!nav.back().unwrap());

        let sizes: Vec<(u32, u32)> = nav.stage().unwrap().shown.iter().map(|s| (s.1, s.2)).collect();
        assert_eq!(sizes, vec![(320, 240), (600, 600), (320, 240)]);
    }

    #[test]
    fn test_resolve() {
        let nav: Navigator<RecordingStage> = Navigator::new("assets/views");
        assert_eq!(nav.resolve("canvas"), PathBuf::from("assets/views/canvas.ron"));
    }

    #[test]
    fn test_error_display() {
        let err = NavigationError::NotFound {
            name: "canvas".to_string(),
            path: PathBuf::from("views/canvas.ron"),
        };
        let msg = err.to_string();
        assert!(msg.contains("canvas"));
        assert!(msg.contains("views/canvas.ron"));
        assert_eq!(NavigationError::AlreadyInitialized.to_string(), "Stage already initialized");
    }
}
