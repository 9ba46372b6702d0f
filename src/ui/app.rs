use crate::config::PricingConfig;
use crate::engine::estimate;
use crate::export::{export_json, EstimateReport};
use crate::form::{apply_action, Direction, FormField, InputAction};
use crate::model::{CalculationResult, ConstructionInput};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;
use tracing::{info, warn};

pub const DEFAULT_SAVE_PATH: &str = "estimate.json";

/// Rows moved by one PageUp/PageDown in the detail panel.
const DETAIL_PAGE: usize = 5;

pub struct App {
    pub input: ConstructionInput,
    pub config: PricingConfig,
    /// Always the estimate of `input` under `config`.
    pub result: CalculationResult,
    pub selected_field: usize,
    pub status: Option<String>,
    pub save_path: PathBuf,
    /// Show the package and handover specs instead of the line items.
    pub show_specs: bool,
    /// First visible row of the detail panel.
    pub detail_scroll: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(input: ConstructionInput, config: PricingConfig) -> Self {
        let result = estimate(&input, &config);
        Self {
            input,
            config,
            result,
            selected_field: 0,
            status: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            show_specs: false,
            detail_scroll: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_field(),
            KeyCode::Down | KeyCode::Char('j') => self.next_field(),
            KeyCode::Left | KeyCode::Char('h') => self.step_selected(Direction::Decrease),
            KeyCode::Right | KeyCode::Char('l') => self.step_selected(Direction::Increase),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.selected().is_toggle() {
                    self.step_selected(Direction::Increase);
                }
            }
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('t') => {
                self.show_specs = !self.show_specs;
                self.detail_scroll = 0;
            }
            KeyCode::PageDown => self.scroll_detail(Direction::Increase),
            KeyCode::PageUp => self.scroll_detail(Direction::Decrease),
            _ => {}
        }
    }

    #[must_use]
    pub fn selected(&self) -> FormField {
        FormField::ALL[self.selected_field]
    }

    fn previous_field(&mut self) {
        if self.selected_field > 0 {
            self.selected_field -= 1;
        }
    }

    fn next_field(&mut self) {
        if self.selected_field < FormField::ALL.len() - 1 {
            self.selected_field += 1;
        }
    }

    /// Rows in whichever detail panel is showing.
    #[must_use]
    pub fn detail_len(&self) -> usize {
        if self.show_specs {
            super::dashboard::spec_lines(&self.input).len()
        } else {
            self.result.items.len()
        }
    }

    fn scroll_detail(&mut self, direction: Direction) {
        let last = self.detail_len().saturating_sub(1);
        self.detail_scroll = match direction {
            Direction::Increase => self.detail_scroll.saturating_add(DETAIL_PAGE).min(last),
            Direction::Decrease => self.detail_scroll.saturating_sub(DETAIL_PAGE),
        };
    }

    fn step_selected(&mut self, direction: Direction) {
        let field = self.selected();
        if !field.is_active(&self.input) {
            return;
        }
        if let Some(action) = field.step(&self.input, direction) {
            self.apply(action);
        }
    }

    /// Folds one edit into the input and recomputes the estimate.
    pub fn apply(&mut self, action: InputAction) {
        self.input = apply_action(&self.input, action, &self.config);
        self.result = estimate(&self.input, &self.config);
        self.status = None;
    }

    fn save(&mut self) {
        let report = EstimateReport {
            pricing_version: &self.config.version,
            input: &self.input,
            result: &self.result,
        };
        self.status = Some(match export_json(&report, &self.save_path) {
            Ok(()) => {
                info!(path = %self.save_path.display(), "estimate saved");
                format!("Saved to {}", self.save_path.display())
            }
            Err(e) => {
                warn!("save failed: {e}");
                format!("Save failed: {e}")
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoundationType, PackageType};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(ConstructionInput::default(), PricingConfig::default())
    }

    fn select(app: &mut App, field: FormField) {
        app.selected_field = FormField::ALL.iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_field, 0);

        for _ in 0..100 {
            app.handle_key(KeyCode::Char('j'));
        }
        assert_eq!(app.selected_field, FormField::ALL.len() - 1);
    }

    #[test]
    fn stepping_recomputes_the_estimate() {
        let mut app = app();
        select(&mut app, FormField::Floors);
        let before = app.result.total_converted_area;

        app.handle_key(KeyCode::Right);

        assert_eq!(app.input.floors, 3);
        assert!(app.result.total_converted_area > before);
        assert_eq!(app.result, estimate(&app.input, &app.config));
    }

    #[test]
    fn enums_cycle_with_left_and_right() {
        let mut app = app();
        select(&mut app, FormField::Package);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.input.package_type, PackageType::Medium);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.input.package_type, PackageType::Premium);
    }

    #[test]
    fn foundation_type_brings_its_default_percent() {
        let mut app = app();
        select(&mut app, FormField::FoundationType);

        app.handle_key(KeyCode::Right);

        assert_eq!(app.input.foundation_type, FoundationType::Strip);
        assert_eq!(app.input.foundation_percent, 50.0);
    }

    #[test]
    fn space_toggles_flags_only() {
        let mut app = app();
        select(&mut app, FormField::Basement);
        app.handle_key(KeyCode::Char(' '));
        assert!(app.input.has_basement);

        select(&mut app, FormField::Width);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.input.width, 5.0);
    }

    #[test]
    fn inactive_fields_ignore_steps() {
        let mut app = app();
        select(&mut app, FormField::DemolitionArea);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.input.demolition_area, 0.0);
    }

    #[test]
    fn save_writes_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimate.json");
        let mut app = app().with_save_path(path.clone());

        app.handle_key(KeyCode::Char('s'));

        assert!(path.exists());
        assert!(app.status.as_deref().unwrap().starts_with("Saved to"));
    }

    #[test]
    fn t_toggles_specs_and_resets_scroll() {
        let mut app = app();
        app.detail_scroll = 2;

        app.handle_key(KeyCode::Char('t'));
        assert!(app.show_specs);
        assert_eq!(app.detail_scroll, 0);
        assert!(app.detail_len() > app.result.items.len());

        app.handle_key(KeyCode::Char('t'));
        assert!(!app.show_specs);
    }

    #[test]
    fn detail_scroll_stays_within_the_panel() {
        let mut app = app();
        app.handle_key(KeyCode::Char('t'));
        let last = app.detail_len() - 1;

        for _ in 0..100 {
            app.handle_key(KeyCode::PageDown);
        }
        assert_eq!(app.detail_scroll, last);

        app.handle_key(KeyCode::PageUp);
        assert_eq!(app.detail_scroll, last - DETAIL_PAGE);
        for _ in 0..100 {
            app.handle_key(KeyCode::PageUp);
        }
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn q_and_esc_quit() {
        let mut esc = app();
        esc.handle_key(KeyCode::Esc);
        assert!(esc.should_quit);

        let mut q = app();
        q.handle_key(KeyCode::Char('q'));
        assert!(q.should_quit);
    }
}
