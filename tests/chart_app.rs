mod common;

use std::cell::RefCell;
use std::rc::Rc;

use line_chart_wasm::application::{
    ButtonMark, ButtonState, ChartApplication, DragHandle, GeometrySource, RenderSurface, TintWidths,
};
use line_chart_wasm::domain::animation::{AnimationConfig, MinimapFrame, PlotFrame};
use line_chart_wasm::domain::chart::Window;
use line_chart_wasm::domain::errors::{AppError, RenderingResult};
use line_chart_wasm::domain::state::{Action, StateKey};

type Journal = Rc<RefCell<Vec<String>>>;

struct FakeGeometry {
    journal: Journal,
    width: Option<f64>,
}

impl GeometrySource for FakeGeometry {
    fn ticks_width(&self, chart: usize) -> Option<f64> {
        self.journal.borrow_mut().push(format!("read ticks {}", chart));
        self.width
    }

    fn controls_width(&self, chart: usize) -> Option<f64> {
        self.journal.borrow_mut().push(format!("read controls {}", chart));
        self.width
    }
}

#[derive(Default)]
struct RecordingSurface {
    journal: Journal,
    plots: Vec<PlotFrame>,
    tints: Vec<TintWidths>,
    buttons: Vec<Vec<ButtonState>>,
    night: Vec<(bool, String)>,
    attached: Option<usize>,
    broken: Option<usize>,
}

impl RenderSurface for RecordingSurface {
    fn is_attached(&self, chart: usize) -> bool {
        self.attached.is_none_or(|count| chart < count)
    }

    fn write_plot(&mut self, chart: usize, frame: &PlotFrame) -> RenderingResult<()> {
        if self.broken == Some(chart) {
            return Err(AppError::RenderingError(format!("plot {} is gone", chart)));
        }
        self.journal.borrow_mut().push(format!("write plot {}", chart));
        self.plots.push(frame.clone());
        Ok(())
    }

    fn write_minimap(&mut self, chart: usize, _frame: &MinimapFrame) -> RenderingResult<()> {
        self.journal.borrow_mut().push(format!("write minimap {}", chart));
        Ok(())
    }

    fn write_tints(&mut self, chart: usize, tints: TintWidths) -> RenderingResult<()> {
        self.journal.borrow_mut().push(format!("write tints {}", chart));
        self.tints.push(tints);
        Ok(())
    }

    fn write_buttons(&mut self, chart: usize, buttons: &[ButtonState]) -> RenderingResult<()> {
        self.journal.borrow_mut().push(format!("write buttons {}", chart));
        self.buttons.push(buttons.to_vec());
        Ok(())
    }

    fn write_night(&mut self, night: bool, switch_text: &str) -> RenderingResult<()> {
        self.journal.borrow_mut().push("write night".to_string());
        self.night.push((night, switch_text.to_string()));
        Ok(())
    }
}

fn mounted(charts: usize) -> (ChartApplication, FakeGeometry, RecordingSurface) {
    let mut app = ChartApplication::new(AnimationConfig::default());
    app.init_page(440.0, 0.0);
    for _ in 0..charts {
        app.mount_chart(common::ramp_and_flat(), 0.0);
    }
    let journal = Journal::default();
    let geometry = FakeGeometry { journal: Rc::clone(&journal), width: Some(400.0) };
    let surface = RecordingSurface { journal, ..RecordingSurface::default() };
    (app, geometry, surface)
}

#[test]
fn frame_reads_every_chart_before_writing() {
    let (mut app, geometry, mut surface) = mounted(2);
    app.run_frame(0.0, &geometry, &mut surface);

    let journal = surface.journal.borrow();
    let first_write = journal.iter().position(|e| e.starts_with("write")).expect("writes");
    let last_read = journal.iter().rposition(|e| e.starts_with("read")).expect("reads");
    assert!(last_read < first_write, "{:?}", journal);
    assert_eq!(journal.iter().filter(|e| e.starts_with("read")).count(), 4);
}

#[test]
fn measurement_happens_once_until_resize() {
    let (mut app, geometry, mut surface) = mounted(1);
    app.run_frame(0.0, &geometry, &mut surface);
    app.run_frame(16.0, &geometry, &mut surface);
    let reads = |j: &Journal| j.borrow().iter().filter(|e| e.starts_with("read")).count();
    assert_eq!(reads(&surface.journal), 2);

    assert!(app.resize(900.0, 20.0));
    app.run_frame(32.0, &geometry, &mut surface);
    assert_eq!(reads(&surface.journal), 4);
}

#[test]
fn first_frame_writes_page_and_tints() {
    let (mut app, geometry, mut surface) = mounted(1);
    let animating = app.run_frame(0.0, &geometry, &mut surface);

    assert!(!animating);
    assert_eq!(surface.night, vec![(true, "Switch to Day Mode".to_string())]);
    assert_eq!(surface.tints.len(), 1);
    assert!((surface.tints[0].left - 360.0).abs() < 1e-9);
    assert_eq!(surface.tints[0].right, 0.0);
    assert!((surface.plots[0].ticks_width - 4000.0).abs() < 1e-6);
    assert!(surface.buttons[0].iter().all(|b| b.checked && !b.disabled && b.mark.is_none()));
}

#[test]
fn toggle_updates_buttons_and_refuses_last_line() {
    let (mut app, geometry, mut surface) = mounted(1);
    app.run_frame(0.0, &geometry, &mut surface);

    assert!(app.toggle_line(0, 0, 10.0));
    assert!(!app.toggle_line(0, 1, 20.0));
    assert!(app.run_frame(30.0, &geometry, &mut surface));

    let buttons = surface.buttons.last().expect("buttons written");
    assert_eq!(buttons[0].mark, Some(ButtonMark::Grow));
    assert!(!buttons[0].checked);
    assert!(buttons[1].checked && buttons[1].disabled);
    assert!(!app.run_frame(200.0, &geometry, &mut surface));
}

#[test]
fn window_updates_are_throttled() {
    let (mut app, _, _) = mounted(1);
    assert_eq!(app.set_window(0, 0.5, 1.0, 0.0), Ok(None));
    assert_eq!(app.set_window(0, 0.4, 1.0, 10.0), Ok(Some(100.0)));
    assert_eq!(app.chart_state(0).expect("state").coord, Window::new(0.5, 1.0));

    assert_eq!(app.flush_throttled(50.0), Some(100.0));
    assert_eq!(app.flush_throttled(100.0), None);
    assert_eq!(app.chart_state(0).expect("state").coord, Window::new(0.4, 1.0));

    assert!(app.set_window(0, 0.7, 0.6, 300.0).is_err());
    assert!(app.set_window(5, 0.1, 0.6, 300.0).is_err());
}

#[test]
fn drag_needs_measured_controls() {
    let (mut app, geometry, mut surface) = mounted(1);
    assert!(!app.drag_start(0, DragHandle::LeftFrame));

    app.run_frame(0.0, &geometry, &mut surface);
    assert!(app.drag_start(0, DragHandle::LeftFrame));
    assert_eq!(app.drag_move(0, -40.0, 200.0), Ok(None));
    app.drag_end(0);

    let coord = app.chart_state(0).expect("state").coord;
    assert!((coord.left - 0.8).abs() < 1e-9);
    assert_eq!(coord.right, 1.0);
}

#[test]
fn night_toggle_and_unknown_keys() {
    let (mut app, geometry, mut surface) = mounted(1);
    assert_eq!(app.night(), Some(true));
    assert!(!app.set_night(true, 0.0));
    assert!(app.set_night(false, 0.0));
    app.run_frame(0.0, &geometry, &mut surface);
    assert_eq!(surface.night.last(), Some(&(false, "Switch To Night Mode".to_string())));

    assert!(!app.dispatch(StateKey::Chart(7), Action::Day, 0.0));
}

#[test]
fn line_points_use_mount_baseline() {
    let (app, _, _) = mounted(1);
    let points = app.line_points(0, 1).expect("line exists");
    assert!(points.starts_with(&format!("0 {}", 50.0 / 99.0)));
    assert_eq!(app.line_points(0, 2), None);
}

#[test]
fn toggle_of_unknown_line_leaves_hidden_set_alone() {
    let (mut app, geometry, mut surface) = mounted(1);
    app.run_frame(0.0, &geometry, &mut surface);

    assert!(!app.toggle_line(0, 7, 10.0));
    assert!(app.chart_state(0).expect("state").hidden_lines.is_empty());

    assert!(app.toggle_line(0, 0, 20.0));
    let state = app.chart_state(0).expect("state");
    assert_eq!(state.hidden_lines.iter().copied().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn unchanged_coord_starts_no_transition() {
    let (mut app, _, _) = mounted(1);
    let started = app.with_plot(0, |plot| plot.scale_x_transition().start_time());

    assert!(!app.dispatch(StateKey::Chart(0), Action::Coord(Window::new(0.9, 1.0)), 50.0));
    assert_eq!(app.with_plot(0, |plot| plot.scale_x_transition().start_time()), started);
}

#[test]
fn charts_without_layout_are_measured_again() {
    let (mut app, geometry, mut surface) = mounted(1);
    let unlaid = FakeGeometry { journal: Rc::clone(&geometry.journal), width: None };
    app.run_frame(0.0, &unlaid, &mut surface);
    assert!(!app.drag_start(0, DragHandle::LeftFrame));

    app.run_frame(16.0, &geometry, &mut surface);
    assert!(app.drag_start(0, DragHandle::Window));
    assert_eq!(app.with_plot(0, |plot| plot.axis_width()), Some(400.0));
}

#[test]
fn unattached_charts_wait_for_their_handles() {
    let (mut app, geometry, mut surface) = mounted(2);
    surface.attached = Some(1);
    app.run_frame(0.0, &geometry, &mut surface);
    {
        let journal = surface.journal.borrow();
        assert!(!journal.iter().any(|e| e.ends_with(" 1")), "{:?}", journal);
    }
    assert_eq!(surface.night.len(), 1);

    surface.attached = None;
    app.run_frame(16.0, &geometry, &mut surface);
    let journal = surface.journal.borrow();
    assert!(journal.contains(&"read ticks 1".to_string()));
    assert!(journal.contains(&"write buttons 1".to_string()));
}

#[test]
fn failed_chart_write_does_not_stop_the_frame() {
    let (mut app, geometry, mut surface) = mounted(2);
    surface.broken = Some(0);
    assert!(app.toggle_line(0, 0, 0.0));

    assert!(app.run_frame(10.0, &geometry, &mut surface));
    assert!(surface.journal.borrow().contains(&"write buttons 1".to_string()));
    assert!(!surface.journal.borrow().contains(&"write buttons 0".to_string()));
    assert_eq!(surface.night.len(), 1);

    surface.broken = None;
    assert!(app.run_frame(20.0, &geometry, &mut surface));
    assert!(surface.journal.borrow().contains(&"write buttons 0".to_string()));
}
