//! Envelope Tests
//!
//! Persisting parameter sets and replaying them into fresh hosts.

use std::rc::Rc;

use liveparam::codable::{codables_from_json, codables_to_json};
use liveparam::{
    impl_enumerable, Change, Color, Live, LiveBool, LiveCodable, LiveColor, LiveEnum, LiveFloat,
    LiveHost, LiveInt, LiveKind, LivePayload, LivePoint, LiveResolution, LiveSize, Node, Point,
    Resolution, Size,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Fit,
    Fill,
    Stretch,
}

impl_enumerable!(Mode {
    Fit = 0 => "Fit",
    Fill = 1 => "Fill",
    Stretch = 5 => "Stretch",
});

struct Layout {
    visible: LiveBool,
    columns: LiveInt,
    opacity: LiveFloat,
    origin: LivePoint,
    extent: LiveSize,
    background: LiveColor,
    resolution: LiveResolution,
    mode: LiveEnum<Mode>,
}

impl Layout {
    fn new() -> Self {
        Self {
            visible: LiveBool::new("Visible", true),
            columns: LiveInt::with_range("Columns", 3, 1..=12),
            opacity: LiveFloat::new("Opacity", 1.0),
            origin: LivePoint::new("Origin", Point::ZERO),
            extent: LiveSize::new("Extent", Size::new(1.0, 1.0)),
            background: LiveColor::new("Background Color", Color::BLACK),
            resolution: LiveResolution::new("Resolution", Resolution::FULL_HD),
            mode: LiveEnum::new("Mode", Mode::Fit),
        }
    }

    fn edited() -> Self {
        let mut layout = Self::new();
        let node: Rc<dyn Node> = Rc::new(Quiet);
        layout.link_live(&node);
        layout.visible.set_value(false);
        layout.columns.set_value(-4);
        layout.opacity.set_value(0.125);
        layout.origin.set_value(Point::new(-0.5, 3.0));
        layout.extent.set_value(Size::new(0.0, 2.5));
        layout.background.set_value(Color::rgba(0.2, 0.4, 0.6, 0.8));
        layout.resolution.set_value(Resolution::new(640, 480));
        layout.mode.set_value(Mode::Stretch);
        layout
    }
}

impl LiveHost for Layout {
    fn live_list(&self) -> Vec<&dyn Live> {
        vec![
            &self.visible,
            &self.columns,
            &self.opacity,
            &self.origin,
            &self.extent,
            &self.background,
            &self.resolution,
            &self.mode,
        ]
    }

    fn live_list_mut(&mut self) -> Vec<&mut dyn Live> {
        vec![
            &mut self.visible,
            &mut self.columns,
            &mut self.opacity,
            &mut self.origin,
            &mut self.extent,
            &mut self.background,
            &mut self.resolution,
            &mut self.mode,
        ]
    }
}

struct Quiet;

impl Node for Quiet {
    fn invalidate(&self) {}
}

#[test]
fn test_every_kind_round_trips() {
    let source = Layout::edited();
    let json = codables_to_json(&source.live_codables()).unwrap();

    let mut target = Layout::new();
    let node: Rc<dyn Node> = Rc::new(Quiet);
    target.link_live(&node);
    let report = target.apply_live_codables(&codables_from_json(&json).unwrap());

    assert!(report.is_clean());
    assert_eq!(report.changed.len(), 8);
    for (restored, original) in target.live_list().into_iter().zip(source.live_list()) {
        assert_eq!(restored.get(), original.get(), "{}", original.name());
    }
}

#[test]
fn test_kinds_follow_declaration_order() {
    let kinds: Vec<LiveKind> = Layout::new()
        .live_codables()
        .iter()
        .map(LiveCodable::kind)
        .collect();
    assert_eq!(kinds, LiveKind::ALL.to_vec());
}

#[test]
fn test_replay_of_current_values_is_silent() {
    let mut layout = Layout::new();
    let node: Rc<dyn Node> = Rc::new(Quiet);
    layout.link_live(&node);

    let report = layout.apply_live_codables(&layout.live_codables());
    assert_eq!(report.unchanged.len(), 8);
    assert!(report.changed.is_empty());
}

#[test]
fn test_mismatched_kind_leaves_value() {
    let mut layout = Layout::new();
    let codable = LiveCodable::new("opacity", LivePayload::Int { int: 0 });

    let err = layout.apply_live_codable(&codable).unwrap_err();
    assert_eq!(err.error_code(), "KIND_MISMATCH");
    assert_eq!(layout.opacity.value(), 1.0);
}

#[test]
fn test_stale_enum_index_loads_first_case() {
    let mut layout = Layout::new();
    layout.mode.set_value(Mode::Fill);

    let stale = LiveCodable::from_json(r#"{"type_name":"mode","kind":"enum","index":3}"#).unwrap();
    let change = layout.apply_live_codable(&stale).unwrap();
    assert!(change.is_changed());
    assert_ne!(change, Change::Unchanged);
    assert_eq!(layout.mode.value(), Mode::Fit);
}

#[test]
fn test_background_type_name() {
    let layout = Layout::new();
    let codable = layout.live("background-color").and_then(|live| live.to_codable());
    assert_eq!(
        codable,
        Some(LiveCodable::new(
            "background-color",
            LivePayload::Color { color: Color::BLACK }
        ))
    );
}
