use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use week_view::api::{EngineSnapshot, WeekViewConfig, WeekViewEngine};
use week_view::core::CalendarEvent;
use week_view::interaction::ScrollTelemetry;
use week_view::render::{NullRenderer, StyleSheet};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new("standup", "Daily standup", at(2024, 3, 15, 9, 0), at(2024, 3, 15, 9, 30))
            .with_color("#3b82f6"),
        CalendarEvent::new("review", "Sprint review", at(2024, 3, 18, 14, 0), at(2024, 3, 18, 15, 0)),
    ]
}

#[test]
fn render_delivers_header_then_five_columns() {
    let config = WeekViewConfig::new(date(2024, 3, 15), 7)
        .with_format_date_header("ddd D")
        .with_events(sample_events());
    let mut engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.header_count, 1);
    assert_eq!(renderer.column_count, 5);
    assert_eq!(renderer.last_header_date, Some(date(2024, 3, 15)));
    assert_eq!(renderer.last_header_format.as_deref(), Some("ddd D"));
    assert_eq!(
        renderer.last_column_starts,
        vec![
            date(2024, 3, 1),
            date(2024, 3, 8),
            date(2024, 3, 15),
            date(2024, 3, 22),
            date(2024, 3, 29),
        ]
    );
    assert_eq!(renderer.last_event_count, 2);
    assert_eq!(engine.render_count(), 1);
}

#[test]
fn render_after_swipe_reflects_new_pivot() {
    let config = WeekViewConfig::new(date(2024, 1, 30), 1);
    let mut engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.on_scroll_settled(ScrollTelemetry::at_page(3.0, 1875.0));
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_header_date, Some(date(2024, 1, 31)));
    assert_eq!(renderer.last_column_starts[2], date(2024, 1, 31));
    assert_eq!(renderer.last_column_starts[4], date(2024, 2, 2));
}

#[test]
fn render_model_exposes_windows_and_time_axis() {
    let config = WeekViewConfig::new(date(2024, 3, 15), 3).with_locale("de");
    let engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");

    let model = engine.render_model();
    assert_eq!(model.locale, "de");
    assert_eq!(model.time_labels.len(), 48);
    assert_eq!(model.time_labels.first().map(String::as_str), Some("0:00"));
    assert_eq!(model.time_labels.last().map(String::as_str), Some("23:30"));
    assert_eq!(
        model.window_start_dates(),
        [
            date(2024, 3, 9),
            date(2024, 3, 12),
            date(2024, 3, 15),
            date(2024, 3, 18),
            date(2024, 3, 21),
        ]
    );
}

#[test]
fn custom_styles_merge_over_defaults() {
    let mut overrides = StyleSheet::new();
    overrides.set_property("timeColumn", "width", json!(72));
    overrides.set_property("eventStyle", "opacity", json!(0.8));
    let config = WeekViewConfig::new(date(2024, 3, 15), 7).with_custom_styles(overrides);
    let mut engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");

    let time_column = engine.styles().slot("timeColumn").expect("timeColumn");
    assert_eq!(time_column.get("width"), Some(&json!(72)));
    assert_eq!(time_column.get("paddingTop"), Some(&json!(10)));
    assert!(engine.styles().event_style().is_some());

    engine.set_custom_styles(&StyleSheet::new());
    assert!(engine.styles().event_style().is_none());
    assert_eq!(
        engine.styles().slot("timeColumn"),
        StyleSheet::week_view_defaults().slot("timeColumn")
    );
}

#[test]
fn locale_and_format_updates_only_touch_presentation() {
    let config = WeekViewConfig::new(date(2024, 3, 15), 7);
    let mut engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");
    let windows = *engine.windows();

    engine.set_locale("pt-br").expect("locale");
    engine.set_date_format("D MMM").expect("format");
    assert!(engine.set_locale("").is_err());
    assert!(engine.set_date_format("").is_err());

    assert_eq!(engine.locale().as_str(), "pt-br");
    assert_eq!(engine.date_format(), "D MMM");
    assert_eq!(*engine.windows(), windows);
}

#[test]
fn event_press_requires_known_id() {
    let config = WeekViewConfig::new(date(2024, 3, 15), 7).with_events(sample_events());
    let mut engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");

    let pressed = std::rc::Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
    let sink = pressed.clone();
    engine
        .register_listener(Box::new(
            week_view::extensions::SwipeCallbacks::new("host")
                .on_event_press(move |id| sink.borrow_mut().push(id.to_owned())),
        ))
        .expect("register");

    engine.press_event("review").expect("press");
    assert!(engine.press_event("missing").is_err());
    assert_eq!(*pressed.borrow(), vec!["review".to_owned()]);

    engine.set_events(Vec::new());
    assert!(engine.press_event("review").is_err());
}

#[test]
fn snapshot_serializes_as_plain_json() {
    let config = WeekViewConfig::new(date(2024, 3, 15), 7).with_events(sample_events());
    let mut engine = WeekViewEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.queue_scroll_settled(ScrollTelemetry::at_page(3.0, 1575.0));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.event_ids, vec!["standup".to_owned(), "review".to_owned()]);
    assert!(snapshot.pending_recenter.is_some());
    assert!(snapshot.pending_settle.is_some());

    let value = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(value["pivot"], json!("2024-03-15"));
    assert_eq!(value["day_span"], json!(7));
    let parsed: EngineSnapshot = serde_json::from_value(value).expect("parse");
    assert_eq!(parsed, snapshot);
}
