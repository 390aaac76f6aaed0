pub mod calendar_event;
pub mod date_math;
pub mod date_window;
pub mod day_span;
pub mod time_axis;

pub use calendar_event::CalendarEvent;
pub use date_math::shift_date;
pub use date_window::{
    CENTER_PAGE_INDEX, DateWindow, WINDOW_BUFFER_SIZE, prepare_date_windows, slot_offset,
};
pub use day_span::DaySpan;
pub use time_axis::{TIME_LABELS_COUNT, TIME_SLOT_MINUTES, TimeAxis, TimeLabel, generate_time_labels};
