use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of half-hour slots on the vertical axis of one day.
pub const TIME_LABELS_COUNT: usize = 48;
pub const TIME_SLOT_MINUTES: u16 = 30;

/// One slot label on the day's vertical time axis.
///
/// Rendered as `H:MM` with an unpadded hour (`0:00`, `9:30`, `23:30`). The
/// text does not depend on locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeLabel {
    hour: u8,
    minute: u8,
}

impl TimeLabel {
    fn from_slot(slot: usize) -> Self {
        let minutes = slot * usize::from(TIME_SLOT_MINUTES);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

#[must_use]
pub fn generate_time_labels() -> Vec<TimeLabel> {
    (0..TIME_LABELS_COUNT).map(TimeLabel::from_slot).collect()
}

/// Time axis computed once per engine and shared by every rendered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    labels: Vec<TimeLabel>,
    texts: Vec<String>,
}

impl TimeAxis {
    #[must_use]
    pub fn new() -> Self {
        let labels = generate_time_labels();
        let texts = labels.iter().map(ToString::to_string).collect();
        Self { labels, texts }
    }

    #[must_use]
    pub fn labels(&self) -> &[TimeLabel] {
        &self.labels
    }

    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{TIME_LABELS_COUNT, TimeAxis, generate_time_labels};

    #[test]
    fn covers_the_day_in_half_hour_steps() {
        let labels = generate_time_labels();
        assert_eq!(labels.len(), TIME_LABELS_COUNT);
        assert_eq!(labels[0].to_string(), "0:00");
        assert_eq!(labels[1].to_string(), "0:30");
        assert_eq!(labels[19].to_string(), "9:30");
        assert_eq!(labels[20].to_string(), "10:00");
        assert_eq!(labels[47].to_string(), "23:30");
    }

    #[test]
    fn labels_are_strictly_increasing() {
        let labels = generate_time_labels();
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(
            labels
                .windows(2)
                .all(|pair| pair[1].minutes_since_midnight() - pair[0].minutes_since_midnight()
                    == 30)
        );
    }

    #[test]
    fn axis_texts_mirror_labels() {
        let axis = TimeAxis::new();
        assert_eq!(axis.len(), TIME_LABELS_COUNT);
        assert!(!axis.is_empty());
        for (label, text) in axis.labels().iter().zip(axis.texts()) {
            assert_eq!(&label.to_string(), text);
        }
    }
}
