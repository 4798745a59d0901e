use chrono::{Days, NaiveDate};

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 100.0;

// ---------------------------------------------------------------------------
// TimelineScale – affine map between dates and slider positions
// ---------------------------------------------------------------------------

/// Maps `[earliest, latest]` onto the slider range `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineScale {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl TimelineScale {
    /// `latest` is raised to `earliest` when it lies before it, leaving a
    /// zero-length range.
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self {
            earliest,
            latest: latest.max(earliest),
        }
    }

    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Length of the range in whole days.
    pub fn span_days(&self) -> i64 {
        (self.latest - self.earliest).num_days()
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.earliest, self.latest)
    }

    /// Slider position for a date. Dates outside the range are clamped first.
    /// A zero-length range pins the slider at the minimum.
    pub fn slider_for_date(&self, date: NaiveDate) -> f64 {
        let span = self.span_days();
        if span == 0 {
            return SLIDER_MIN;
        }
        let offset = (self.clamp(date) - self.earliest).num_days();
        SLIDER_MIN + offset as f64 / span as f64 * (SLIDER_MAX - SLIDER_MIN)
    }

    /// Date for a slider position, rounded to the nearest day.
    pub fn date_for_slider(&self, position: f64) -> NaiveDate {
        let position = if position.is_nan() {
            SLIDER_MIN
        } else {
            position.clamp(SLIDER_MIN, SLIDER_MAX)
        };
        let fraction = (position - SLIDER_MIN) / (SLIDER_MAX - SLIDER_MIN);
        let offset = (self.span_days() as f64 * fraction).round() as u64;
        self.earliest
            .checked_add_days(Days::new(offset))
            .map_or(self.latest, |d| d.min(self.latest))
    }
}

// ---------------------------------------------------------------------------
// TimelineState – the linked date input and slider
// ---------------------------------------------------------------------------

/// Current timeline filter. `date` and `slider` are kept consistent through
/// `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineState {
    pub enabled: bool,
    pub date: NaiveDate,
    pub slider: f64,
    pub scale: TimelineScale,
}

impl TimelineState {
    /// Disabled timeline positioned on `date` (clamped into the scale).
    pub fn new(scale: TimelineScale, date: NaiveDate) -> Self {
        let date = scale.clamp(date);
        Self {
            enabled: false,
            date,
            slider: scale.slider_for_date(date),
            scale,
        }
    }

    /// Move to a date; the slider follows.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = self.scale.clamp(date);
        self.slider = self.scale.slider_for_date(self.date);
    }

    /// Move the slider; the date follows.
    pub fn set_slider(&mut self, position: f64) {
        self.date = self.scale.date_for_slider(position);
        self.slider = if position.is_nan() {
            SLIDER_MIN
        } else {
            position.clamp(SLIDER_MIN, SLIDER_MAX)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn scale() -> TimelineScale {
        TimelineScale::new(date("2000-01-01"), date("2020-01-01"))
    }

    #[test]
    fn endpoints_map_to_slider_bounds() {
        let s = scale();
        assert_eq!(s.slider_for_date(date("2000-01-01")), 0.0);
        assert_eq!(s.slider_for_date(date("2020-01-01")), 100.0);
        assert_eq!(s.date_for_slider(0.0), date("2000-01-01"));
        assert_eq!(s.date_for_slider(100.0), date("2020-01-01"));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let s = scale();
        assert_eq!(s.slider_for_date(date("1990-01-01")), 0.0);
        assert_eq!(s.slider_for_date(date("2030-01-01")), 100.0);
        assert_eq!(s.date_for_slider(-5.0), date("2000-01-01"));
        assert_eq!(s.date_for_slider(150.0), date("2020-01-01"));
        assert_eq!(s.date_for_slider(f64::NAN), date("2000-01-01"));
    }

    #[test]
    fn midpoint_is_half_the_span() {
        let s = scale();
        let mid = s.date_for_slider(50.0);
        assert_eq!((mid - s.earliest()).num_days(), (s.span_days() as f64 / 2.0).round() as i64);
    }

    #[test]
    fn date_round_trip_within_a_day() {
        let s = scale();
        let mut d = s.earliest();
        while d <= s.latest() {
            let back = s.date_for_slider(s.slider_for_date(d));
            assert!((back - d).num_days().abs() <= 1, "{d} came back as {back}");
            d = d + Days::new(37);
        }
    }

    #[test]
    fn degenerate_range_is_pinned() {
        let day = date("2019-05-25");
        let s = TimelineScale::new(day, day);
        assert_eq!(s.span_days(), 0);
        assert_eq!(s.slider_for_date(day), 0.0);
        assert_eq!(s.slider_for_date(date("2030-01-01")), 0.0);
        assert_eq!(s.date_for_slider(73.0), day);
    }

    #[test]
    fn latest_before_earliest_collapses() {
        let s = TimelineScale::new(date("2030-01-01"), date("2020-01-01"));
        assert_eq!(s.latest(), date("2030-01-01"));
        assert_eq!(s.span_days(), 0);
    }

    #[test]
    fn state_keeps_date_and_slider_linked() {
        let mut state = TimelineState::new(scale(), date("2025-01-01"));
        assert!(!state.enabled);
        assert_eq!(state.date, date("2020-01-01"));
        assert_eq!(state.slider, 100.0);

        state.set_slider(0.0);
        assert_eq!(state.date, date("2000-01-01"));

        state.set_date(date("2010-01-01"));
        let expected = scale().slider_for_date(date("2010-01-01"));
        assert_eq!(state.slider, expected);
    }
}
