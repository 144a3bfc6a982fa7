use chrono::{Datelike, NaiveDate};

use super::project::Project;

/// Parse a date in the dataset's `YYYY-MM-DD` format.
///
/// Anything else (including partial or out-of-range dates) is `None`; such
/// values are simply left out of timeline math rather than treated as errors.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// The global window every timeline bar is projected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// The earliest date covered by the dataset.
    pub start: NaiveDate,
    /// The latest date covered by the dataset.
    pub end: NaiveDate,
}

/// One calendar-month label on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTick {
    /// First day of the month.
    pub date: NaiveDate,
    /// Horizontal position as a percentage of the range width.
    pub percent: f64,
    /// True when this tick starts a new year relative to the previous tick.
    pub new_year: bool,
}

impl TimeRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Derive the range from every project and system date in the dataset.
    ///
    /// Milestone dates deliberately do not widen the range. Unparseable dates
    /// are skipped. With no usable dates at all the range falls back to the
    /// current calendar year.
    pub fn compute(projects: &[Project]) -> Self {
        let mut dates: Vec<NaiveDate> = Vec::new();

        for project in projects {
            dates.extend(parse_date(&project.start_date));
            dates.extend(parse_date(&project.end_date));
            for system in &project.systems {
                dates.extend(parse_date(&system.start_date));
                dates.extend(parse_date(&system.end_date));
            }
        }

        match (dates.iter().min(), dates.iter().max()) {
            (Some(&start), Some(&end)) => Self { start, end },
            _ => Self::current_year(),
        }
    }

    /// January 1st through December 31st of the current year.
    pub fn current_year() -> Self {
        let year = chrono::Local::now().date_naive().year();
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default(),
        }
    }

    /// Whole days spanned by the range, never less than 1.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }

    /// Position of a date as a percentage of the range width.
    ///
    /// Not clamped: dates before the range go negative, dates after exceed
    /// 100. Callers decide whether out-of-range positions are drawn.
    pub fn offset_percent(&self, date: NaiveDate) -> f64 {
        let days = (date - self.start).num_days() as f64;
        days / self.total_days() as f64 * 100.0
    }

    /// Left edge and width of a date span, both as percentages.
    pub fn span_percent(&self, start: NaiveDate, end: NaiveDate) -> (f64, f64) {
        let left = self.offset_percent(start);
        let width = (end - start).num_days() as f64 / self.total_days() as f64 * 100.0;
        (left, width)
    }

    /// Whether a date lies inside the range, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar-month axis labels from the month containing `start` up to and
    /// including `end`. Steps whole months, not 30-day blocks, so tick spacing
    /// reflects actual month lengths.
    pub fn month_ticks(&self) -> Vec<MonthTick> {
        let mut ticks = Vec::new();
        let mut year = self.start.year();
        let mut month = self.start.month();
        let mut previous_year: Option<i32> = None;

        while let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            if date > self.end {
                break;
            }
            ticks.push(MonthTick {
                date,
                percent: self.offset_percent(date),
                new_year: previous_year.map_or(false, |y| y != year),
            });
            previous_year = Some(year);
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }

        ticks
    }

    /// Position for a marker at `date`, only when the date is inside the range.
    pub fn marker_percent(&self, date: NaiveDate) -> Option<f64> {
        self.contains(date).then(|| self.offset_percent(date))
    }

    /// Position for the today line, absent when today is outside the range.
    pub fn today_marker(&self) -> Option<f64> {
        self.marker_percent(chrono::Local::now().date_naive())
    }
}
