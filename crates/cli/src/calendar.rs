//! iCalendar export for a single exam.

use chrono::{Duration, NaiveDateTime};
use examsearch_core::Exam;

/// Parse an "HH:MM" duration into minutes. Exams without a parseable
/// duration default to two hours.
fn duration_minutes(duration: Option<&str>) -> i64 {
    duration
        .and_then(|d| {
            let (h, m) = d.split_once(':')?;
            let h: i64 = h.trim().parse().ok()?;
            let m: i64 = m.trim().parse().ok()?;
            Some(h * 60 + m)
        })
        .unwrap_or(120)
}

// Floating local time: exam times have no timezone attached, so the
// event must not claim UTC.
fn ics_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

fn slug(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Render an exam as a VCALENDAR document. Returns `None` when the exam
/// has no start date or time to anchor the event.
pub fn exam_to_ics(exam: &Exam) -> Option<String> {
    let date = exam.start_date?;
    let time = exam.start_time?;
    let start = date.and_time(time);
    let end = start + Duration::minutes(duration_minutes(exam.duration.as_deref()));

    let location = exam.location.as_deref().unwrap_or("");
    let description = format!(
        "Exam: {}\\nTitle: {}\\nLocation: {}",
        exam.name, exam.title, location
    );
    let uid = format!("{}-{}@examsearch", slug(&exam.name), slug(&exam.title));

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//examsearch//EN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}", ics_timestamp(start)),
        format!("DTSTART:{}", ics_timestamp(start)),
        format!("DTEND:{}", ics_timestamp(end)),
        format!("SUMMARY:{} - {}", exam.name, exam.title),
        format!("DESCRIPTION:{description}"),
        format!("LOCATION:{location}"),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];
    Some(lines.join("\r\n") + "\r\n")
}
