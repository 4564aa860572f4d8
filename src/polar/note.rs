//! Taekwondo session note.

use crate::output::{Note, file_component};
use crate::polar::types::SessionRecord;

const CHART: &str = r#"#### Heart Rate
```chartsview
#-----------------#
#- chart type    -#
#-----------------#
type: Line

#-----------------#
#- chart data    -#
#-----------------#
data: |
  dataviewjs:
  return dv.current()
           ['hr-data']
           .map(entry => ({ time: entry.time, hr: entry.hr }));

#-----------------#
#- chart options -#
#-----------------#
options:
  height: 200
  xField: "time"
  yField: "hr"
  smooth: true
  xAxis:
    label:
      autoHide: true
      autoRotate: true
  yAxis:
    title:
      text: "Heart Rate (bpm)"
  annotations:
    - type: "line"
      start: ["min", 128]
      end: ["max", 128]
      style:
        stroke: "rgba(88, 10, 10, 1.0)"
      text:
        content: "Fat/Fit"
        offsetY: -2
        style:
          textAlign: "left"
          fontSize: 10
          fill: "rgba(88, 10, 10, 1.0)"
          textBaseline: "bottom"
```
"#;

fn slice(s: &str, start: usize, end: usize) -> &str {
    let end = end.min(s.len());
    s.get(start.min(end)..end).unwrap_or("")
}

/// Reshapes a `dd-mm-yyyy` export date into `yyyy-mm-dd`.
///
/// Works on fixed character offsets only; the result is not calendar-checked.
pub fn format_date(date: &str) -> String {
    let dd = slice(date, 0, 2);
    let mm = slice(date, 3, 5);
    let yyyy = slice(date, 6, 10);
    format!("{yyyy}-{mm}-{dd}")
}

pub fn note_file_name(session: &SessionRecord) -> String {
    format!("{} - Taekwondo.md", file_component(&format_date(&session.date)))
}

/// Renders the note for one session.
pub fn render_note(session: &SessionRecord) -> Note {
    let date = format_date(&session.date);

    let hr_data: String = session
        .samples
        .iter()
        .map(|sample| format!("  - {{ time: {}, hr: {} }}\n", sample.time, sample.heart_rate))
        .collect();

    let contents = format!(
        "---
type: exercise
date: {date}
graph-key: journal
exercise: Taekwondo
start-time: {start}
duration: {duration}
calories: {calories}
hr-avg: {avg}
hr-max: {max}
hr-data:
{hr_data}
---
[[{date}]]
{CHART}",
        start = session.start_time,
        duration = session.duration,
        calories = session.calories,
        avg = session.average_hr,
        max = session.max_hr,
    );

    Note::new(note_file_name(session), contents)
}
