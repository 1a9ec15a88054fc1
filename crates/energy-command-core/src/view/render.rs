//! Text rendering of the month calendar.

use chrono::Datelike;

use super::CalendarViewState;
use crate::energy::MonthEnergySnapshot;

const CELL_WIDTH: usize = 7;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render the month as a Sunday-first grid with daily usage.
///
/// Markers: `*` selected day, `+` tasks, `!` demand response event.
pub fn render_month_grid(snapshot: &MonthEnergySnapshot, view: &CalendarViewState) -> String {
    let rule = "─".repeat(CELL_WIDTH * 7);
    let mut output = format!("\n{}\n{}\n", snapshot.label, rule);

    for name in WEEKDAYS {
        output.push_str(&format!("{:>5}  ", name));
    }
    output.push('\n');

    let lead = snapshot.month_start.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<usize>> = vec![None; lead];
    cells.extend((0..snapshot.days.len()).map(Some));

    for week in cells.chunks(7) {
        let mut labels = String::new();
        let mut usage = String::new();
        for cell in week {
            match cell {
                Some(index) => {
                    let day = &snapshot.days[*index];
                    let date = day.date.date();
                    let selected = if date == view.selected_day() { '*' } else { ' ' };
                    let has_tasks = !view.tasks_for_day(day).is_empty();
                    let task_mark = if has_tasks { '+' } else { ' ' };
                    let event_mark = if snapshot.events_on(date).next().is_some() {
                        '!'
                    } else {
                        ' '
                    };
                    labels.push_str(&format!(
                        "{}{:>2}{}{}  ",
                        selected,
                        date.day(),
                        task_mark,
                        event_mark
                    ));
                    usage.push_str(&format!("{:>6.1} ", day.usage_kwh));
                }
                None => {
                    labels.push_str(&" ".repeat(CELL_WIDTH));
                    usage.push_str(&" ".repeat(CELL_WIDTH));
                }
            }
        }
        output.push_str(labels.trim_end());
        output.push('\n');
        output.push_str(usage.trim_end());
        output.push('\n');
    }

    output.push_str(&rule);
    output.push_str("\n* selected  + tasks  ! demand response (kWh per day)\n");
    output
}
