use chrono::NaiveDate;
use url::Url;

/// A scheduled task bar on the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A row of the hierarchical schedule. Sub-projects nest one level deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: &'static str,
    pub title: &'static str,
    pub tasks: Vec<Task>,
    pub sub_projects: Vec<ProjectRow>,
    pub is_open: bool,
}

/// Viewport the chart widget is parameterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub now: NaiveDate,
    pub zoom: u8,
    pub side_width: u16,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal calendar date")
}

/// Date range used when the route carries no (or unparseable) dates.
pub fn default_range() -> (NaiveDate, NaiveDate) {
    (ymd(2024, 10, 1), ymd(2024, 12, 15))
}

pub fn chart_window() -> ChartWindow {
    ChartWindow {
        start: ymd(2024, 10, 1),
        end: ymd(2026, 10, 1),
        now: ymd(2024, 10, 26),
        zoom: 2,
        side_width: 300,
    }
}

/// The fixed sample schedule, with the completion and delay-notice tasks
/// stretched over the user-supplied date range.
pub fn sample_schedule(start: NaiveDate, end: NaiveDate) -> Vec<ProjectRow> {
    vec![
        ProjectRow {
            id: "project1",
            title: "Initiation",
            tasks: vec![Task {
                id: "title1",
                title: "Initiate",
                start: ymd(2024, 10, 1),
                end: ymd(2024, 10, 11),
            }],
            sub_projects: vec![],
            is_open: false,
        },
        ProjectRow {
            id: "project3",
            title: "Planning & Design",
            tasks: vec![Task {
                id: "title2",
                title: "Planning & Execution",
                start: ymd(2024, 10, 11),
                end: ymd(2024, 12, 1),
            }],
            sub_projects: vec![],
            is_open: false,
        },
        ProjectRow {
            id: "project4",
            title: "Execution",
            tasks: vec![Task {
                id: "title3",
                title: "Wiring",
                start: ymd(2024, 10, 26),
                end: ymd(2024, 12, 15),
            }],
            sub_projects: vec![
                ProjectRow {
                    id: "sub_project1",
                    title: "Installation",
                    tasks: vec![Task {
                        id: "title5",
                        title: "Completion",
                        start,
                        end,
                    }],
                    sub_projects: vec![],
                    is_open: false,
                },
                ProjectRow {
                    id: "sub_project2",
                    title: "Signoff",
                    tasks: vec![Task {
                        id: "title4",
                        title: "Send Notice of Delay",
                        start,
                        end,
                    }],
                    sub_projects: vec![],
                    is_open: false,
                },
            ],
            is_open: true,
        },
    ]
}

/// Builds the timeline route carrying the date range as query parameters.
pub fn timeline_route(start: NaiveDate, end: NaiveDate) -> String {
    format!("/gantt?startDate={}&endDate={}", start, end)
}

/// Recovers the date range from a timeline route. Missing or unparseable
/// values fall back to the fixed defaults, per parameter.
pub fn parse_timeline_query(route: &str) -> (NaiveDate, NaiveDate) {
    let (mut start, mut end) = default_range();

    let parsed = Url::parse("http://localhost").and_then(|base| base.join(route));
    if let Ok(url) = parsed {
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "startDate" => {
                    if let Ok(date) = value.parse() {
                        start = date;
                    }
                }
                "endDate" => {
                    if let Ok(date) = value.parse() {
                        end = date;
                    }
                }
                _ => {}
            }
        }
    }

    (start, end)
}

/// Plain-text listing of the schedule for terminal display.
pub fn render_schedule(rows: &[ProjectRow]) -> String {
    let mut out = String::new();
    for row in rows {
        render_row(row, 0, &mut out);
    }
    out
}

fn render_row(row: &ProjectRow, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{}{}\n", indent, row.title));
    for task in &row.tasks {
        out.push_str(&format!(
            "{}  {} ({} .. {})\n",
            indent, task.title, task.start, task.end
        ));
    }
    for sub in &row.sub_projects {
        render_row(sub, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_route_round_trip() {
        let route = timeline_route(date(2024, 1, 1), date(2024, 2, 15));
        assert_eq!(route, "/gantt?startDate=2024-01-01&endDate=2024-02-15");
        assert_eq!(
            parse_timeline_query(&route),
            (date(2024, 1, 1), date(2024, 2, 15))
        );
    }

    #[test]
    fn test_missing_parameters_fall_back_to_defaults() {
        assert_eq!(parse_timeline_query("/gantt"), default_range());
        assert_eq!(
            parse_timeline_query("/gantt?startDate=2024-11-05"),
            (date(2024, 11, 5), default_range().1)
        );
    }

    #[test]
    fn test_unparseable_dates_fall_back_per_parameter() {
        let (start, end) = parse_timeline_query("/gantt?startDate=yesterday&endDate=2024-11-20");
        assert_eq!(start, default_range().0);
        assert_eq!(end, date(2024, 11, 20));
    }

    #[test]
    fn test_sample_schedule_carries_user_range() {
        let rows = sample_schedule(date(2024, 11, 1), date(2024, 11, 30));
        assert_eq!(rows.len(), 3);

        let execution = &rows[2];
        assert_eq!(execution.title, "Execution");
        assert!(execution.is_open);
        assert_eq!(execution.sub_projects.len(), 2);

        let signoff = &execution.sub_projects[1];
        assert_eq!(signoff.tasks[0].title, "Send Notice of Delay");
        assert_eq!(signoff.tasks[0].start, date(2024, 11, 1));
        assert_eq!(signoff.tasks[0].end, date(2024, 11, 30));
    }

    #[test]
    fn test_render_schedule_nests_sub_projects() {
        let rows = sample_schedule(date(2024, 11, 1), date(2024, 11, 30));
        let rendered = render_schedule(&rows);

        assert!(rendered.contains("Initiation\n"));
        assert!(rendered.contains("  Wiring (2024-10-26 .. 2024-12-15)\n"));
        assert!(rendered.contains("  Signoff\n"));
        assert!(rendered.contains("    Send Notice of Delay (2024-11-01 .. 2024-11-30)\n"));
    }
}
