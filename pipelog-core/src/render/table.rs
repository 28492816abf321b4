use crate::stats::{Report, StatLine};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub show_stddev: bool,
    /// Emphasize the header with terminal escapes.
    pub color: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Column headers for a report titled `title`.
pub fn stat_line_headers(title: &str, show_stddev: bool) -> Vec<String> {
    let mut headers = vec![title.to_string(), "Reqs".to_string(), "Avg".to_string()];
    if show_stddev {
        headers.push("Std Dev".to_string());
    }
    headers.extend(["Min", "Max", "95th"].map(String::from));
    headers
}

/// One table row: key, request count, then millisecond values.
pub fn stat_line_cells(line: &StatLine, show_stddev: bool) -> Vec<String> {
    let s = &line.summary;
    let mut cells = vec![line.key.clone(), s.count.to_string(), millis(s.mean)];
    if show_stddev {
        cells.push(millis(s.stddev));
    }
    cells.extend([millis(s.min), millis(s.max), millis(s.p95)]);
    cells
}

fn millis(value: f64) -> String {
    format!("{value:.3}ms")
}

pub fn render_table(report: &Report, style: TableStyle) -> String {
    let headers = stat_line_headers(&report.title, style.show_stddev);
    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|line| stat_line_cells(line, style.show_stddev))
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = border(&widths);
    let mut out = String::new();

    out.push_str(&border);

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| {
            let cell = pad(h, *w, Align::Left);
            if style.color {
                cell.bold().to_string()
            } else {
                cell
            }
        })
        .collect::<Vec<_>>();
    push_row(&mut out, &header);
    out.push_str(&border);

    for row in &rows {
        let cells = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let align = if i == 0 { Align::Left } else { Align::Right };
                pad(cell, *w, align)
            })
            .collect::<Vec<_>>();
        push_row(&mut out, &cells);
    }

    if !rows.is_empty() {
        out.push_str(&border);
    }

    out
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}
