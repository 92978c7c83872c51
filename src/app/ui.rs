use std::io::Write;

use crossterm::{
    queue,
    style::{self as term, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table, Widget},
};
use rust_decimal::Decimal;

use crate::{error::Result, models::Report};

const TITLE: &str = "TEFAS Index";
const HEADERS: [&str; 8] = [
    "Name",
    "Title",
    "Purchase Date",
    "Total Shares",
    "Total Worth",
    "P/L (today)",
    "P/L (this week)",
    "P/L (all time)",
];
// Columns from "Total Shares" on are right aligned.
const FIRST_NUMERIC_COLUMN: usize = 3;
const COLUMN_SPACING: u16 = 2;

struct TableCell {
    text: String,
    color: Option<Color>,
}

impl TableCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn worth(value: &Decimal, currency: &str) -> Self {
        Self::plain(format!("{:.4} {}", value, currency))
    }

    fn profit(value: &Decimal, currency: &str) -> Self {
        let color = if *value > Decimal::ZERO {
            Color::Green
        } else if *value < Decimal::ZERO {
            Color::Red
        } else {
            Color::Yellow
        };

        Self {
            text: format!("{:.4} {}", value, currency),
            color: Some(color),
        }
    }
}

fn table_rows(report: &Report) -> Vec<Vec<TableCell>> {
    let currency = report.currency();

    let mut rows: Vec<Vec<TableCell>> = report
        .profits()
        .iter()
        .map(|profits| {
            vec![
                TableCell::plain(profits.code().clone()),
                TableCell::plain(profits.title().clone()),
                TableCell::plain(profits.purchase_date().to_string()),
                TableCell::plain(profits.quantity().normalize().to_string()),
                TableCell::worth(profits.total_worth(), currency),
                TableCell::profit(profits.pl_today(), currency),
                TableCell::profit(profits.pl_week(), currency),
                TableCell::profit(profits.pl_all_time(), currency),
            ]
        })
        .collect();

    let total = report.total();
    rows.push(vec![
        TableCell::plain("N/A"),
        TableCell::plain("Total Portfolio"),
        TableCell::plain("N/A"),
        TableCell::plain("N/A"),
        TableCell::worth(total.total_worth(), currency),
        TableCell::profit(total.pl_today(), currency),
        TableCell::profit(total.pl_week(), currency),
        TableCell::profit(total.pl_all_time(), currency),
    ]);

    rows
}

/// Lays the report out as a bordered table in an off-screen buffer sized to fit it.
pub fn render_buffer(report: &Report) -> Buffer {
    let rows = table_rows(report);

    let widths: Vec<u16> = HEADERS
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .map(|row| row[column].text.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0) as u16
        })
        .collect();

    let width = widths.iter().sum::<u16>() + COLUMN_SPACING * (widths.len() as u16 - 1) + 2;
    let width = width.max(TITLE.len() as u16 + 2);
    // borders, header, header margin, one line per row
    let height = 2 + 2 + rows.len() as u16;

    let header = Row::new(HEADERS.iter().enumerate().map(|(column, header)| {
        Cell::from(align(header.to_string(), column)).style(Style::default().fg(Color::Cyan))
    }))
    .bottom_margin(1);

    let row_count = rows.len();
    let table_rows = rows.into_iter().enumerate().map(|(index, row)| {
        let cells = row.into_iter().enumerate().map(|(column, cell)| {
            let style = cell
                .color
                .map(|color| Style::default().fg(color))
                .unwrap_or_default();
            Cell::from(align(cell.text, column)).style(style)
        });

        let row = Row::new(cells);
        if index + 1 == row_count {
            row.style(Style::default().add_modifier(Modifier::BOLD))
        } else {
            row
        }
    });

    let table = Table::new(table_rows, widths.iter().map(|w| Constraint::Length(*w)))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(Block::bordered().title(Line::from(TITLE).centered()));

    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer
}

fn align(text: String, column: usize) -> Line<'static> {
    if column >= FIRST_NUMERIC_COLUMN {
        Line::from(text).alignment(Alignment::Right)
    } else {
        Line::from(text)
    }
}

/// The rendered table as plain text, one string per terminal line.
pub fn render_lines(report: &Report) -> Vec<String> {
    let buffer = render_buffer(report);
    let width = buffer.area.width as usize;

    buffer
        .content
        .chunks(width)
        .map(|line| {
            line.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Writes the table to `out`, with ANSI colours when `use_color` is set.
pub fn print_report<W: Write>(report: &Report, out: &mut W, use_color: bool) -> Result<()> {
    let buffer = render_buffer(report);
    let width = buffer.area.width as usize;

    for line in buffer.content.chunks(width) {
        let mut start = 0;
        while start < line.len() {
            let fg = line[start].fg;
            let bold = line[start].modifier.contains(Modifier::BOLD);

            let mut end = start;
            let mut text = String::new();
            while end < line.len()
                && line[end].fg == fg
                && line[end].modifier.contains(Modifier::BOLD) == bold
            {
                text.push_str(line[end].symbol());
                end += 1;
            }

            if use_color {
                if let Some(color) = term_color(fg) {
                    queue!(out, SetForegroundColor(color))?;
                }
                if bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
            } else {
                queue!(out, Print(text))?;
            }

            start = end;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

fn term_color(color: Color) -> Option<term::Color> {
    match color {
        Color::Green => Some(term::Color::Green),
        Color::Red => Some(term::Color::Red),
        Color::Yellow => Some(term::Color::Yellow),
        Color::Cyan => Some(term::Color::Cyan),
        Color::White => Some(term::Color::White),
        _ => None,
    }
}
