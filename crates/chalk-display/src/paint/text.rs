//! Plain-text painter.
//!
//! Columns are sized by terminal display width, so wide (CJK) characters take
//! two columns. Tabs are expanded to four spaces; other control characters
//! are passed through and may misalign borders.

use unicode_width::UnicodeWidthStr;

use crate::presentation::{CellContent, PresentationNode, Table};

const EMPTY_TABLE: &str = "(empty table)";
const EMPTY_LIST: &str = "(empty list)";
const ERROR_PREFIX: &str = "#ERROR: ";
const TAB: &str = "    ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Draw box-drawing borders instead of `+`, `-` and `|`.
    pub unicode: bool,
}

struct Borders {
    horizontal: char,
    vertical: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

const ASCII: Borders = Borders {
    horizontal: '-',
    vertical: '|',
    top: ['+', '+', '+'],
    middle: ['+', '+', '+'],
    bottom: ['+', '+', '+'],
};

const UNICODE: Borders = Borders {
    horizontal: '─',
    vertical: '│',
    top: ['┌', '┬', '┐'],
    middle: ['├', '┼', '┤'],
    bottom: ['└', '┴', '┘'],
};

/// Paint a node as lines of text, without a trailing newline.
pub fn paint_text(node: &PresentationNode, style: &TextStyle) -> String {
    let borders = if style.unicode { &UNICODE } else { &ASCII };
    paint_block(node, borders).join("\n")
}

fn paint_block(node: &PresentationNode, borders: &Borders) -> Vec<String> {
    match node {
        PresentationNode::Table(table) => paint_table(table, borders),
        PresentationNode::List(items) => {
            if items.is_empty() {
                return vec![EMPTY_LIST.to_string()];
            }
            let mut lines = Vec::new();
            for item in items {
                for (i, line) in paint_block(item, borders).into_iter().enumerate() {
                    let prefix = if i == 0 { "- " } else { "  " };
                    lines.push(format!("{}{}", prefix, line));
                }
            }
            lines
        }
        PresentationNode::Error(message) => text_lines(message)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{}{}", ERROR_PREFIX, line)
                } else {
                    format!("{:width$}{}", "", line, width = ERROR_PREFIX.len())
                }
            })
            .collect(),
    }
}

fn paint_table(table: &Table, borders: &Borders) -> Vec<String> {
    if table.rows.is_empty() {
        return vec![EMPTY_TABLE.to_string()];
    }

    let blocks: Vec<Vec<Vec<String>>> = table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| match &cell.content {
                    CellContent::Text(text) => text_lines(text),
                    CellContent::Node(node) => paint_block(node, borders),
                })
                .collect()
        })
        .collect();

    let columns = table.column_count();
    let mut widths = vec![0usize; columns];
    for row in &blocks {
        for (col, block) in row.iter().enumerate() {
            let width = block.iter().map(|l| l.width()).max().unwrap_or(0);
            widths[col] = widths[col].max(width);
        }
    }

    let mut lines = vec![rule(&widths, borders.top, borders.horizontal)];
    for (i, row) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(rule(&widths, borders.middle, borders.horizontal));
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for line_idx in 0..height {
            let mut line = String::new();
            line.push(borders.vertical);
            for (col, width) in widths.iter().enumerate() {
                let text = row
                    .get(col)
                    .and_then(|block| block.get(line_idx))
                    .map(String::as_str)
                    .unwrap_or("");
                line.push(' ');
                line.push_str(text);
                line.push_str(&" ".repeat(width.saturating_sub(text.width()) + 1));
                line.push(borders.vertical);
            }
            lines.push(line);
        }
    }
    lines.push(rule(&widths, borders.bottom, borders.horizontal));
    lines
}

fn text_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.replace('\t', TAB)).collect()
}

/// A horizontal border line: `[left, junction, right]` around runs of `fill`.
fn rule(widths: &[usize], corners: [char; 3], fill: char) -> String {
    let [left, junction, right] = corners;
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(junction);
        }
        line.extend(std::iter::repeat_n(fill, width + 2));
    }
    line.push(right);
    line
}
