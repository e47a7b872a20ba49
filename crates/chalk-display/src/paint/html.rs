//! HTML painter.

use crate::presentation::{Cell, CellContent, CellKind, PresentationNode, Table, TableKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HtmlStyle {
    /// Wrap every node in `<div class="ResultDisplay">`.
    pub wrap_nodes: bool,
}

impl Default for HtmlStyle {
    fn default() -> Self {
        HtmlStyle { wrap_nodes: true }
    }
}

/// Paint a node as HTML markup. All text is escaped.
pub fn paint_html(node: &PresentationNode, style: &HtmlStyle) -> String {
    let mut out = String::new();
    write_node(&mut out, node, style);
    out
}

fn write_node(out: &mut String, node: &PresentationNode, style: &HtmlStyle) {
    if style.wrap_nodes {
        out.push_str(r#"<div class="ResultDisplay">"#);
    }
    match node {
        PresentationNode::Table(table) => write_table(out, table, style),
        PresentationNode::List(items) => {
            out.push_str(r#"<ul class="ResultDisplay-list">"#);
            for item in items {
                out.push_str(r#"<li class="ResultDisplay-listItem">"#);
                write_node(out, item, style);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        PresentationNode::Error(message) => {
            out.push_str(r#"<p class="ResultDisplay-error">"#);
            out.push_str(&escape_html(message));
            out.push_str("</p>");
        }
    }
    if style.wrap_nodes {
        out.push_str("</div>");
    }
}

/// Class names for one kind of table, matching the client stylesheet.
struct TableClasses {
    table: &'static str,
    row: &'static str,
    header: &'static str,
    data: &'static str,
}

const VALUE_CLASSES: TableClasses = TableClasses {
    table: "ResultDisplay-table",
    row: "ResultDisplay-row",
    header: "ResultDisplay-cell",
    data: "ResultDisplay-cell",
};

const RECORD_CLASSES: TableClasses = TableClasses {
    table: "ResultDisplay-record",
    row: "ResultDisplay-recordRow",
    header: "ResultDisplay-recordProperty",
    data: "ResultDisplay-recordValue",
};

fn write_table(out: &mut String, table: &Table, style: &HtmlStyle) {
    let classes = match table.kind {
        TableKind::Values => &VALUE_CLASSES,
        TableKind::Record => &RECORD_CLASSES,
    };
    out.push_str(&format!(r#"<table class="{}"><tbody>"#, classes.table));
    for row in &table.rows {
        out.push_str(&format!(r#"<tr class="{}">"#, classes.row));
        for cell in &row.cells {
            write_cell(out, cell, classes, style);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_cell(out: &mut String, cell: &Cell, classes: &TableClasses, style: &HtmlStyle) {
    let (tag, class) = match cell.kind {
        CellKind::Header => ("th", classes.header),
        CellKind::Data => ("td", classes.data),
    };
    out.push_str(&format!(r#"<{} class="{}">"#, tag, class));
    match &cell.content {
        CellContent::Text(text) => out.push_str(&escape_html(text)),
        CellContent::Node(node) => write_node(out, node, style),
    }
    out.push_str(&format!("</{}>", tag));
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
