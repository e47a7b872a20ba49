//! Presentation tree produced by the renderer.
//!
//! The tree is backend agnostic: tables of rows of cells, lists, and a
//! distinguished error node. Text payloads are raw; painters escape them for
//! their target format.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PresentationNode {
    Table(Table),
    List(Vec<PresentationNode>),
    /// Error text, kept outside any tabular structure.
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    pub kind: TableKind,
    pub rows: Vec<Row>,
}

/// Record tables pair a header cell (property name) with a value cell per
/// row; value tables hold plain cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableKind {
    #[default]
    Values,
    Record,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    pub kind: CellKind,
    pub content: CellContent,
}

/// Header cells label a row (record property names); data cells hold values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    Header,
    Data,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellContent {
    Text(String),
    Node(Box<PresentationNode>),
}

impl PresentationNode {
    /// A one-row, one-column table holding `text` in a data cell.
    pub fn single_cell(text: impl Into<String>) -> PresentationNode {
        PresentationNode::Table(Table::new(vec![Row::new(vec![Cell::text(text)])]))
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            PresentationNode::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PresentationNode]> {
        match self {
            PresentationNode::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&str> {
        match self {
            PresentationNode::Error(message) => Some(message),
            _ => None,
        }
    }

    /// If this is a single-cell table, its text.
    pub fn single_text(&self) -> Option<&str> {
        let table = self.as_table()?;
        match table.rows.as_slice() {
            [row] => match row.cells.as_slice() {
                [cell] => cell.as_text(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Every text leaf (cell texts and error messages), depth first.
    pub fn text_leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            PresentationNode::Table(table) => table
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .map(|cell| match &cell.content {
                    CellContent::Text(_) => 1,
                    CellContent::Node(node) => node.leaf_count(),
                })
                .sum(),
            PresentationNode::List(items) => items.iter().map(PresentationNode::leaf_count).sum(),
            PresentationNode::Error(_) => 1,
        }
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            PresentationNode::Table(table) => {
                for cell in table.rows.iter().flat_map(|row| row.cells.iter()) {
                    match &cell.content {
                        CellContent::Text(text) => out.push(text),
                        CellContent::Node(node) => node.collect_text(out),
                    }
                }
            }
            PresentationNode::List(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
            PresentationNode::Error(message) => out.push(message),
        }
    }
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Table {
        Table {
            kind: TableKind::Values,
            rows,
        }
    }

    /// A table of `(header, value)` rows, one per record property.
    pub fn record(rows: Vec<Row>) -> Table {
        Table {
            kind: TableKind::Record,
            rows,
        }
    }

    pub fn is_record(&self) -> bool {
        self.kind == TableKind::Record
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Row {
        Row { cells }
    }
}

impl Cell {
    pub fn header(text: impl Into<String>) -> Cell {
        Cell {
            kind: CellKind::Header,
            content: CellContent::Text(text.into()),
        }
    }

    pub fn text(text: impl Into<String>) -> Cell {
        Cell {
            kind: CellKind::Data,
            content: CellContent::Text(text.into()),
        }
    }

    pub fn node(node: PresentationNode) -> Cell {
        Cell {
            kind: CellKind::Data,
            content: CellContent::Node(Box::new(node)),
        }
    }

    pub fn is_header(&self) -> bool {
        self.kind == CellKind::Header
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            CellContent::Text(text) => Some(text),
            CellContent::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&PresentationNode> {
        match &self.content {
            CellContent::Node(node) => Some(node),
            CellContent::Text(_) => None,
        }
    }
}
