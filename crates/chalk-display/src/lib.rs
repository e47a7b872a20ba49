//! chalk-display - Structural rendering of computed results.
//!
//! [`render`] maps a [`ResultValue`](chalk_result::ResultValue) to a
//! [`PresentationNode`] tree; the [`paint`] module draws such trees as text or
//! HTML.

pub mod paint;
pub mod presentation;
pub mod render;

pub use paint::{HtmlStyle, TextStyle, paint_html, paint_text};
pub use presentation::{Cell, CellContent, CellKind, PresentationNode, Row, Table, TableKind};
pub use render::{format_lambda, render};

#[cfg(test)]
mod tests {
    use super::*;
    use chalk_result::ResultValue;

    fn data(text: &str) -> Cell {
        Cell::text(text)
    }

    #[test]
    fn test_render_none() {
        let node = render(&ResultValue::none());
        assert_eq!(node, PresentationNode::single_cell(""));
        let table = node.as_table().unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells, vec![data("")]);
    }

    #[test]
    fn test_render_booleans() {
        assert_eq!(render(&ResultValue::boolean(true)).single_text(), Some("TRUE"));
        assert_eq!(render(&ResultValue::boolean(false)).single_text(), Some("FALSE"));
    }

    #[test]
    fn test_render_lambda() {
        assert_eq!(
            render(&ResultValue::lambda(["x", "y"])).single_text(),
            Some("λ (x, y)")
        );
        assert_eq!(
            render(&ResultValue::lambda(Vec::<String>::new())).single_text(),
            Some("λ ()")
        );
    }

    #[test]
    fn test_render_number_and_string() {
        assert_eq!(render(&ResultValue::number(3.0)).single_text(), Some("3"));
        assert_eq!(render(&ResultValue::number(0.5)).single_text(), Some("0.5"));
        assert_eq!(render(&ResultValue::number(1e21)).single_text(), Some("1e+21"));
        assert_eq!(render(&ResultValue::string("hi there")).single_text(), Some("hi there"));
    }

    #[test]
    fn test_render_error() {
        assert_eq!(
            render(&ResultValue::error("division by zero")),
            PresentationNode::Error("division by zero".to_string())
        );
    }

    #[test]
    fn test_render_list() {
        let node = render(&ResultValue::list([
            ResultValue::number(1.0),
            ResultValue::number(2.0),
        ]));
        assert_eq!(
            node,
            PresentationNode::List(vec![
                PresentationNode::single_cell("1"),
                PresentationNode::single_cell("2"),
            ])
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render(&ResultValue::list([])), PresentationNode::List(vec![]));
    }

    #[test]
    fn test_render_record() {
        let node = render(&ResultValue::record([
            ("a", ResultValue::number(1.0)),
            ("b", ResultValue::string("x")),
        ]));
        assert_eq!(
            node,
            PresentationNode::Table(Table::record(vec![
                Row::new(vec![
                    Cell::header("a"),
                    Cell::node(PresentationNode::single_cell("1")),
                ]),
                Row::new(vec![
                    Cell::header("b"),
                    Cell::node(PresentationNode::single_cell("x")),
                ]),
            ]))
        );
        let table = node.as_table().unwrap();
        assert!(table.is_record());
        assert!(table.rows.iter().all(|row| row.cells[0].is_header()));
        assert!(table.rows.iter().all(|row| !row.cells[1].is_header()));
    }

    #[test]
    fn test_render_empty_record() {
        let node = render(&ResultValue::record(Vec::<(String, ResultValue)>::new()));
        assert_eq!(node, PresentationNode::Table(Table::record(vec![])));
    }

    #[test]
    fn test_render_record_duplicate_names_stay_separate() {
        let node = render(&ResultValue::record([
            ("k", ResultValue::number(1.0)),
            ("k", ResultValue::number(2.0)),
        ]));
        let table = node.as_table().unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(node.text_leaves(), vec!["k", "1", "k", "2"]);
    }

    #[test]
    fn test_render_nesting_three_levels() {
        let value = ResultValue::record([(
            "items",
            ResultValue::list([ResultValue::record([("n", ResultValue::number(5.0))])]),
        )]);
        let node = render(&value);

        let outer = node.as_table().unwrap();
        assert_eq!(outer.rows[0].cells[0].as_text(), Some("items"));

        let list = outer.rows[0].cells[1].as_node().unwrap().as_list().unwrap();
        assert_eq!(list.len(), 1);

        let inner = list[0].as_table().unwrap();
        assert_eq!(inner.rows.len(), 1);
        assert_eq!(inner.rows[0].cells[0], Cell::header("n"));
        assert_eq!(
            inner.rows[0].cells[1].as_node().unwrap().single_text(),
            Some("5")
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let value = ResultValue::record([
            ("a", ResultValue::list([ResultValue::none(), ResultValue::boolean(true)])),
            ("f", ResultValue::lambda(["x"])),
            ("e", ResultValue::error("nope")),
        ]);
        assert_eq!(render(&value), render(&value));
    }

    #[test]
    fn test_leaf_count_tracks_input() {
        let value = ResultValue::record([
            ("a", ResultValue::number(1.0)),
            (
                "b",
                ResultValue::list([ResultValue::string("x"), ResultValue::error("e")]),
            ),
        ]);
        let node = render(&value);
        let headers = 2;
        assert_eq!(node.leaf_count(), value.leaf_count() + headers);
    }

    #[test]
    fn test_render_deep_nesting() {
        let depth = 500;
        let mut value = ResultValue::number(7.0);
        for _ in 0..depth {
            value = ResultValue::list([value]);
        }
        let node = render(&value);

        let mut current = &node;
        for _ in 0..depth {
            let items = current.as_list().unwrap();
            assert_eq!(items.len(), 1);
            current = &items[0];
        }
        assert_eq!(current.single_text(), Some("7"));
    }

    #[test]
    fn test_render_across_threads() {
        let value = std::sync::Arc::new(ResultValue::list([
            ResultValue::number(1.0),
            ResultValue::record([("k", ResultValue::string("v"))]),
        ]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let value = std::sync::Arc::clone(&value);
                std::thread::spawn(move || render(&value))
            })
            .collect();
        let expected = render(&value);
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_tree_serializes_for_external_painters() {
        let node = render(&ResultValue::record([("a", ResultValue::boolean(true))]));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "table": {"kind": "record", "rows": [{"cells": [
                    {"kind": "header", "content": {"text": "a"}},
                    {"kind": "data", "content": {"node": {
                        "table": {"kind": "values", "rows": [{"cells": [
                            {"kind": "data", "content": {"text": "TRUE"}}
                        ]}]}
                    }}}
                ]}]}
            })
        );
    }

    #[test]
    fn test_paint_rendered_record_as_html() {
        let node = render(&ResultValue::record([("a", ResultValue::number(1.0))]));
        let out = paint_html(&node, &HtmlStyle { wrap_nodes: false });
        assert_eq!(
            out,
            concat!(
                r#"<table class="ResultDisplay-record"><tbody>"#,
                r#"<tr class="ResultDisplay-recordRow">"#,
                r#"<th class="ResultDisplay-recordProperty">a</th>"#,
                r#"<td class="ResultDisplay-recordValue">"#,
                r#"<table class="ResultDisplay-table"><tbody>"#,
                r#"<tr class="ResultDisplay-row"><td class="ResultDisplay-cell">1</td></tr>"#,
                "</tbody></table></td></tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_paint_rendered_record() {
        let node = render(&ResultValue::record([
            ("a", ResultValue::number(1.0)),
            ("b", ResultValue::list([])),
        ]));
        let expected = "\
+---+--------------+
| a | +---+        |
|   | | 1 |        |
|   | +---+        |
+---+--------------+
| b | (empty list) |
+---+--------------+";
        assert_eq!(paint_text(&node, &TextStyle::default()), expected);
    }
}
