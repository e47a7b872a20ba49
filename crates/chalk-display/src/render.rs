//! Structural renderer: [`ResultValue`] to [`PresentationNode`].

use chalk_result::{Property, ResultValue, format_number};

use crate::presentation::{Cell, PresentationNode, Row, Table};

/// Render a result into a presentation tree.
///
/// Recursion follows the nesting of the value: lists become list nodes of
/// rendered elements, records become two-column tables whose value cells
/// hold the rendered property values. Never fails.
pub fn render(result: &ResultValue) -> PresentationNode {
    match result {
        ResultValue::None => PresentationNode::single_cell(""),
        ResultValue::Boolean(b) => PresentationNode::single_cell(if *b { "TRUE" } else { "FALSE" }),
        ResultValue::Number(n) => PresentationNode::single_cell(format_number(*n)),
        ResultValue::String(s) => PresentationNode::single_cell(s.as_str()),
        ResultValue::Lambda { free_variables } => {
            PresentationNode::single_cell(format_lambda(free_variables))
        }
        ResultValue::List(elements) => {
            PresentationNode::List(elements.iter().map(render).collect())
        }
        ResultValue::Record(properties) => PresentationNode::Table(Table::record(
            properties.iter().map(render_property).collect(),
        )),
        ResultValue::Error { message } => PresentationNode::Error(message.clone()),
    }
}

fn render_property(property: &Property) -> Row {
    Row::new(vec![
        Cell::header(property.name.as_str()),
        Cell::node(render(&property.value)),
    ])
}

/// `λ (a, b)` for a lambda capturing `a` and `b`; `λ ()` when it captures nothing.
pub fn format_lambda(free_variables: &[String]) -> String {
    format!("λ ({})", free_variables.join(", "))
}
