// Outline rendering of a collection's folder/request tree

use serde_json::Value;

const FOLDER_LABEL: &str = "folder";
const UNKNOWN_METHOD: &str = "?";

/// Render collection items as an indented outline, one line per item.
///
/// Items with an `item` array are folders and are followed by their children
/// one level deeper. Everything else is a request labelled with its
/// `request.method`, or `?` when that is missing. Input order is kept.
pub fn render_tree(items: &[Value], indent: usize) -> String {
    items
        .iter()
        .map(|item| render_item(item, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collection name, a blank line, then the outline of its items.
pub fn render_collection(collection: &Value) -> String {
    let name = collection
        .get("info")
        .and_then(|info| info.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let items = collection
        .get("item")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    format!("{}\n\n{}", name, render_tree(items, 0))
}

fn render_item(item: &Value, indent: usize) -> String {
    let prefix = format!("{}└─ ", "  ".repeat(indent));
    let name = item.get("name").and_then(Value::as_str).unwrap_or_default();

    match item.get("item").and_then(Value::as_array) {
        // One line only: no blank line follows an empty folder
        Some(children) if children.is_empty() => format!("{prefix}[{FOLDER_LABEL}] {name}"),
        Some(children) => format!(
            "{prefix}[{FOLDER_LABEL}] {name}\n{}",
            render_tree(children, indent + 1)
        ),
        None => {
            let method = item
                .get("request")
                .and_then(|request| request.get("method"))
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_METHOD);
            format!("{prefix}[{method}] {name}")
        }
    }
}
