//! Line-oriented text format: one todo per line, `[x] ` or `[ ] ` followed by
//! the description.

use crate::list::{Todo, TodoList, COMPLETE_PREFIX, INCOMPLETE_PREFIX};

pub fn decode(text: &str) -> TodoList {
    text.lines().map(decode_line).collect::<Vec<_>>().into()
}

/// Lines without a known prefix are kept verbatim as incomplete todos.
fn decode_line(line: &str) -> Todo {
    if let Some(description) = line.strip_prefix(COMPLETE_PREFIX) {
        return Todo::completed(description);
    }
    Todo::new(line.strip_prefix(INCOMPLETE_PREFIX).unwrap_or(line))
}

pub fn encode(list: &TodoList) -> String {
    let mut out = String::new();
    for todo in list.items() {
        out.push_str(todo.prefix());
        out.push_str(&todo.description);
        out.push('\n');
    }
    out
}
