use std::io::Write;

use crate::action::Action;
use crate::error::TodoError;
use crate::list::{TodoList, INCOMPLETE_PREFIX};
use crate::prompt::Confirm;
use crate::storage::TodoFile;

/// Loads the list, applies `action`, prints, and saves when the action
/// changed anything. Every id is checked before the first mutation.
///
/// A mutation is saved even when printing fails; the print error is
/// returned after the save.
pub fn dispatch(
    action: &Action,
    file: &TodoFile,
    out: &mut dyn Write,
    confirm: &mut dyn Confirm,
) -> Result<TodoList, TodoError> {
    let mut list = file.load()?;
    apply(action, &mut list, confirm)?;
    let printed = render(action, &list, out);
    if action.is_mutation() {
        file.save(&list)?;
    }
    printed?;
    Ok(list)
}

/// In-memory half of [`dispatch`].
pub fn execute(
    action: &Action,
    list: &mut TodoList,
    out: &mut dyn Write,
    confirm: &mut dyn Confirm,
) -> Result<(), TodoError> {
    apply(action, list, confirm)?;
    render(action, list, out)
}

fn apply(
    action: &Action,
    list: &mut TodoList,
    confirm: &mut dyn Confirm,
) -> Result<(), TodoError> {
    let ids = list.check_ids(&action.ids())?;

    match action {
        Action::Add { description } => list.add(description.as_str()),
        Action::Edit { description, .. } => list.edit(ids[0], description.as_str()),
        Action::Replace { from, to, .. } => list.replace(ids[0], from, to),
        Action::MarkComplete { .. } => list.mark_complete(&ids),
        Action::MarkIncomplete { .. } => list.mark_incomplete(&ids),
        Action::Swap { .. } => list.swap(ids[0], ids[1]),
        Action::Remove { .. } => list.remove(&ids, confirm),
        Action::RemoveComplete => list.remove_complete(confirm),
        Action::PrintAll | Action::PrintIncomplete => {}
    }
    Ok(())
}

fn render(action: &Action, list: &TodoList, out: &mut dyn Write) -> Result<(), TodoError> {
    match action {
        Action::PrintAll => print_all(list, out),
        _ => print_incomplete(list, out),
    }
}

fn print_all(list: &TodoList, out: &mut dyn Write) -> Result<(), TodoError> {
    for (id, todo) in list.iter() {
        writeln!(out, "{id} {}{}", todo.prefix(), todo.description).map_err(TodoError::Output)?;
    }
    Ok(())
}

fn print_incomplete(list: &TodoList, out: &mut dyn Write) -> Result<(), TodoError> {
    for (id, todo) in list.incomplete() {
        writeln!(out, "{id} {INCOMPLETE_PREFIX}{}", todo.description)
            .map_err(TodoError::Output)?;
    }
    Ok(())
}
