use tracing::{debug, warn};

use crate::error::ArgumentError;

/// Which action family was selected on the command line. When several are
/// set the first in field order wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFlags {
    pub complete: bool,
    pub incomplete: bool,
    pub edit: bool,
    pub swap: bool,
    pub remove: bool,
}

/// One invocation's worth of work. Ids are raw positions as typed by the
/// user and have not been checked against the list yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { description: String },
    Edit { id: i64, description: String },
    Replace { id: i64, from: String, to: String },
    MarkComplete { ids: Vec<i64> },
    MarkIncomplete { ids: Vec<i64> },
    Swap { first: i64, second: i64 },
    Remove { ids: Vec<i64> },
    RemoveComplete,
    PrintAll,
    PrintIncomplete,
}

impl Action {
    pub fn ids(&self) -> Vec<i64> {
        match self {
            Action::Edit { id, .. } | Action::Replace { id, .. } => vec![*id],
            Action::MarkComplete { ids }
            | Action::MarkIncomplete { ids }
            | Action::Remove { ids } => ids.clone(),
            Action::Swap { first, second } => vec![*first, *second],
            Action::Add { .. } | Action::RemoveComplete | Action::PrintAll | Action::PrintIncomplete => {
                Vec::new()
            }
        }
    }

    /// Print-only actions leave the file alone.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Action::PrintAll | Action::PrintIncomplete)
    }
}

pub fn resolve<S: AsRef<str>>(flags: ActionFlags, args: &[S]) -> Result<Action, ArgumentError> {
    let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
    let no_args = args.first().map_or(true, |first| first.is_empty());

    let action = if flags.complete {
        if no_args {
            Action::PrintAll
        } else {
            Action::MarkComplete {
                ids: parse_ids(&args)?,
            }
        }
    } else if flags.incomplete {
        Action::MarkIncomplete {
            ids: parse_ids(&args)?,
        }
    } else if flags.edit {
        let [id] = parse_fixed_ids::<1>(&args)?;
        let description = parse_description(&args[1..])?;
        match parse_substitution(&description) {
            Some((from, to)) => Action::Replace { id, from, to },
            None => Action::Edit { id, description },
        }
    } else if flags.swap {
        let [first, second] = parse_fixed_ids::<2>(&args)?;
        if args.len() > 2 {
            warn!(ignored = ?&args[2..], "swap takes two ids, ignoring the rest");
        }
        Action::Swap { first, second }
    } else if flags.remove {
        if no_args {
            Action::RemoveComplete
        } else {
            Action::Remove {
                ids: parse_ids(&args)?,
            }
        }
    } else if no_args {
        Action::PrintIncomplete
    } else {
        Action::Add {
            description: parse_description(&args)?,
        }
    };
    debug!(?action, "resolved action");
    Ok(action)
}

pub fn parse_id(token: &str) -> Result<i64, ArgumentError> {
    token
        .parse::<i64>()
        .map_err(|_| ArgumentError::InvalidId(token.to_string()))
}

pub fn parse_ids(tokens: &[&str]) -> Result<Vec<i64>, ArgumentError> {
    tokens.iter().map(|token| parse_id(token)).collect()
}

/// Takes exactly `N` ids off the front of `tokens`.
fn parse_fixed_ids<const N: usize>(tokens: &[&str]) -> Result<[i64; N], ArgumentError> {
    let mut ids = [0i64; N];
    let mut count = 0;
    for (slot, token) in ids.iter_mut().zip(tokens) {
        *slot = parse_id(token)?;
        count += 1;
    }
    if count != N {
        return Err(ArgumentError::WrongIdCount {
            expected: N,
            actual: count,
        });
    }
    Ok(ids)
}

pub fn parse_description(tokens: &[&str]) -> Result<String, ArgumentError> {
    let description = tokens.join(" ");
    if description.is_empty() {
        return Err(ArgumentError::MissingDescription);
    }
    Ok(description)
}

/// Recognizes `/from/to/`: exactly three slashes, one at each end.
pub fn parse_substitution(description: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = description.split('/').collect();
    match parts.as_slice() {
        ["", from, to, ""] => Some((from.to_string(), to.to_string())),
        _ => None,
    }
}
