//! Single-query commands: `inside`, `entries` and `top`.
//!
//! Each prints one section of the summary without its header, or the
//! structured result as JSON with `--json`.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use aforo_core::{Registry, UserId, UserState};

/// JSON shape of `top`.
#[derive(Debug, Serialize)]
struct TopOutput<'a> {
    max_entries: u64,
    users: Vec<&'a UserId>,
}

/// Prints the users currently inside.
pub fn inside<W: Write>(writer: &mut W, registry: &Registry, json: bool) -> Result<()> {
    let users = registry.currently_inside();
    if json {
        write_json(writer, &ids(&users))
    } else {
        write_ids(writer, &users)
    }
}

/// Prints `<id> -> <count>` for every user with at least one entry.
pub fn entries<W: Write>(writer: &mut W, registry: &Registry, json: bool) -> Result<()> {
    if json {
        return write_json(writer, &registry.report().entries);
    }

    for user in registry.users_with_activity() {
        writeln!(writer, "{} -> {}", user.id(), user.entry_count())?;
    }
    Ok(())
}

/// Prints the user(s) sharing the highest entry count.
pub fn top<W: Write>(writer: &mut W, registry: &Registry, json: bool) -> Result<()> {
    let users = registry.users_with_max_entries();
    if json {
        let output = TopOutput {
            max_entries: registry.max_entries(),
            users: ids(&users),
        };
        write_json(writer, &output)
    } else {
        write_ids(writer, &users)
    }
}

fn ids<'a>(users: &[&'a UserState]) -> Vec<&'a UserId> {
    users.iter().map(|u| u.id()).collect()
}

fn write_ids<W: Write>(writer: &mut W, users: &[&UserState]) -> Result<()> {
    for user in users {
        writeln!(writer, "{}", user.id())?;
    }
    Ok(())
}

pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
