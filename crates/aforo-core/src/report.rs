//! Rendered and structured views of a [`Registry`](crate::Registry).

use std::fmt::{self, Write};

use serde::Serialize;

use crate::types::UserId;

pub const INSIDE_HEADER: &str = "Usuarios actualmente dentro de la biblioteca:";
pub const ENTRIES_HEADER: &str = "Número de entradas por usuario:";
pub const MOST_ENTRIES_HEADER: &str = "Usuario(s) con más entradas:";

/// Entry count of one active user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryTally {
    pub user: UserId,
    pub entries: u64,
}

/// Snapshot of the three registry queries, each sorted by user ID.
///
/// `Display` renders the plain-text summary: three headed sections separated
/// by a blank line, with no trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub inside: Vec<UserId>,
    pub entries: Vec<EntryTally>,
    pub most_entries: Vec<UserId>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();

        writeln!(out, "{INSIDE_HEADER}")?;
        for user in &self.inside {
            writeln!(out, "{user}")?;
        }

        writeln!(out)?;
        writeln!(out, "{ENTRIES_HEADER}")?;
        for tally in &self.entries {
            writeln!(out, "{} -> {}", tally.user, tally.entries)?;
        }

        writeln!(out)?;
        writeln!(out, "{MOST_ENTRIES_HEADER}")?;
        for user in &self.most_entries {
            writeln!(out, "{user}")?;
        }

        f.write_str(out.trim_end())
    }
}
