//! User command: the state of one tracked user.

use std::io::Write;

use anyhow::Result;
use aforo_core::Registry;

use super::query::write_json;

pub fn run<W: Write>(writer: &mut W, registry: &Registry, id: &str, json: bool) -> Result<()> {
    let Some(user) = registry.get(id.trim()) else {
        anyhow::bail!("user {id} does not appear in the register");
    };

    if json {
        return write_json(writer, user);
    }

    let inside = if user.is_inside() { "sí" } else { "no" };
    let last_event = user
        .last_event()
        .map_or_else(|| "-".to_string(), |e| e.to_string());

    writeln!(writer, "Usuario:       {}", user.id())?;
    writeln!(writer, "Dentro:        {inside}")?;
    writeln!(writer, "Entradas:      {}", user.entry_count())?;
    writeln!(writer, "Último evento: {last_event}")?;
    Ok(())
}
