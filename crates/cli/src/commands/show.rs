//! Show command - prints settings.

use serde::Serialize;

use super::CommandResult;
use crate::args::ShowArgs;
use common::{InventorySettings, Settings};

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> CommandResult<()> {
    let output = if args.inventory {
        render(&InventorySettings::load()?, args.json)?
    } else {
        render(settings, args.json)?
    };

    println!("{output}");
    Ok(())
}

/// Render settings as JSON or as `key=value` lines.
pub fn render<T: Serialize>(settings: &T, json: bool) -> CommandResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(settings)?);
    }

    let value = serde_json::to_value(settings)?;
    let lines = value
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(s) => format!("{key}={s}"),
                    other => format!("{key}={other}"),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Ok(lines.join("\n"))
}
