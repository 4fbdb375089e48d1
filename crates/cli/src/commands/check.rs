//! Check command - loads every settings holder and reports gaps.

use super::CommandResult;
use common::{InventorySettings, Settings};

/// Execute the check command
pub fn execute(settings: &Settings) -> CommandResult<()> {
    settings.warn_missing();

    let inventory = InventorySettings::load()?;
    inventory.warn_missing();

    tracing::info!(
        app_port = settings.app_port(),
        inventory_port = inventory.server_port(),
        "Settings OK"
    );
    Ok(())
}
