//! Version command implementation

use super::CommandContext;
use anyhow::Result;

pub fn execute(ctx: &CommandContext) -> Result<i32> {
    let output = &ctx.output;

    output.header(&format!("{} v{}", crate::PKG_NAME, crate::VERSION));
    output.key_value("Description:", crate::PKG_DESCRIPTION, false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    Ok(0)
}
