use crate::error::Result;
use crate::Context;
use clap::Args;
use paircode::{is_valid_pairing_code_char, normalize};

#[derive(Args)]
/// Arguments for `normalize`.
pub struct CmdArgs {
    /// Typed input.
    pub input: String,
}

/// Print the normalized form.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let normalized = normalize(&args.input);
    if let Some(bad) = normalized
        .chars()
        .find(|&c| !is_valid_pairing_code_char(c))
    {
        ctx.out
            .warn_user(format!("'{bad}' is not a pairing code character"));
    }
    ctx.out.info_user(normalized);
    Ok(())
}
