use crate::error::Result;
use crate::Context;
use clap::Args;
use paircode::PairingCode;

#[derive(Args)]
/// Arguments for `decode`.
pub struct CmdArgs {
    /// Pairing code (normalized before decoding).
    pub code: String,
}

/// Print the integer value of a pairing code.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let code = PairingCode::parse_normalized(&args.code)?;
    ctx.out.info_diag(format!("code: {code}"));
    ctx.out.info_user(code.to_int()?);
    Ok(())
}
