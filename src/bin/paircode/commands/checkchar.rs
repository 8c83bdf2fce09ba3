use crate::error::Result;
use crate::Context;
use clap::Args;
use paircode::PairingCode;

#[derive(Args)]
/// Arguments for `checkchar`.
pub struct CmdArgs {
    /// Code body without its check character.
    pub body: String,
}

/// Print the body with its check character appended.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let code = PairingCode::from_body(&args.body)?;
    ctx.out
        .info_diag(format!("check character: {}", code.check_char()));
    ctx.out.info_user(code);
    Ok(())
}
