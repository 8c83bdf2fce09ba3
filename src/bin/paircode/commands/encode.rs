use crate::error::Result;
use crate::Context;
use clap::Args;
use paircode::{PairingCode, STANDARD_PAIRING_CODE_LENGTH};

#[derive(Args)]
/// Arguments for `encode`.
pub struct CmdArgs {
    /// Integer to encode.
    pub value: u64,

    /// Code length including the check character.
    #[arg(short, long, default_value_t = STANDARD_PAIRING_CODE_LENGTH)]
    pub length: usize,
}

/// Print the pairing code for `value`.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let code = PairingCode::from_int(args.value, args.length)?;
    ctx.out.info_user(code);
    Ok(())
}
