use crate::error::Result;
use crate::Context;
use clap::Args;
use paircode::{check_length, PairingCode, BITS_PER_CHARACTER, STANDARD_PAIRING_CODE_LENGTH};

#[derive(Args)]
/// Arguments for `generate`.
pub struct CmdArgs {
    /// Code length including the check character.
    #[arg(short, long, env = "PAIRCODE_LENGTH", default_value_t = STANDARD_PAIRING_CODE_LENGTH)]
    pub length: usize,

    /// Number of codes to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Generate `count` codes and print one per line.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    // --count 0 must still reject a bad length
    check_length(args.length)?;

    let codes = (0..args.count)
        .map(|_| PairingCode::generate(args.length))
        .collect::<paircode::Result<Vec<_>>>()?;

    let entropy = args
        .length
        .saturating_sub(1)
        .saturating_mul(BITS_PER_CHARACTER as usize);
    ctx.out
        .info_diag(format!("{} code(s), {entropy} random bits each", codes.len()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
        return Ok(());
    }

    for code in &codes {
        ctx.out.info_user(code);
    }
    Ok(())
}
