use crate::error::{CliError, Result};
use crate::Context;
use clap::Args;
use paircode::{normalize, verify_pairing_code};
use serde::Serialize;

#[derive(Args)]
/// Arguments for `check`.
pub struct CmdArgs {
    /// Pairing codes to check.
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Normalize input first (case, I/O/Q/Z aliases, whitespace, '-' and '.').
    #[arg(long)]
    pub normalize: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
/// One JSON result row.
struct CheckOutput {
    /// Input as given.
    input: String,
    /// Code actually checked.
    code: String,
    /// Whether it passed.
    valid: bool,
    /// Failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Check every code; fail if any is invalid.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let results: Vec<CheckOutput> = args
        .codes
        .iter()
        .map(|input| {
            let code = if args.normalize {
                normalize(input)
            } else {
                input.clone()
            };
            let error = verify_pairing_code(&code).err().map(|e| e.to_string());
            CheckOutput {
                input: input.clone(),
                code,
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            match &result.error {
                None => ctx.out.info_user(format!("{}: valid", result.code)),
                Some(reason) => ctx
                    .out
                    .info_user(format!("{}: invalid ({reason})", result.code)),
            }
        }
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        return Err(CliError::InvalidCodes {
            invalid,
            total: results.len(),
        });
    }
    Ok(())
}
