//! Share command implementation.

use clap::Args;

use crate::error::Result;
use crate::parser::parse;

/// Base address of the hosted viewer; the code is appended as the query.
pub const VIEWER_URL: &str = "https://tceprepk.github.io/shapez/ColorZ-ShapeViewer/";

/// Print a shareable viewer link for a shape code
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Shape code to link to
    pub code: String,
}

pub fn run(args: ShareArgs) -> Result<()> {
    println!("{}", share_url(&args.code)?);
    Ok(())
}

/// Link that opens the viewer on `code`. The code must parse.
pub fn share_url(code: &str) -> Result<String> {
    let shape = parse(code)?;
    Ok(format!("{}?{}", VIEWER_URL, shape))
}
