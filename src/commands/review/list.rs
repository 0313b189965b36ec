//! List the reviews of an activity.

use std::io::Write;

use clap::Args;

use super::common::{ApiContext, write_json};
use super::error::Result;
use super::format::render_reviews;
use crate::models::Review;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Activity ID
    pub activity_id: String,

    /// Print the server response as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: &ListArgs, ctx: &ApiContext) -> Result<()> {
    run_with_writer(args, ctx, &mut std::io::stdout().lock()).await
}

pub(crate) async fn run_with_writer(
    args: &ListArgs,
    ctx: &ApiContext,
    out: &mut impl Write,
) -> Result<()> {
    let body = ctx.client.list(&args.activity_id, &ctx.props).await?;

    if args.json {
        return write_json(out, &body);
    }

    let reviews = Review::from_json_list(&body);
    write!(out, "{}", render_reviews(&reviews))?;
    Ok(())
}
