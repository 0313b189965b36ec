//! List reviews assigned to the current reviewer.

use std::io::Write;

use clap::Args;

use super::common::{ApiContext, write_json};
use super::error::Result;
use super::format::render_reviews;
use crate::infra::api::{FILTER_ANY, ReviewerFilter};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct AssignedArgs {
    /// Number of records to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of records to return
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Review type filter (accepted but not sent to the server)
    #[arg(long = "type", default_value = FILTER_ANY, allow_hyphen_values = true)]
    pub kind: String,

    /// Review state code to filter by ("-1" for any)
    #[arg(long, default_value = FILTER_ANY, allow_hyphen_values = true)]
    pub state: String,

    /// Print the reviews as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl AssignedArgs {
    fn to_filter(&self) -> ReviewerFilter {
        ReviewerFilter {
            offset: self.offset,
            limit: self.limit,
            kind: self.kind.clone(),
            state: self.state.clone(),
        }
    }
}

pub async fn run(args: &AssignedArgs, ctx: &ApiContext) -> Result<()> {
    run_with_writer(args, ctx, &mut std::io::stdout().lock()).await
}

pub(crate) async fn run_with_writer(
    args: &AssignedArgs,
    ctx: &ApiContext,
    out: &mut impl Write,
) -> Result<()> {
    let reviews = ctx
        .client
        .list_by_reviewer_id(&args.to_filter(), &ctx.props)
        .await?;

    if args.json {
        return write_json(out, &reviews);
    }
    write!(out, "{}", render_reviews(&reviews))?;
    Ok(())
}
