//! Approve or reject a review.

use std::io::Write;

use clap::Args;

use super::common::{ApiContext, write_json};
use super::error::Result;
use crate::infra::api::UpdateReview;

#[derive(Args, Clone, PartialEq, Eq)]
#[command(group(clap::ArgGroup::new("decision").required(true).args(["approve", "reject"])))]
pub struct UpdateArgs {
    /// Activity ID
    pub activity_id: String,

    /// Review ID
    pub review_id: String,

    /// Approve the review
    #[arg(long)]
    pub approve: bool,

    /// Reject the review
    #[arg(long)]
    pub reject: bool,

    /// Comment attached to the decision
    #[arg(short, long, default_value = "")]
    pub comment: String,
}

impl UpdateArgs {
    fn to_request(&self) -> UpdateReview {
        UpdateReview {
            state: self.approve && !self.reject,
            comment: self.comment.clone(),
        }
    }
}

pub async fn run(args: &UpdateArgs, ctx: &ApiContext) -> Result<()> {
    run_with_writer(args, ctx, &mut std::io::stdout().lock()).await
}

pub(crate) async fn run_with_writer(
    args: &UpdateArgs,
    ctx: &ApiContext,
    out: &mut impl Write,
) -> Result<()> {
    let body = ctx
        .client
        .update(
            &args.activity_id,
            &args.review_id,
            &args.to_request(),
            &ctx.props,
        )
        .await?;
    write_json(out, &body)
}
