//! Open a new review for an activity.

use std::io::Write;

use clap::Args;

use super::common::{ApiContext, write_json};
use super::error::Result;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    /// Activity ID
    pub activity_id: String,
}

pub async fn run(args: &CreateArgs, ctx: &ApiContext) -> Result<()> {
    run_with_writer(args, ctx, &mut std::io::stdout().lock()).await
}

pub(crate) async fn run_with_writer(
    args: &CreateArgs,
    ctx: &ApiContext,
    out: &mut impl Write,
) -> Result<()> {
    let body = ctx.client.create(&args.activity_id, &ctx.props).await?;
    write_json(out, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::review::test_helpers::context;
    use crate::infra::api::ReviewMockServer;
    use serde_json::json;

    fn args() -> CreateArgs {
        CreateArgs {
            activity_id: "a1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_prints_response() {
        let mock = ReviewMockServer::start().await;
        mock.activity("a1")
            .create_review(200, json!({"id": "r2"}))
            .await;

        let mut out = Vec::new();
        run_with_writer(&args(), &context(&mock), &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"id\": \"r2\"\n}\n");
    }

    #[tokio::test]
    async fn test_create_forbidden_uses_server_message() {
        let mock = ReviewMockServer::start().await;
        mock.activity("a1")
            .create_review(403, json!({"error": "only the owner can submit"}))
            .await;

        let mut out = Vec::new();
        let err = run_with_writer(&args(), &context(&mock), &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "only the owner can submit");
    }
}
