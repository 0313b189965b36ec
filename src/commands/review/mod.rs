//! Review commands against the activity review API.

pub mod assigned;
mod common;
pub mod create;
mod error;
mod format;
pub mod list;
#[cfg(test)]
mod test_helpers;
pub mod update;

use clap::Subcommand;

pub use common::ApiContext;
pub use error::ReviewCommandError;

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ReviewCommands {
    /// List the reviews of an activity
    List(list::ListArgs),

    /// Approve or reject a review
    Update(update::UpdateArgs),

    /// Open a new review for an activity
    Create(create::CreateArgs),

    /// List reviews assigned to you
    Assigned(assigned::AssignedArgs),
}

impl ReviewCommands {
    pub async fn run(&self, ctx: &ApiContext) -> anyhow::Result<()> {
        match self {
            Self::List(args) => list::run(args, ctx).await,
            Self::Update(args) => update::run(args, ctx).await,
            Self::Create(args) => create::run(args, ctx).await,
            Self::Assigned(args) => assigned::run(args, ctx).await,
        }
    }
}
