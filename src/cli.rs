use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gtask")]
#[command(about = "Track task time and push history from commit markers")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    Commits {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    Tasks {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    Summary {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Push {
        #[arg(long, default_value = "main", help = "Branch to push to origin")]
        branch: String,
    },
    Repos {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Directory to scan for repositories")]
        base: PathBuf,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Commits { json, ndjson } => crate::commits::exec(self.common, json, ndjson),
            Commands::Tasks { json, ndjson } => crate::tasks::exec(self.common, json, ndjson),
            Commands::Summary { json } => crate::summary::exec(self.common, json),
            Commands::Push { branch } => crate::push::exec(self.common, &branch),
            Commands::Repos { json, base } => crate::repos::exec(&base, json),
        }
    }
}
