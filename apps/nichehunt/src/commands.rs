//! Shell command definitions.

use clap::{Parser, Subcommand};
use entities::{CategoryFilter, CostLevelFilter, SubscriptionPlan};

/// One line of shell input.
#[derive(Debug, Parser)]
#[command(name = "nichehunt", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

impl ShellLine {
    /// Parses a line of input, splitting on whitespace.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

/// Shell commands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Sign in with an existing account.
    Login {
        email: String,
        password: String,
    },
    /// Create an account.
    Signup {
        email: String,
        password: String,
        /// Display name (defaults to the part of the email before the @).
        #[arg(long, num_args = 1..)]
        name: Option<Vec<String>>,
    },
    /// Continue with the demo Google account.
    DemoLogin,
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Change your display name.
    Rename {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Delete your account from this device.
    DeleteAccount,
    /// Hunt for niches: hunt <profession...> [--category C] [--cost C]
    Hunt {
        /// all, jobs, business or side-hustles.
        #[arg(long, short, default_value = "all")]
        category: CategoryFilter,
        /// any, low, medium or high.
        #[arg(long, default_value = "any")]
        cost: CostLevelFilter,
        /// Print the raw result as JSON.
        #[arg(long)]
        json: bool,
        /// Profession or skill to explore.
        #[arg(required = true, num_args = 1..)]
        profession: Vec<String>,
    },
    /// Show this session's searches.
    History,
    /// Show the full report of an idea from the last hunt.
    Show { idea_id: String },
    /// Save an idea from the last hunt.
    Save { idea_id: String },
    /// Remove a saved idea.
    Unsave { idea_id: String },
    /// List saved ideas.
    Saved,
    /// Print share text for an idea.
    Share { idea_id: String },
    /// Show plan prices.
    Pricing {
        /// Show annual prices.
        #[arg(long)]
        annual: bool,
    },
    /// Switch to another plan.
    Plan { plan: SubscriptionPlan },
    /// Leave the shell.
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Checks if the command is only available to signed-in users.
    pub fn requires_user(&self) -> bool {
        !matches!(
            self,
            Self::Login { .. }
                | Self::Signup { .. }
                | Self::DemoLogin
                | Self::Logout
                | Self::Whoami
                | Self::Pricing { .. }
                | Self::Quit
        )
    }
}
