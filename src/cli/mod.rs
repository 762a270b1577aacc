//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod admin;
pub mod args;
pub mod auth;
pub mod context;
pub mod image;
pub mod lang;
pub mod status;
pub mod subscription;
pub mod tag;

pub use args::OutputFormat;
pub use context::CommandContext;

/// PicShare CLI - companion for the PicShare image-sharing platform
#[derive(Parser, Debug)]
#[command(name = "picshare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "PICSHARE_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override the API host
    #[arg(long, global = true, env = "PICSHARE_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "PICSHARE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PICSHARE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "PICSHARE_PASSWORD", hide = true)]
        password: Option<String>,
    },

    /// Register a new account (requires administrator approval)
    Register(RegisterArgs),

    /// Log out and clear the stored session token
    Logout,

    /// Request a password-reset email
    ForgotPassword {
        /// Account email
        email: String,
    },

    /// Set a new password using a reset token
    ResetPassword {
        /// Reset token from the password-reset email
        reset_token: String,

        /// New password (prompted when omitted)
        #[arg(long, env = "PICSHARE_PASSWORD", hide = true)]
        password: Option<String>,
    },

    /// Show authentication and configuration status
    Status,

    /// Show the logged-in user
    Whoami,

    /// Browse, upload, and delete images
    #[command(subcommand)]
    Image(ImageCommands),

    /// Place and edit clickable tags on images
    #[command(subcommand)]
    Tag(TagCommands),

    /// View subscription plans
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Manage your subscription
    #[command(subcommand)]
    Subscription(SubscriptionCommands),

    /// Administrator operations
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Display-language preference
    #[command(subcommand)]
    Lang(LangCommands),

    /// Display version information
    Version,
}

/// Arguments for account registration
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Public username
    #[arg(long)]
    pub username: String,

    /// Full name
    #[arg(long)]
    pub full_name: String,

    /// Accept the terms of service
    #[arg(long)]
    pub accept_terms: bool,

    /// Account password (prompted when omitted)
    #[arg(long, env = "PICSHARE_PASSWORD", hide = true)]
    pub password: Option<String>,
}

/// Image subcommands
#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// List images, with optional filtering and sorting
    List(image::ImageListArgs),

    /// Upload an image with metadata
    Upload(image::ImageUploadArgs),

    /// Delete one of your images
    Delete {
        /// Image ID
        image_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Tag subcommands
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Place a tag at a normalized position (0..1) on an image
    Add(tag::TagAddArgs),

    /// Update an existing tag
    Update(tag::TagUpdateArgs),

    /// Remove a tag from an image
    Remove {
        /// Image ID
        image_id: String,

        /// Tag ID
        tag_id: String,
    },
}

/// Plan subcommands
#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// List available subscription plans
    List,
}

/// Subscription subcommands
#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// Show your current subscription
    Get,

    /// Subscribe to a plan
    Create {
        /// Plan ID (see `picshare plan list`)
        plan_id: String,

        /// Payment provider
        #[arg(long, value_enum)]
        payment: subscription::PaymentArg,
    },

    /// Cancel your subscription
    Cancel {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Turn automatic renewal on or off
    AutoRenew {
        /// Desired state
        #[arg(value_enum)]
        state: subscription::Toggle,
    },
}

/// Administrator subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Show aggregate platform statistics
    Stats,

    /// List registered users, with optional filtering
    Users(admin::AdminUsersArgs),

    /// Approve a pending user
    Approve {
        /// User ID
        user_id: String,
    },

    /// Block a user and remove them from the platform
    Block {
        /// User ID
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Language preference subcommands
#[derive(Subcommand, Debug)]
pub enum LangCommands {
    /// Set the display language
    Set {
        /// Language code (e.g. "en", "de")
        code: String,
    },

    /// Show the current display language
    Get,
}
