//! PicShare CLI - companion for the PicShare image-sharing platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod notify;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{AdminCommands, Cli, Commands, ImageCommands, LangCommands, PlanCommands,
    SubscriptionCommands, TagCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        notify::failure(&err.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => {
            cli::auth::login(&opts, email.as_deref(), password.as_deref()).await
        }
        Commands::Register(args) => cli::auth::register(&opts, &args).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::ForgotPassword { email } => cli::auth::forgot_password(&opts, &email).await,
        Commands::ResetPassword {
            reset_token,
            password,
        } => cli::auth::reset_password(&opts, &reset_token, password.as_deref()).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Whoami => cli::auth::whoami(&opts).await,
        Commands::Image(image_cmd) => match image_cmd {
            ImageCommands::List(args) => cli::image::list(&opts, &args).await,
            ImageCommands::Upload(args) => cli::image::upload(&opts, &args).await,
            ImageCommands::Delete { image_id, yes } => {
                cli::image::delete(&opts, &image_id, yes).await
            }
        },
        Commands::Tag(tag_cmd) => match tag_cmd {
            TagCommands::Add(args) => cli::tag::add(&opts, &args).await,
            TagCommands::Update(args) => cli::tag::update(&opts, &args).await,
            TagCommands::Remove { image_id, tag_id } => {
                cli::tag::remove(&opts, &image_id, &tag_id).await
            }
        },
        Commands::Plan(PlanCommands::List) => cli::subscription::plans(&opts).await,
        Commands::Subscription(sub_cmd) => match sub_cmd {
            SubscriptionCommands::Get => cli::subscription::get(&opts).await,
            SubscriptionCommands::Create { plan_id, payment } => {
                cli::subscription::create(&opts, &plan_id, payment).await
            }
            SubscriptionCommands::Cancel { yes } => cli::subscription::cancel(&opts, yes).await,
            SubscriptionCommands::AutoRenew { state } => {
                cli::subscription::auto_renew(&opts, state).await
            }
        },
        Commands::Admin(admin_cmd) => match admin_cmd {
            AdminCommands::Stats => cli::admin::stats(&opts).await,
            AdminCommands::Users(args) => cli::admin::users(&opts, &args).await,
            AdminCommands::Approve { user_id } => cli::admin::approve(&opts, &user_id).await,
            AdminCommands::Block { user_id, yes } => cli::admin::block(&opts, &user_id, yes).await,
        },
        Commands::Lang(lang_cmd) => match lang_cmd {
            LangCommands::Set { code } => cli::lang::set(&opts, &code),
            LangCommands::Get => cli::lang::get(&opts),
        },
        Commands::Version => {
            println!("picshare version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
