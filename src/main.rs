use clap::Parser;
use larc::cli::{
    Cli, Command, ConfigCommand, KickCommand, ReverseCommand, TwitchCommand, YoutubeCommand,
};
use larc::client::{Client, Response};
use larc::config::Config;
use larc::error::LarcError;
use larc::interpret::{self, Lookup};
use larc::ops;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), LarcError> {
    match cli.command {
        Command::Credits => {
            let (client, _) = build_client()?;
            let response = client.execute(ops::credits()).await?;
            print_raw(&response);
            Ok(())
        }
        Command::Youtube { command } => run_youtube(command).await,
        Command::Twitter { handle, id, by_old } => {
            if handle.is_none() && id.is_none() {
                return Err(usage("either --handle or --id must be provided"));
            }

            let (client, _) = build_client()?;
            let response = client
                .execute(ops::twitter_history(handle.as_deref(), id, by_old))
                .await?;

            if response.body.is_empty() {
                println!("No data found");
            } else {
                print_raw(&response);
            }
            Ok(())
        }
        Command::Twitch { command } => run_twitch(command).await,
        Command::Kick { command } => run_kick(command).await,
        Command::Reverse { command } => run_reverse(command).await,
        Command::Database { query, term, exact } => {
            let query = query.or(term).ok_or_else(|| usage("query is required"))?;

            let (client, config) = build_client()?;
            let response = client.execute(ops::database_lookup(&query, exact)).await?;
            println!(
                "{}",
                interpret::interpret(
                    Lookup::Database,
                    response.status,
                    &response.body,
                    config.has_api_key()
                )
            );
            Ok(())
        }
        Command::Config { command } => run_config(command),
    }
}

async fn run_youtube(command: YoutubeCommand) -> Result<(), LarcError> {
    match command {
        YoutubeCommand::Comments {
            user_id,
            handle,
            channel_id,
            offset,
        } => {
            if user_id.is_none() && handle.is_none() && channel_id.is_none() {
                return Err(usage(
                    "at least one of --user-id, --handle, or --channel-id must be provided",
                ));
            }

            let (client, _) = build_client()?;
            let response = client
                .execute(ops::youtube_comments(
                    user_id.as_deref(),
                    handle.as_deref(),
                    channel_id.as_deref(),
                    offset,
                ))
                .await?;
            print_raw(&response);
        }
        YoutubeCommand::Replies { comment_id } => {
            let comment_id = require(comment_id, "--comment-id")?;

            let (client, _) = build_client()?;
            let response = client.execute(ops::youtube_replies(&comment_id)).await?;
            print_raw(&response);
        }
    }
    Ok(())
}

async fn run_twitch(command: TwitchCommand) -> Result<(), LarcError> {
    let request = match command {
        TwitchCommand::Messages {
            username,
            server,
            offset,
        } => {
            let username = require(username, "--username")?;
            ops::twitch_messages(&username, &server, offset)
        }
        TwitchCommand::Timeouts { username, offset } => {
            let username = require(username, "--username")?;
            ops::twitch_timeouts(&username, offset)
        }
        TwitchCommand::History { username, mode } => {
            let username = require(username, "--username")?;
            ops::twitch_history(&username, mode.as_deref())
        }
        TwitchCommand::Followage { username } => {
            let username = require(username, "--username")?;
            ops::twitch_followage(&username)
        }
        TwitchCommand::Followers { username } => {
            let username = require(username, "--username")?;
            ops::twitch_followers(&username)
        }
    };

    let (client, _) = build_client()?;
    let response = client.execute(request).await?;
    print_raw(&response);
    Ok(())
}

async fn run_kick(command: KickCommand) -> Result<(), LarcError> {
    let request = match command {
        KickCommand::Messages { username, offset } => {
            let username = require(username, "--username")?;
            ops::kick_messages(&username, offset)
        }
        KickCommand::Timeouts { username } => {
            let username = require(username, "--username")?;
            ops::kick_timeouts(&username)
        }
        KickCommand::Mods { username } => {
            let username = require(username, "--username")?;
            ops::kick_mod_channels(&username)
        }
        KickCommand::Subscribers { username } => {
            let username = require(username, "--username")?;
            ops::kick_subscribers(&username)
        }
    };

    let (client, _) = build_client()?;
    let response = client.execute(request).await?;
    print_raw(&response);
    Ok(())
}

async fn run_reverse(command: ReverseCommand) -> Result<(), LarcError> {
    match command {
        ReverseCommand::Phone {
            phone,
            number,
            insecure,
        } => {
            let phone = phone.or(number).ok_or_else(|| usage("phone is required"))?;

            let (client, config) = build_client()?;
            let response = client.execute(ops::reverse_phone(&phone, insecure)).await?;
            println!(
                "{}",
                interpret::interpret(
                    Lookup::Phone,
                    response.status,
                    &response.body,
                    config.has_api_key()
                )
            );
        }
        ReverseCommand::Email { email, insecure } => {
            let email = require(email, "--email")?;

            let (client, _) = build_client()?;
            let response = client.execute(ops::reverse_email(&email, insecure)).await?;
            print_raw(&response);
        }
    }
    Ok(())
}

fn run_config(command: ConfigCommand) -> Result<(), LarcError> {
    match command {
        ConfigCommand::SetApiKey { api_key } => {
            let api_key = api_key.ok_or_else(|| usage("API key is required"))?;
            Config::set_api_key(&api_key)?;
            println!("API key set successfully");
            Ok(())
        }
    }
}

/// Load the stored configuration and build a client from it.
///
/// An empty API key is still sent; the server rejects it with 401 and the
/// guided endpoints turn that into setup instructions.
fn build_client() -> Result<(Client, Config), LarcError> {
    let config = Config::load()?;
    let client = Client::with_base_url(config.base_url().to_string(), config.api_key.clone());
    Ok((client, config))
}

fn print_raw(response: &Response) {
    println!("{}", interpret::passthrough(&response.body));
}

fn require(value: Option<String>, name: &str) -> Result<String, LarcError> {
    value.ok_or_else(|| usage(&format!("{name} is required")))
}

fn usage(msg: &str) -> LarcError {
    LarcError::Usage(msg.to_string())
}
