use clap::{Parser, Subcommand};

/// A command-line client for the LoLArchiver archival API
///
/// Larc exposes the LoLArchiver lookup endpoints as subcommands: archived
/// comments and chat logs across YouTube, Twitter, Twitch and Kick, reverse
/// phone/email lookups, and free-text database search. Store an API key with
/// 'larc config set-api-key' before issuing queries.
#[derive(Parser, Debug)]
#[command(name = "larc", version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check remaining API credits
    Credits,

    /// YouTube archival operations
    Youtube {
        #[command(subcommand)]
        command: YoutubeCommand,
    },

    /// Look up the account history of a Twitter user
    ///
    /// Either --handle or --id must be provided.
    Twitter {
        /// Twitter handle
        #[arg(long)]
        handle: Option<String>,

        /// Numeric Twitter user ID
        #[arg(long)]
        id: Option<i64>,

        /// Search by old usernames
        #[arg(long)]
        by_old: bool,
    },

    /// Twitch archival operations
    Twitch {
        #[command(subcommand)]
        command: TwitchCommand,
    },

    /// Kick archival operations
    Kick {
        #[command(subcommand)]
        command: KickCommand,
    },

    /// Reverse lookup operations (phone/email)
    Reverse {
        #[command(subcommand)]
        command: ReverseCommand,
    },

    /// Search the archival database
    Database {
        /// Search query
        #[arg(long)]
        query: Option<String>,

        /// Search query as a positional argument
        #[arg(value_name = "QUERY", conflicts_with = "query")]
        term: Option<String>,

        /// Only return exact matches
        #[arg(long)]
        exact: bool,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum YoutubeCommand {
    /// All comments posted by a YouTube user
    ///
    /// At least one of --user-id, --handle, or --channel-id must be provided.
    Comments {
        /// YouTube user ID
        #[arg(long)]
        user_id: Option<String>,

        /// YouTube handle
        #[arg(long)]
        handle: Option<String>,

        /// YouTube channel ID
        #[arg(long)]
        channel_id: Option<String>,

        /// Pagination offset
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Replies to a specific YouTube comment
    Replies {
        /// YouTube comment ID
        #[arg(long)]
        comment_id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TwitchCommand {
    /// All chat messages logged for a Twitch user
    Messages {
        /// Twitch username
        #[arg(long)]
        username: Option<String>,

        /// Log server to query (superserver2 or main)
        #[arg(long, default_value = "superserver2")]
        server: String,

        /// Pagination offset
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Chat bans and timeouts recorded for a Twitch user
    Timeouts {
        /// Twitch username
        #[arg(long)]
        username: Option<String>,

        /// Pagination offset
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Name and account history for a Twitch user
    History {
        /// Twitch username
        #[arg(long)]
        username: Option<String>,

        /// History mode (username, utype, or btype)
        #[arg(long)]
        mode: Option<String>,
    },

    /// Channels a Twitch user follows
    Followage {
        /// Twitch username
        #[arg(long)]
        username: Option<String>,
    },

    /// Followers of a Twitch user
    Followers {
        /// Twitch username
        #[arg(long)]
        username: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum KickCommand {
    /// All chat messages logged for a Kick user
    Messages {
        /// Kick username
        #[arg(long)]
        username: Option<String>,

        /// Pagination offset
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Chat bans and timeouts recorded for a Kick user
    Timeouts {
        /// Kick username
        #[arg(long)]
        username: Option<String>,
    },

    /// Channels a Kick user moderates
    Mods {
        /// Kick username
        #[arg(long)]
        username: Option<String>,
    },

    /// Subscribers of a Kick user
    Subscribers {
        /// Kick username
        #[arg(long)]
        username: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReverseCommand {
    /// Reverse phone lookup
    Phone {
        /// Phone number to look up
        #[arg(long)]
        phone: Option<String>,

        /// Phone number as a positional argument
        #[arg(value_name = "PHONE", conflicts_with = "phone")]
        number: Option<String>,

        /// Relax server-side validation of the input
        #[arg(long)]
        insecure: bool,
    },

    /// Reverse email lookup
    Email {
        /// Email address to look up
        #[arg(long)]
        email: Option<String>,

        /// Relax server-side validation of the input
        #[arg(long)]
        insecure: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Store the API key used to authenticate requests
    SetApiKey {
        /// The API key issued for your account
        #[arg(value_name = "API_KEY")]
        api_key: Option<String>,
    },
}
