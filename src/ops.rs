//! Operation catalog: one builder per remote endpoint.
//!
//! The remote API places parameters in headers for some endpoints and in the
//! JSON body for others. The asymmetry is part of the served contract and is
//! reproduced here verbatim rather than unified. Builders perform no
//! validation (callers check parameter constraints before invoking) and hold
//! no state: identical inputs always produce identical requests. Optional
//! parameters left unset are omitted entirely, never sent as empty strings.

use crate::client::Request;

/// Check remaining API credits
pub fn credits() -> Request {
    Request::post("/credits_left")
}

/// All comments posted by a YouTube user.
///
/// The caller must supply at least one of the three identifiers.
pub fn youtube_comments(
    user_id: Option<&str>,
    handle: Option<&str>,
    channel_id: Option<&str>,
    offset: u32,
) -> Request {
    let mut request = Request::post("/youtube/user_all_comments").body_field("offset", offset);

    if let Some(user_id) = user_id {
        request = request.body_field("user_id", user_id);
    }
    if let Some(handle) = handle {
        request = request.body_field("handle", handle);
    }
    if let Some(channel_id) = channel_id {
        request = request.body_field("channel_id", channel_id);
    }

    request
}

/// Replies to a specific YouTube comment
pub fn youtube_replies(comment_id: &str) -> Request {
    Request::post("/youtube/comment_replies").body_field("comment_id", comment_id)
}

/// Reverse phone lookup; `insecure` relaxes server-side input validation
pub fn reverse_phone(phone: &str, insecure: bool) -> Request {
    let mut request = Request::post("/reverse_phone_lookup").header("phone", phone);
    if insecure {
        request = request.header("insecuremode", "true");
    }
    request
}

/// Reverse email lookup; `insecure` relaxes server-side input validation
pub fn reverse_email(email: &str, insecure: bool) -> Request {
    let mut request = Request::post("/reverse_email_lookup").header("email", email);
    if insecure {
        request = request.header("insecuremode", "true");
    }
    request
}

/// Account history for a Twitter user, by handle or numeric ID.
///
/// `by_old` widens the search to old usernames.
pub fn twitter_history(handle: Option<&str>, id: Option<i64>, by_old: bool) -> Request {
    let mut request = Request::post("/twitter_history_lookup");

    if let Some(handle) = handle {
        request = request.header("handle", handle);
    }
    if let Some(id) = id {
        request = request.header("id", id.to_string());
    }
    if by_old {
        request = request.header("byold", "true");
    }

    request
}

/// Free-text search of the archival database
pub fn database_lookup(query: &str, exact: bool) -> Request {
    let mut request = Request::post("/database_lookup").header("query", query);
    if exact {
        request = request.header("exact", "true");
    }
    request
}

/// All chat messages logged for a Twitch user on the given log server
pub fn twitch_messages(username: &str, server: &str, offset: u32) -> Request {
    Request::post("/twitch/user_all_messages")
        .header("username", username)
        .header("server", server)
        .header("offset", offset.to_string())
}

/// Chat bans and timeouts recorded for a Twitch user
pub fn twitch_timeouts(username: &str, offset: u32) -> Request {
    Request::post("/twitch/user_all_timeouts")
        .header("username", username)
        .header("offset", offset.to_string())
}

/// Name and account history for a Twitch user
pub fn twitch_history(username: &str, mode: Option<&str>) -> Request {
    let mut request = Request::post("/twitch/user_history").header("username", username);
    if let Some(mode) = mode {
        request = request.header("mode", mode);
    }
    request
}

/// Channels a Twitch user follows
pub fn twitch_followage(username: &str) -> Request {
    Request::post("/twitch/followage").header("username", username)
}

/// Followers of a Twitch user
pub fn twitch_followers(username: &str) -> Request {
    Request::post("/twitch/followers").header("username", username)
}

/// All chat messages logged for a Kick user
pub fn kick_messages(username: &str, offset: u32) -> Request {
    Request::post("/kick/user_all_messages")
        .header("username", username)
        .header("offset", offset.to_string())
}

/// Chat bans and timeouts recorded for a Kick user
pub fn kick_timeouts(username: &str) -> Request {
    Request::post("/kick/user_all_timeouts").header("username", username)
}

/// Channels a Kick user moderates
pub fn kick_mod_channels(username: &str) -> Request {
    Request::post("/kick/user_channel_mods_in").header("username", username)
}

/// Subscribers of a Kick user
pub fn kick_subscribers(username: &str) -> Request {
    Request::post("/kick/user_subscribers_list").header("username", username)
}
