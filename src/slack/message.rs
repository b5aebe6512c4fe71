//! Slack mrkdwn rendering of the pull request summary.

use crate::github::response::PullRequest;
use chrono::{DateTime, Utc};

const BANNER: &str = ">*Current pull requests statistics *\n";
const SINGLE_PULL_REQUEST: &str = "There is just one open pull request waiting for review \n";
const NO_PULL_REQUESTS: &str =
    "Hurray! There are no open pull requests. Good job team! :happyseal: :happyseal:";

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Builds the whole message, measuring pull request age against `now`.
pub fn build_message(pull_requests: &[PullRequest], now: DateTime<Utc>) -> String {
    if pull_requests.is_empty() {
        return no_pull_request_message();
    }

    let mut message = header(pull_requests.len());
    for pull_request in pull_requests {
        message.push_str(&pull_request_line(pull_request, now));
    }

    message
}

/// The count sentence is left out when `n` is zero.
pub fn header(n: usize) -> String {
    let mut header = String::from(BANNER);

    if n > 1 {
        header.push_str(&format!(
            "There are {} open pull requests waiting for review :angrier_seal: :red_circle: \n",
            n
        ));
    } else if n == 1 {
        header.push_str(SINGLE_PULL_REQUEST);
    }

    header
}

pub fn no_pull_request_message() -> String {
    let mut message = header(0);
    message.push_str(NO_PULL_REQUESTS);
    message
}

pub fn pull_request_line(pull_request: &PullRequest, now: DateTime<Utc>) -> String {
    format!(
        "* <{}|{}> in {} for *{:.1} hours* | opened by <{}|{}>\n",
        pull_request.html_url,
        pull_request.title,
        pull_request.head_repo_name(),
        hours_since(pull_request.created_at, now),
        pull_request.author_url(),
        pull_request.author_login(),
    )
}

fn hours_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / MILLIS_PER_HOUR
}
