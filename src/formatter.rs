use crate::github::{Event, EventKind};

const DIVIDER_WIDTH: usize = 46;

/// Renders the full activity report: header, divider, one line per event.
pub fn format_report(username: &str, events: &[Event]) -> String {
    let mut out = String::new();

    if events.is_empty() {
        out.push_str("No recent activity found for this user.\n");
        return out;
    }

    out.push_str(&format!("Recent activity for {username}:\n"));
    out.push_str(&"━".repeat(DIVIDER_WIDTH));
    out.push('\n');

    for event in events {
        out.push_str(&format_event(event));
        out.push('\n');
    }

    out
}

/// Renders one event as `<emoji> <verb phrase> <repo> (<timestamp>)`.
///
/// Total function: unknown tags and undecodable payloads degrade to
/// documented defaults, never to an error.
pub fn format_event(event: &Event) -> String {
    let time = event.created_at.format("%Y-%m-%d %H:%M");
    let repo = &event.repo.name;

    match event.kind() {
        EventKind::Push(payload) => {
            let count = payload.commits.len();
            let word = if count == 1 { "commit" } else { "commits" };
            format!("🔨 Pushed {count} {word} to {repo} ({time})")
        }
        EventKind::Create(payload) => {
            let ref_type = non_empty_or(&payload.ref_type, "repository");
            format!("✨ Created {ref_type} in {repo} ({time})")
        }
        EventKind::Delete(payload) => {
            let ref_type = non_empty_or(&payload.ref_type, "branch");
            format!("🗑️ Deleted {ref_type} in {repo} ({time})")
        }
        EventKind::Issues(payload) => {
            let action = capitalize(non_empty_or(&payload.action, "updated"));
            format!("📝 {action} an issue in {repo} ({time})")
        }
        EventKind::IssueComment => {
            format!("💬 Commented on an issue in {repo} ({time})")
        }
        EventKind::Watch => format!("⭐ Starred {repo} ({time})"),
        EventKind::Fork => format!("🍴 Forked {repo} ({time})"),
        EventKind::PullRequest(payload) => {
            let action = capitalize(non_empty_or(&payload.action, "updated"));
            format!("🔀 {action} a pull request in {repo} ({time})")
        }
        EventKind::PullRequestReview => {
            format!("👀 Reviewed a pull request in {repo} ({time})")
        }
        EventKind::PullRequestReviewComment => {
            format!("🗨️ Commented on a pull request in {repo} ({time})")
        }
        EventKind::Release => format!("🚀 Published a release in {repo} ({time})"),
        EventKind::Member => format!("👥 Added a collaborator to {repo} ({time})"),
        EventKind::Other(tag) => {
            let name = tag.strip_suffix("Event").unwrap_or(&tag);
            format!("📌 {name} in {repo} ({time})")
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Uppercases the first character by codepoint, leaving the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
