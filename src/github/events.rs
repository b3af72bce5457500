/// One entry of a user's public activity feed.
///
/// The `payload` shape depends on `kind`, so it stays untyped until
/// [`Event::kind`] knows which shape to decode it into.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub tag: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    pub repo: Repo,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Repo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push(PushPayload),
    Create(RefPayload),
    Delete(RefPayload),
    Issues(ActionPayload),
    IssueComment,
    Watch,
    Fork,
    PullRequest(ActionPayload),
    PullRequestReview,
    PullRequestReviewComment,
    Release,
    Member,
    /// Unrecognized tag, carried verbatim.
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RefPayload {
    #[serde(default)]
    pub ref_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ActionPayload {
    #[serde(default)]
    pub action: String,
}

impl Event {
    /// Classifies the event tag and decodes the matching payload shape.
    ///
    /// A missing, malformed, or type-mismatched payload decodes to the
    /// shape's `Default`; one bad event never fails the batch.
    pub fn kind(&self) -> EventKind {
        match self.tag.as_str() {
            "PushEvent" => EventKind::Push(decode(&self.payload)),
            "CreateEvent" => EventKind::Create(decode(&self.payload)),
            "DeleteEvent" => EventKind::Delete(decode(&self.payload)),
            "IssuesEvent" => EventKind::Issues(decode(&self.payload)),
            "IssueCommentEvent" => EventKind::IssueComment,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "PullRequestEvent" => EventKind::PullRequest(decode(&self.payload)),
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "ReleaseEvent" => EventKind::Release,
            "MemberEvent" => EventKind::Member,
            other => EventKind::Other(other.to_string()),
        }
    }
}

fn decode<T>(payload: &serde_json::Value) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_value(payload.clone()).unwrap_or_default()
}
