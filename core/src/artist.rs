use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unlabeled,
    Positive,
    Negative,
    Neutral,
    /// Derived from the positive-artist graph, never set by the user
    Potential,
}

impl Status {
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Unlabeled => "",
            Status::Positive => "+",
            Status::Negative => "-",
            Status::Neutral => "=",
            Status::Potential => "*",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Status::Unlabeled),
            "+" => Some(Status::Positive),
            "-" => Some(Status::Negative),
            "=" => Some(Status::Neutral),
            "*" => Some(Status::Potential),
            _ => None,
        }
    }

    /// Statuses a user may assign directly from the classification prompt.
    pub fn is_user_assignable(&self) -> bool {
        matches!(self, Status::Positive | Status::Negative | Status::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unlabeled => "unlabeled",
            Status::Positive => "positive",
            Status::Negative => "negative",
            Status::Neutral => "neutral",
            Status::Potential => "potential",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub related: Vec<String>,
    pub genres: Vec<String>,
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: Status::Unlabeled,
            related: Vec::new(),
            genres,
        }
    }

    /// Placeholder entry for a related-artist ID the service has not described yet.
    pub fn stub(id: impl Into<String>) -> Self {
        Self::new(id, String::new(), Vec::new())
    }

    pub fn is_stub(&self) -> bool {
        self.name.is_empty()
    }

    pub fn display_name(&self) -> &str {
        if self.is_stub() { &self.id } else { &self.name }
    }

    pub fn lists_as_related(&self, artist_id: &str) -> bool {
        self.related.iter().any(|related_id| related_id == artist_id)
    }
}
