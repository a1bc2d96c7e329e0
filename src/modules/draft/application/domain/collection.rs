use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Skills,
    Services,
    Projects,
    Socials,
    Messages,
    Reviews,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Skills,
        Collection::Services,
        Collection::Projects,
        Collection::Socials,
        Collection::Messages,
        Collection::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Skills => "skills",
            Collection::Services => "services",
            Collection::Projects => "projects",
            Collection::Socials => "socials",
            Collection::Messages => "messages",
            Collection::Reviews => "reviews",
        }
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
