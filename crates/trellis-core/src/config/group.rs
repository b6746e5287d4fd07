use serde::{Deserialize, Serialize};

/// A named workspace container. Order defines on-screen numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Nine groups named "1" through "9".
pub fn defaults() -> Vec<Group> {
    "123456789"
        .chars()
        .map(|c| Group::new(c.to_string()))
        .collect()
}

/// Returns names that appear more than once, in first-seen order.
pub fn duplicate_names(groups: &[Group]) -> Vec<String> {
    let mut dups: Vec<String> = Vec::new();
    for (i, g) in groups.iter().enumerate() {
        if groups[..i].iter().any(|prev| prev.name == g.name) && !dups.contains(&g.name) {
            dups.push(g.name.clone());
        }
    }
    dups
}
