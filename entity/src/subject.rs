use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
pub enum Subject {
    #[sea_orm(string_value = "FullStack")]
    #[serde(rename = "FullStack")]
    FullStack,
    #[sea_orm(string_value = "Software Testing")]
    #[serde(rename = "Software Testing")]
    SoftwareTesting,
    #[sea_orm(string_value = "Telecommunication")]
    #[serde(rename = "Telecommunication")]
    Telecommunication,
    #[sea_orm(string_value = "Data Science")]
    #[serde(rename = "Data Science")]
    DataScience,
    #[sea_orm(string_value = "Machine Learning")]
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[sea_orm(string_value = "Artificial Intelligence")]
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[sea_orm(string_value = "Computer Networks")]
    #[serde(rename = "Computer Networks")]
    ComputerNetworks,
    #[sea_orm(string_value = "Database Management")]
    #[serde(rename = "Database Management")]
    DatabaseManagement,
}

impl Subject {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullStack => "FullStack",
            Self::SoftwareTesting => "Software Testing",
            Self::Telecommunication => "Telecommunication",
            Self::DataScience => "Data Science",
            Self::MachineLearning => "Machine Learning",
            Self::ArtificialIntelligence => "Artificial Intelligence",
            Self::ComputerNetworks => "Computer Networks",
            Self::DatabaseManagement => "Database Management",
        }
    }

    pub fn all() -> Vec<Subject> {
        Self::iter().collect()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubject(pub String);

impl fmt::Display for UnknownSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown subject: {}", self.0)
    }
}

impl std::error::Error for UnknownSubject {}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| UnknownSubject(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_display_name() {
        for subject in Subject::iter() {
            assert_eq!(subject.as_str().parse::<Subject>(), Ok(subject));
        }
        assert_eq!(Subject::all().len(), 8);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("Quantum Basket Weaving".parse::<Subject>().is_err());
        assert!("data science".parse::<Subject>().is_err());
    }
}
