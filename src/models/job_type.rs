use serde::{Deserialize, Serialize};

/// Employment type offered on a job listing. Stored and serialized with the
/// human-readable labels the careers form has always used.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum JobType {
    #[sqlx(rename = "Full-time")]
    #[serde(rename = "Full-time")]
    FullTime,
    #[sqlx(rename = "Part-time")]
    #[serde(rename = "Part-time")]
    PartTime,
    #[sqlx(rename = "Contract")]
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }

    pub fn all() -> &'static [JobType] {
        &[Self::FullTime, Self::PartTime, Self::Contract]
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" => Ok(Self::FullTime),
            "part-time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            _ => Err(format!("invalid job type: {}", s)),
        }
    }
}
