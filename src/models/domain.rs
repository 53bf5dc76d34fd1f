use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service type a request asks for and a helper offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Cleaning,
    Cooking,
    Driving,
    Gardening,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Cleaning,
        SkillCategory::Cooking,
        SkillCategory::Driving,
        SkillCategory::Gardening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Cleaning => "cleaning",
            SkillCategory::Cooking => "cooking",
            SkillCategory::Driving => "driving",
            SkillCategory::Gardening => "gardening",
        }
    }

    /// Label used for helpers offering this service
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Cleaning => "Cleaner",
            SkillCategory::Cooking => "Cook",
            SkillCategory::Driving => "Driver",
            SkillCategory::Gardening => "Gardener",
        }
    }

    /// Parse a helper's skill label.
    ///
    /// Accepts both the provider label ("Cook") and the service name ("cooking").
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|skill| {
            label.eq_ignore_ascii_case(skill.label()) || label.eq_ignore_ascii_case(skill.as_str())
        })
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    /// Strict parse used for inbound requests: only the service names are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|skill| value.eq_ignore_ascii_case(skill.as_str()))
            .ok_or_else(|| {
                format!(
                    "unrecognized skill category '{}', expected one of: {}",
                    value, "cleaning, cooking, driving, gardening"
                )
            })
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General availability bucket of a helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingHours {
    Morning,
    Afternoon,
    Evening,
    FullDay,
}

impl WorkingHours {
    pub const ALL: [WorkingHours; 4] = [
        WorkingHours::Morning,
        WorkingHours::Afternoon,
        WorkingHours::Evening,
        WorkingHours::FullDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkingHours::Morning => "morning",
            WorkingHours::Afternoon => "afternoon",
            WorkingHours::Evening => "evening",
            WorkingHours::FullDay => "full_day",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "morning" => Some(WorkingHours::Morning),
            "afternoon" => Some(WorkingHours::Afternoon),
            "evening" => Some(WorkingHours::Evening),
            "full_day" | "full day" | "full-day" | "fullday" | "flexible" | "any" => {
                Some(WorkingHours::FullDay)
            }
            _ => None,
        }
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred time window of a service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Morning,
    Midday,
    Afternoon,
    Evening,
    Flexible,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Morning,
        TimeWindow::Midday,
        TimeWindow::Afternoon,
        TimeWindow::Evening,
        TimeWindow::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Morning => "morning",
            TimeWindow::Midday => "midday",
            TimeWindow::Afternoon => "afternoon",
            TimeWindow::Evening => "evening",
            TimeWindow::Flexible => "flexible",
        }
    }

    /// Working-hours buckets that can serve this window
    pub fn acceptable_hours(&self) -> &'static [WorkingHours] {
        match self {
            TimeWindow::Morning => &[WorkingHours::Morning, WorkingHours::FullDay],
            TimeWindow::Midday => &[
                WorkingHours::Morning,
                WorkingHours::Afternoon,
                WorkingHours::FullDay,
            ],
            TimeWindow::Afternoon => &[WorkingHours::Afternoon, WorkingHours::FullDay],
            TimeWindow::Evening => &[WorkingHours::Evening, WorkingHours::FullDay],
            TimeWindow::Flexible => &WorkingHours::ALL,
        }
    }

    pub fn accepts(&self, hours: WorkingHours) -> bool {
        self.acceptable_hours().contains(&hours)
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|window| value.eq_ignore_ascii_case(window.as_str()))
            .ok_or_else(|| {
                format!(
                    "unrecognized time window '{}', expected one of: {}",
                    value, "morning, midday, afternoon, evening, flexible"
                )
            })
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated service request handed to the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRequest {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub skill: SkillCategory,
    #[serde(rename = "timeWindow")]
    pub time_window: TimeWindow,
    pub address: String,
}

/// Service provider as supplied by the candidate repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(rename = "contactNumber", alias = "phone")]
    pub contact_number: String,
    #[serde(deserialize_with = "deserialize_skill_label")]
    pub skill: SkillCategory,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "preferredAreas", default)]
    pub preferred_areas: Vec<String>,
    #[serde(
        rename = "workingHours",
        default,
        deserialize_with = "deserialize_working_hours"
    )]
    pub working_hours: Option<WorkingHours>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "isAvailable", default = "default_true")]
    pub is_available: bool,
    #[serde(rename = "isAssigned", default)]
    pub is_assigned: bool,
}

impl Candidate {
    /// Available and not yet assigned to a booking
    pub fn is_open(&self) -> bool {
        self.is_available && !self.is_assigned
    }

    /// Experience in years, absent treated as zero
    pub fn experience(&self) -> u32 {
        self.experience_years.unwrap_or(0)
    }
}

fn default_true() -> bool {
    true
}

fn deserialize_skill_label<'de, D>(deserializer: D) -> Result<SkillCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    SkillCategory::from_label(&label)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown skill label '{}'", label)))
}

// Unknown labels degrade to "not recorded" instead of rejecting the helper
fn deserialize_working_hours<'de, D>(deserializer: D) -> Result<Option<WorkingHours>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(WorkingHours::from_label))
}

/// Points awarded per scoring component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: u8,
    pub availability: u8,
    pub location: u8,
    pub experience: u8,
}

impl ScoreBreakdown {
    pub const MAX_SCORE: u8 = 100;

    pub fn total(&self) -> u8 {
        let sum = self.skill as u16
            + self.availability as u16
            + self.location as u16
            + self.experience as u16;
        sum.min(Self::MAX_SCORE as u16) as u8
    }
}

/// A ranked candidate with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}
