//! Learner profile model and the closed enumerations profiles are drawn from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier wrapper for learner profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub u32);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User{}", self.0)
    }
}

/// Subject tags a learner can declare as a strength or a weakness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
    English,
    History,
    Economics,
    Statistics,
    DataStructures,
    Algorithms,
    Calculus,
    LinearAlgebra,
    Psychology,
    Philosophy,
}

impl Subject {
    pub const fn ordered() -> [Self; 15] {
        [
            Self::Math,
            Self::Physics,
            Self::Chemistry,
            Self::Biology,
            Self::ComputerScience,
            Self::English,
            Self::History,
            Self::Economics,
            Self::Statistics,
            Self::DataStructures,
            Self::Algorithms,
            Self::Calculus,
            Self::LinearAlgebra,
            Self::Psychology,
            Self::Philosophy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::ComputerScience => "Computer Science",
            Self::English => "English",
            Self::History => "History",
            Self::Economics => "Economics",
            Self::Statistics => "Statistics",
            Self::DataStructures => "Data Structures",
            Self::Algorithms => "Algorithms",
            Self::Calculus => "Calculus",
            Self::LinearAlgebra => "Linear Algebra",
            Self::Psychology => "Psychology",
            Self::Philosophy => "Philosophy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    EarlyMorning,
    Midday,
    Afternoon,
    Evening,
    LateNight,
}

impl Availability {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EarlyMorning,
            Self::Midday,
            Self::Afternoon,
            Self::Evening,
            Self::LateNight,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlyMorning => "6AM-10AM",
            Self::Midday => "10AM-2PM",
            Self::Afternoon => "2PM-6PM",
            Self::Evening => "6PM-10PM",
            Self::LateNight => "Late night (10PM+)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    VideoCall,
    ChatOnly,
    InPerson,
    Hybrid,
}

impl InteractionMode {
    pub const fn ordered() -> [Self; 4] {
        [Self::VideoCall, Self::ChatOnly, Self::InPerson, Self::Hybrid]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VideoCall => "Online Meeting (Video)",
            Self::ChatOnly => "Chat Only",
            Self::InPerson => "In-Person",
            Self::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    ClearBasics,
    ImproveInternals,
    SemesterExams,
    ProjectCollaboration,
    Other,
}

impl PrimaryGoal {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ClearBasics,
            Self::ImproveInternals,
            Self::SemesterExams,
            Self::ProjectCollaboration,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ClearBasics => "Clear basics",
            Self::ImproveInternals => "Improve internals",
            Self::SemesterExams => "Prepare for semester end exams",
            Self::ProjectCollaboration => "Project collaboration",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    SeveralPerWeek,
    Monthly,
    AsNeeded,
}

impl Frequency {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Weekly,
            Self::SeveralPerWeek,
            Self::Monthly,
            Self::AsNeeded,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Once a week",
            Self::SeveralPerWeek => "2-3 times a week",
            Self::Monthly => "Monthly once",
            Self::AsNeeded => "As needed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLength {
    HalfHour,
    OneHour,
    OneToTwoHours,
    OverTwoHours,
    Flexible,
}

impl SessionLength {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HalfHour,
            Self::OneHour,
            Self::OneToTwoHours,
            Self::OverTwoHours,
            Self::Flexible,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HalfHour => "30 minutes",
            Self::OneHour => "1 hour",
            Self::OneToTwoHours => "1-2 hours",
            Self::OverTwoHours => "2+ hours",
            Self::Flexible => "Flexible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerLevel {
    SameLevel,
    Senior,
    Junior,
    NoPreference,
}

impl PartnerLevel {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SameLevel,
            Self::Senior,
            Self::Junior,
            Self::NoPreference,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SameLevel => "Same year/level",
            Self::Senior => "Senior student",
            Self::Junior => "Junior student",
            Self::NoPreference => "No preference",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeZone {
    UtcMinus8,
    UtcMinus5,
    Utc,
    UtcPlus1,
    UtcPlus530,
    UtcPlus8,
}

impl TimeZone {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::UtcMinus8,
            Self::UtcMinus5,
            Self::Utc,
            Self::UtcPlus1,
            Self::UtcPlus530,
            Self::UtcPlus8,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UtcMinus8 => "UTC-08:00",
            Self::UtcMinus5 => "UTC-05:00",
            Self::Utc => "UTC+00:00",
            Self::UtcPlus1 => "UTC+01:00",
            Self::UtcPlus530 => "UTC+05:30",
            Self::UtcPlus8 => "UTC+08:00",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyPersonality {
    FocusedStructured,
    CasualFlexible,
    Competitive,
    Collaborative,
    Independent,
}

impl StudyPersonality {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::FocusedStructured,
            Self::CasualFlexible,
            Self::Competitive,
            Self::Collaborative,
            Self::Independent,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FocusedStructured => "Focused & Structured",
            Self::CasualFlexible => "Casual & Flexible",
            Self::Competitive => "Competitive",
            Self::Collaborative => "Collaborative",
            Self::Independent => "Independent learner",
        }
    }
}

/// The eight categorical attributes compared by equality during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceFactor {
    Availability,
    PreferredMode,
    PrimaryGoal,
    PreferredFrequency,
    PartnerPreference,
    SessionLength,
    TimeZone,
    StudyPersonality,
}

impl PreferenceFactor {
    pub const COUNT: usize = 8;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Availability,
            Self::PreferredMode,
            Self::PrimaryGoal,
            Self::PreferredFrequency,
            Self::PartnerPreference,
            Self::SessionLength,
            Self::TimeZone,
            Self::StudyPersonality,
        ]
    }

    /// Weight-table key used in configuration files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Availability => "availability",
            Self::PreferredMode => "preferredMode",
            Self::PrimaryGoal => "primaryGoal",
            Self::PreferredFrequency => "preferredFrequency",
            Self::PartnerPreference => "partnerPreference",
            Self::SessionLength => "sessionLength",
            Self::TimeZone => "timeZone",
            Self::StudyPersonality => "studyPersonality",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Availability => "availability",
            Self::PreferredMode => "mode",
            Self::PrimaryGoal => "goal",
            Self::PreferredFrequency => "frequency",
            Self::PartnerPreference => "partner preference",
            Self::SessionLength => "session length",
            Self::TimeZone => "time zone",
            Self::StudyPersonality => "study personality",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Categorical study preferences of a single learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPreferences {
    pub availability: Availability,
    pub preferred_mode: InteractionMode,
    pub primary_goal: PrimaryGoal,
    pub preferred_frequency: Frequency,
    pub partner_preference: PartnerLevel,
    pub session_length: SessionLength,
    pub time_zone: TimeZone,
    pub study_personality: StudyPersonality,
}

impl StudyPreferences {
    pub fn matches_on(&self, other: &StudyPreferences, factor: PreferenceFactor) -> bool {
        match factor {
            PreferenceFactor::Availability => self.availability == other.availability,
            PreferenceFactor::PreferredMode => self.preferred_mode == other.preferred_mode,
            PreferenceFactor::PrimaryGoal => self.primary_goal == other.primary_goal,
            PreferenceFactor::PreferredFrequency => {
                self.preferred_frequency == other.preferred_frequency
            }
            PreferenceFactor::PartnerPreference => {
                self.partner_preference == other.partner_preference
            }
            PreferenceFactor::SessionLength => self.session_length == other.session_length,
            PreferenceFactor::TimeZone => self.time_zone == other.time_zone,
            PreferenceFactor::StudyPersonality => {
                self.study_personality == other.study_personality
            }
        }
    }

    /// Human readable value of one attribute, used in score breakdown notes.
    pub fn label_for(&self, factor: PreferenceFactor) -> &'static str {
        match factor {
            PreferenceFactor::Availability => self.availability.label(),
            PreferenceFactor::PreferredMode => self.preferred_mode.label(),
            PreferenceFactor::PrimaryGoal => self.primary_goal.label(),
            PreferenceFactor::PreferredFrequency => self.preferred_frequency.label(),
            PreferenceFactor::PartnerPreference => self.partner_preference.label(),
            PreferenceFactor::SessionLength => self.session_length.label(),
            PreferenceFactor::TimeZone => self.time_zone.label(),
            PreferenceFactor::StudyPersonality => self.study_personality.label(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{subject:?} is declared as both a strength and a weakness")]
    OverlappingSkills { subject: Subject },
}

/// An immutable learner profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    id: ProfileId,
    display_name: String,
    strengths: BTreeSet<Subject>,
    weaknesses: BTreeSet<Subject>,
    preferences: StudyPreferences,
}

impl Profile {
    pub fn new(
        id: ProfileId,
        display_name: impl Into<String>,
        strengths: BTreeSet<Subject>,
        weaknesses: BTreeSet<Subject>,
        preferences: StudyPreferences,
    ) -> Result<Self, ProfileError> {
        if let Some(subject) = strengths.intersection(&weaknesses).next() {
            return Err(ProfileError::OverlappingSkills { subject: *subject });
        }

        Ok(Self {
            id,
            display_name: display_name.into(),
            strengths,
            weaknesses,
            preferences,
        })
    }

    /// Caller guarantees `strengths` and `weaknesses` are disjoint.
    pub(crate) fn from_disjoint(
        id: ProfileId,
        display_name: String,
        strengths: BTreeSet<Subject>,
        weaknesses: BTreeSet<Subject>,
        preferences: StudyPreferences,
    ) -> Self {
        debug_assert!(strengths.is_disjoint(&weaknesses));
        Self {
            id,
            display_name,
            strengths,
            weaknesses,
            preferences,
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn strengths(&self) -> &BTreeSet<Subject> {
        &self.strengths
    }

    pub fn weaknesses(&self) -> &BTreeSet<Subject> {
        &self.weaknesses
    }

    pub fn preferences(&self) -> &StudyPreferences {
        &self.preferences
    }

    /// Subjects `self` needs help with that `other` can teach.
    pub fn learns_from<'a>(&'a self, other: &'a Profile) -> impl Iterator<Item = Subject> + 'a {
        self.weaknesses.intersection(&other.strengths).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences() -> StudyPreferences {
        StudyPreferences {
            availability: Availability::Evening,
            preferred_mode: InteractionMode::VideoCall,
            primary_goal: PrimaryGoal::ClearBasics,
            preferred_frequency: Frequency::Weekly,
            partner_preference: PartnerLevel::NoPreference,
            session_length: SessionLength::OneHour,
            time_zone: TimeZone::Utc,
            study_personality: StudyPersonality::Collaborative,
        }
    }

    #[test]
    fn rejects_subject_in_both_sets() {
        let result = Profile::new(
            ProfileId(1),
            "User1",
            BTreeSet::from([Subject::Math, Subject::Physics]),
            BTreeSet::from([Subject::Physics]),
            preferences(),
        );

        assert_eq!(
            result,
            Err(ProfileError::OverlappingSkills {
                subject: Subject::Physics
            })
        );
    }

    #[test]
    fn learns_from_lists_teachable_weaknesses() {
        let learner = Profile::new(
            ProfileId(1),
            "User1",
            BTreeSet::from([Subject::History]),
            BTreeSet::from([Subject::Calculus, Subject::Biology]),
            preferences(),
        )
        .expect("valid profile");
        let tutor = Profile::new(
            ProfileId(2),
            "User2",
            BTreeSet::from([Subject::Calculus]),
            BTreeSet::from([Subject::English]),
            preferences(),
        )
        .expect("valid profile");

        let taught: Vec<Subject> = learner.learns_from(&tutor).collect();
        assert_eq!(taught, vec![Subject::Calculus]);
        assert_eq!(tutor.learns_from(&learner).count(), 0);
    }

    #[test]
    fn preference_factor_keys_follow_ordering() {
        let keys: Vec<&str> = PreferenceFactor::ordered()
            .iter()
            .map(|factor| factor.key())
            .collect();
        assert_eq!(
            keys,
            vec![
                "availability",
                "preferredMode",
                "primaryGoal",
                "preferredFrequency",
                "partnerPreference",
                "sessionLength",
                "timeZone",
                "studyPersonality",
            ]
        );
        for (position, factor) in PreferenceFactor::ordered().iter().enumerate() {
            assert_eq!(factor.index(), position);
        }
    }
}
