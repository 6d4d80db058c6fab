use super::{ConfigValidationError, FactorKey, WeightConfiguration};

pub const SKILLS_FIRST: &str = "Skills First";
pub const ALL_EQUAL: &str = "All Equal";

// complementaryMatch, availability, preferredMode, primaryGoal, preferredFrequency,
// partnerPreference, sessionLength, timeZone, studyPersonality
const SWEEP: &[(&str, [f64; FactorKey::COUNT])] = &[
    (SKILLS_FIRST, [80.0, 30.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Avail 35", [80.0, 35.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Avail 40", [80.0, 40.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Avail 45", [80.0, 45.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Avail 50", [80.0, 50.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 85 / Avail 30", [85.0, 30.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 90 / Avail 30", [90.0, 30.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 95 / Avail 30", [95.0, 30.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 100 / Avail 30", [100.0, 30.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Mode 20", [80.0, 30.0, 20.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Goal 20", [80.0, 30.0, 15.0, 20.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Freq 20", [80.0, 30.0, 15.0, 12.0, 20.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Mode+Goal 20", [80.0, 30.0, 20.0, 20.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / All Secondary 15", [80.0, 30.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0]),
    ("Skills 80 / Min 5", [80.0, 30.0, 15.0, 12.0, 12.0, 5.0, 5.0, 5.0, 5.0]),
    ("Skills 80 / Min 8", [80.0, 30.0, 15.0, 12.0, 12.0, 8.0, 8.0, 8.0, 8.0]),
    ("Skills 80 / Min 12", [80.0, 30.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0]),
    ("Skills 70 / Avail 40", [70.0, 40.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 75 / Avail 35", [75.0, 35.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 75 / Avail 40", [75.0, 40.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 70 / Avail 35 / Mode 20", [70.0, 35.0, 20.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 70 / Avail 35 / Goal 20", [70.0, 35.0, 15.0, 20.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 60 / Avail 50", [60.0, 50.0, 15.0, 15.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 90 / Avail 40", [90.0, 40.0, 15.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 85 / Avail 35 / Mode 18", [85.0, 35.0, 18.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 80 / Avail 35 / All 15", [80.0, 35.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0]),
    ("Skills 75 / Avail 45 / Mode 18", [75.0, 45.0, 18.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
    ("Skills 85 / Avail 40 / Min 12", [85.0, 40.0, 15.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0]),
];

const ALL_EQUAL_WEIGHTS: [f64; FactorKey::COUNT] =
    [25.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0];

/// The weight sweep without penalty variants, in sweep order.
pub fn sweep() -> Result<Vec<WeightConfiguration>, ConfigValidationError> {
    SWEEP
        .iter()
        .map(|(name, weights)| WeightConfiguration::from_ordered(*name, *weights, false))
        .collect()
}

/// Every preset: the sweep, the negative-marking variant of "Skills First", and the
/// flat "All Equal" baseline.
pub fn catalog() -> Result<Vec<WeightConfiguration>, ConfigValidationError> {
    let mut configurations = sweep()?;
    configurations.push(skills_first()?.with_negative_marking());
    configurations.push(all_equal()?);
    Ok(configurations)
}

pub fn skills_first() -> Result<WeightConfiguration, ConfigValidationError> {
    WeightConfiguration::from_ordered(SKILLS_FIRST, SWEEP[0].1, false)
}

pub fn all_equal() -> Result<WeightConfiguration, ConfigValidationError> {
    WeightConfiguration::from_ordered(ALL_EQUAL, ALL_EQUAL_WEIGHTS, false)
}

pub fn find(name: &str) -> Result<Option<WeightConfiguration>, ConfigValidationError> {
    Ok(catalog()?
        .into_iter()
        .find(|configuration| configuration.name().eq_ignore_ascii_case(name)))
}
