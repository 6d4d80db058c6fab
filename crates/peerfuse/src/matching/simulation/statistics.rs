use serde::Serialize;

/// Pairs at or above this score are considered usable.
pub const USABLE_THRESHOLD: f64 = 80.0;
/// Pairs at or above this score are worth recommending.
pub const RECOMMENDED_THRESHOLD: f64 = 120.0;

/// Six fixed score bands used to summarise a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Great,
    Good,
    Fair,
    Poor,
    Unusable,
}

impl QualityTier {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Excellent,
            Self::Great,
            Self::Good,
            Self::Fair,
            Self::Poor,
            Self::Unusable,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unusable => "Unusable",
        }
    }

    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Excellent => ">=150",
            Self::Great => "120-149",
            Self::Good => "100-119",
            Self::Fair => "80-99",
            Self::Poor => "50-79",
            Self::Unusable => "<50",
        }
    }

    /// Inclusive lower bound of the band; `None` for the open-ended bottom band.
    pub const fn floor(self) -> Option<f64> {
        match self {
            Self::Excellent => Some(150.0),
            Self::Great => Some(120.0),
            Self::Good => Some(100.0),
            Self::Fair => Some(80.0),
            Self::Poor => Some(50.0),
            Self::Unusable => None,
        }
    }

    pub fn for_score(score: f64) -> Self {
        Self::ordered()
            .into_iter()
            .find(|tier| tier.floor().map_or(true, |floor| score >= floor))
            .unwrap_or(Self::Unusable)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierShare {
    pub tier: QualityTier,
    pub label: &'static str,
    pub range: &'static str,
    pub count: u64,
    pub pct: f64,
}

/// Aggregate statistics of one (population, configuration) run over eligible pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStatistics {
    pub configuration: String,
    pub negative_marking: bool,
    pub population_size: usize,
    pub evaluated_pairs: u64,
    pub eligible_pairs: u64,
    /// Pairs dropped by the complementary-skill filter.
    pub filtered_pairs: u64,
    pub mean_score: f64,
    /// Lower middle element of the ascending scores when the count is even.
    pub median_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub tiers: Vec<TierShare>,
    pub usable_80_pct: f64,
    pub recommended_120_pct: f64,
    pub mean_complementary_matches: f64,
    pub zero_complementary_pct: f64,
}

impl SimulationStatistics {
    pub fn tier(&self, tier: QualityTier) -> Option<&TierShare> {
        self.tiers.iter().find(|share| share.tier == tier)
    }

    pub fn tier_pct(&self, tier: QualityTier) -> f64 {
        self.tier(tier).map_or(0.0, |share| share.pct)
    }

    pub fn excellent_pct(&self) -> f64 {
        self.tier_pct(QualityTier::Excellent)
    }

    pub fn unusable_pct(&self) -> f64 {
        self.tier_pct(QualityTier::Unusable)
    }

    pub fn score_range(&self) -> f64 {
        self.max_score - self.min_score
    }

    /// Distance between mean and median; smaller means more consistent scoring.
    pub fn mean_median_gap(&self) -> f64 {
        (self.mean_score - self.median_score).abs()
    }

    /// Percentage points of excellent+great pairs minus poor+unusable pairs.
    pub fn quality_spread(&self) -> f64 {
        (self.tier_pct(QualityTier::Excellent) + self.tier_pct(QualityTier::Great))
            - (self.tier_pct(QualityTier::Poor) + self.tier_pct(QualityTier::Unusable))
    }

    /// Share of evaluated pairs that survived the eligibility filter, in percent.
    pub fn eligibility_pct(&self) -> f64 {
        if self.evaluated_pairs == 0 {
            0.0
        } else {
            self.eligible_pairs as f64 / self.evaluated_pairs as f64 * 100.0
        }
    }
}
