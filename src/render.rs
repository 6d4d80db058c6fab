use peerfuse::matching::weights::WeightConfiguration;
use peerfuse::matching::{
    CandidateMatch, ComparisonReport, ConfigurationOutcome, FactorKey, NegativeMarkingAssessment,
    PreferenceFactor, Profile, QualityTier, ScoreBreakdown, SimulationStatistics,
};

const NAME_WIDTH: usize = 36;

pub(crate) fn render_comparison(report: &ComparisonReport) {
    println!("Weight configuration comparison");
    match report.seed {
        Some(seed) => println!(
            "Population: {} profiles (seed {})",
            report.population_size, seed
        ),
        None => println!("Population: {} profiles", report.population_size),
    }

    println!(
        "\n{:<width$} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>9}",
        "Configuration",
        "Avg",
        "Median",
        ">=80%",
        ">=120%",
        "Exc%",
        "Unus%",
        "Eligible",
        width = NAME_WIDTH
    );
    for outcome in &report.outcomes {
        match outcome {
            ConfigurationOutcome::Scored(stats) => println!(
                "{:<width$} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>9}",
                stats.configuration,
                stats.mean_score,
                stats.median_score,
                stats.usable_80_pct,
                stats.recommended_120_pct,
                stats.excellent_pct(),
                stats.unusable_pct(),
                stats.eligible_pairs,
                width = NAME_WIDTH
            ),
            ConfigurationOutcome::Degenerate {
                configuration,
                note,
            } => println!("{:<width$} {}", configuration, note, width = NAME_WIDTH),
        }
    }

    for ranking in &report.rankings {
        println!("\nTop by {}", ranking.label);
        for entry in ranking.entries.iter().take(5) {
            println!(
                "{:>3}. {:<width$} {:>8.1}",
                entry.rank,
                entry.configuration,
                entry.value,
                width = NAME_WIDTH
            );
        }
    }

    println!("\nComposite (usable x1.0 + avg x0.5 + excellent x0.3 + not unusable x0.2)");
    for entry in report.composite.iter().take(10) {
        println!(
            "{:>3}. {:<width$} {:>8.1}",
            entry.rank,
            entry.configuration,
            entry.composite,
            width = NAME_WIDTH
        );
    }

    match report
        .recommended
        .as_deref()
        .and_then(|name| report.statistics_for(name))
    {
        Some(stats) => {
            println!("\nRecommended: {}", stats.configuration);
            render_distribution(stats);
        }
        None => println!("\nRecommended: none (every configuration was degenerate)"),
    }
}

fn render_distribution(stats: &SimulationStatistics) {
    println!(
        "  avg {:.1}, median {:.1}, range {:.1}-{:.1} (gap {:.1})",
        stats.mean_score,
        stats.median_score,
        stats.min_score,
        stats.max_score,
        stats.mean_median_gap()
    );
    for tier in QualityTier::ordered() {
        if let Some(share) = stats.tier(tier) {
            println!(
                "  {:<10} {:>8} {:>6} ({:.1}%)",
                share.label, share.range, share.count, share.pct
            );
        }
    }
    println!(
        "  {} of {} pairs eligible ({:.1}%), {:.2} complementary skills per pair",
        stats.eligible_pairs,
        stats.evaluated_pairs,
        stats.eligibility_pct(),
        stats.mean_complementary_matches
    );
}

pub(crate) fn render_breakdown(
    config: &WeightConfiguration,
    first: &Profile,
    second: &Profile,
    breakdown: &ScoreBreakdown,
) {
    println!("{} vs {} under '{}'", first.id(), second.id(), config.name());
    for profile in [first, second] {
        println!(
            "- {}: strong in {}; wants help with {}",
            profile.display_name(),
            join_subjects(profile.strengths().iter().map(|s| s.label())),
            join_subjects(profile.weaknesses().iter().map(|s| s.label()))
        );
    }

    println!();
    for component in &breakdown.components {
        println!("{:>+8.1}  {}", component.points, component.note);
    }
    println!(
        "{:>8.1}  total ({} shared preferences, {} complementary skills)",
        breakdown.result.score,
        breakdown.result.matched_factors,
        breakdown.result.complementary_matches
    );
    if !breakdown.result.is_eligible() {
        println!("Not eligible: neither profile can teach the other.");
    }
}

pub(crate) fn render_top_matches(
    config: &WeightConfiguration,
    target: &Profile,
    matches: &[CandidateMatch],
) {
    println!("Partners for {} under '{}'", target.id(), config.name());
    if matches.is_empty() {
        println!("No eligible partners: nobody can teach or learn from this profile.");
        return;
    }
    for (rank, candidate) in matches.iter().enumerate() {
        println!(
            "{:>3}. {:<8} {:>8.1}  {:<16} {} shared, {} complementary",
            rank + 1,
            candidate.candidate.to_string(),
            candidate.score(),
            candidate.level.label(),
            candidate.result.matched_factors,
            candidate.result.complementary_matches
        );
    }
}

pub(crate) fn render_assessment(assessment: &NegativeMarkingAssessment) {
    println!(
        "Negative marking: '{}' vs '{}'",
        assessment.baseline, assessment.candidate
    );
    println!("  average score     {:>+8.2}", assessment.mean_delta);
    println!("  usable (>=80) %   {:>+8.2}", assessment.usable_80_delta);
    println!("  quality spread    {:>+8.2}", assessment.quality_spread_delta);
    println!("  lowest score      {:>+8.2}", assessment.min_score_delta);
    println!("  unusable %        {:>+8.2}", assessment.unusable_delta);
    println!("Verdict: {}", assessment.verdict.label());
}

pub(crate) fn render_presets(configs: &[WeightConfiguration]) {
    print!("{:<width$}", "Preset", width = NAME_WIDTH);
    for key in FactorKey::ordered() {
        print!(" {:>5}", short_key(key));
    }
    println!("  neg");

    for config in configs {
        print!("{:<width$}", config.name(), width = NAME_WIDTH);
        for key in FactorKey::ordered() {
            print!(" {:>5}", config.weights().get(key));
        }
        println!("  {}", if config.negative_marking() { "yes" } else { "no" });
    }
}

fn short_key(key: FactorKey) -> &'static str {
    match key {
        FactorKey::ComplementaryMatch => "comp",
        FactorKey::Preference(factor) => match factor {
            PreferenceFactor::Availability => "avail",
            PreferenceFactor::PreferredMode => "mode",
            PreferenceFactor::PrimaryGoal => "goal",
            PreferenceFactor::PreferredFrequency => "freq",
            PreferenceFactor::PartnerPreference => "level",
            PreferenceFactor::SessionLength => "len",
            PreferenceFactor::TimeZone => "tz",
            PreferenceFactor::StudyPersonality => "style",
        },
    }
}

fn join_subjects<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}
