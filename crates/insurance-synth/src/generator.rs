//! Randomized field constructors for synthetic policy records.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Poisson};
use tracing::debug;

use crate::config::SynthConfig;
use crate::error::{Result, SynthError};
use crate::record::{Gender, InsuranceRecord, PolicyType, agent_id, policy_id};

const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Christopher", "Karen", "Charles", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Sandra", "Mark", "Margaret", "Donald", "Ashley", "Steven", "Kimberly", "Andrew", "Emily",
    "Paul", "Donna", "Joshua", "Michelle",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

/// Span of the start/end date windows around the reference date.
const POLICY_WINDOW_MONTHS: u32 = 60;

/// Mean of the claim count distribution.
const CLAIM_RATE: f64 = 1.0;

/// Generate `config.records` policy records from `rng`.
///
/// The caller owns the generator, so the same seed always yields the same
/// records.
pub fn generate_records<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SynthConfig,
) -> Result<Vec<InsuranceRecord>> {
    let reference = config.reference_date;
    let earliest_start = reference
        .checked_sub_months(Months::new(POLICY_WINDOW_MONTHS))
        .ok_or_else(|| SynthError::DateOutOfRange(format!("{} minus 5 years", reference)))?;
    let latest_end = reference
        .checked_add_months(Months::new(POLICY_WINDOW_MONTHS))
        .ok_or_else(|| SynthError::DateOutOfRange(format!("{} plus 5 years", reference)))?;
    let claims = claim_distribution(CLAIM_RATE)?;

    debug!(
        "Generating {} records, start dates {}..={}, end dates {}..={}",
        config.records, earliest_start, reference, reference, latest_end
    );

    (1..=config.records)
        .map(|sequence| -> Result<InsuranceRecord> {
            Ok(InsuranceRecord {
                policy_id: policy_id(sequence),
                customer_name: fake_name(rng),
                age: rng.gen_range(18..80),
                gender: Gender::ALL.choose(rng).copied(),
                policy_type: *PolicyType::ALL.choose(rng).unwrap_or(&PolicyType::Auto),
                premium: Some(round2(rng.gen_range(500.0..5000.0))),
                coverage_amount: round2(rng.gen_range(50_000.0..1_000_000.0)),
                start_date: date_between(rng, earliest_start, reference)?,
                end_date: date_between(rng, reference, latest_end)?,
                is_active: rng.gen_bool(config.active_probability),
                risk_score: rng.gen_range(1..=100),
                claim_history: claims.sample(rng) as i64,
                annual_income: round2(rng.gen_range(20_000.0..200_000.0)),
                zip_code: fake_zip_code(rng),
                agent_id: agent_id(rng.gen_range(1..=100)),
            })
        })
        .collect()
}

/// Draw a "First Last" name from the fixed pools.
pub fn fake_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    format!("{} {}", first, last)
}

/// Draw a five digit US-style zip code.
pub fn fake_zip_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.gen_range(501..=99_950))
}

/// Draw a date uniformly from the inclusive range `[start, end]`.
pub fn date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<NaiveDate> {
    let span = end.signed_duration_since(start).num_days().max(0) as u64;
    let offset = rng.gen_range(0..=span);
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| SynthError::DateOutOfRange(format!("{} plus {} days", start, offset)))
}

/// Poisson distribution of yearly claim counts with mean `rate`.
pub fn claim_distribution(rate: f64) -> Result<Poisson<f64>> {
    Poisson::new(rate)
        .map_err(|e| SynthError::InvalidDistribution(format!("Poisson({}): {}", rate, e)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
