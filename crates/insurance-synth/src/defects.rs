//! Deliberate data-quality defects applied after generation.
//!
//! Each defect touches a set of distinct rows chosen by the caller's
//! generator. The touched rows are returned so tests and logs can tell which
//! cells were damaged on purpose.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DefectPlan;
use crate::record::InsuranceRecord;

/// Zip code written into rows selected for the invalid zip defect.
pub const INVALID_ZIP_CODE: &str = "INVALID";

/// Zero-based row indices touched by each defect, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectedDefects {
    pub uppercase_names: Vec<usize>,
    pub missing_genders: Vec<usize>,
    pub missing_premiums: Vec<usize>,
    pub invalid_zip_codes: Vec<usize>,
}

impl InjectedDefects {
    /// Total number of damaged cells.
    pub fn total(&self) -> usize {
        self.uppercase_names.len()
            + self.missing_genders.len()
            + self.missing_premiums.len()
            + self.invalid_zip_codes.len()
    }
}

/// Apply `plan` to `records` in place.
pub fn inject_defects<R: Rng + ?Sized>(
    rng: &mut R,
    records: &mut [InsuranceRecord],
    plan: &DefectPlan,
) -> InjectedDefects {
    let uppercase_names = pick_rows(rng, records.len(), plan.uppercase_names);
    for &row in &uppercase_names {
        records[row].customer_name = records[row].customer_name.to_uppercase();
    }

    let missing_genders = pick_rows(rng, records.len(), plan.missing_genders);
    for &row in &missing_genders {
        records[row].gender = None;
    }

    let missing_premiums = pick_rows(rng, records.len(), plan.missing_premiums);
    for &row in &missing_premiums {
        records[row].premium = None;
    }

    let invalid_zip_codes = pick_rows(rng, records.len(), plan.invalid_zip_codes);
    for &row in &invalid_zip_codes {
        records[row].zip_code = INVALID_ZIP_CODE.to_string();
    }

    let injected = InjectedDefects {
        uppercase_names,
        missing_genders,
        missing_premiums,
        invalid_zip_codes,
    };
    debug!("Injected {} defects into {} records", injected.total(), records.len());
    injected
}

/// Choose `amount` distinct rows out of `len`, sorted ascending.
fn pick_rows<R: Rng + ?Sized>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    let mut rows = index::sample(rng, len, amount.min(len)).into_vec();
    rows.sort_unstable();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SynthConfig;
    use crate::generator::generate_records;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh_records(records: usize) -> (StdRng, Vec<InsuranceRecord>) {
        let config = SynthConfig::builder()
            .records(records)
            .reference_date(NaiveDate::from_ymd_opt(2024, 10, 10).unwrap())
            .defects(DefectPlan::none())
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let generated = generate_records(&mut rng, &config).unwrap();
        (rng, generated)
    }

    #[test]
    fn test_inject_defects_counts() {
        let (mut rng, mut records) = fresh_records(200);
        let injected = inject_defects(&mut rng, &mut records, &DefectPlan::default());

        assert_eq!(injected.uppercase_names.len(), 50);
        assert_eq!(injected.missing_genders.len(), 30);
        assert_eq!(injected.missing_premiums.len(), 20);
        assert_eq!(injected.invalid_zip_codes.len(), 10);
        assert_eq!(injected.total(), 110);

        assert_eq!(records.iter().filter(|r| r.gender.is_none()).count(), 30);
        assert_eq!(records.iter().filter(|r| r.premium.is_none()).count(), 20);
        assert_eq!(
            records
                .iter()
                .filter(|r| r.zip_code == INVALID_ZIP_CODE)
                .count(),
            10
        );
    }

    #[test]
    fn test_inject_defects_touches_reported_rows() {
        let (mut rng, mut records) = fresh_records(100);
        let injected = inject_defects(&mut rng, &mut records, &DefectPlan::default());

        for &row in &injected.uppercase_names {
            let name = &records[row].customer_name;
            assert_eq!(name, &name.to_uppercase());
        }
        for &row in &injected.missing_premiums {
            assert!(records[row].premium.is_none());
        }
        assert!(injected.missing_genders.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_inject_no_defects_is_noop() {
        let (mut rng, mut records) = fresh_records(20);
        let before = records.clone();
        let injected = inject_defects(&mut rng, &mut records, &DefectPlan::none());

        assert_eq!(injected, InjectedDefects::default());
        assert_eq!(records, before);
    }

    #[test]
    fn test_pick_rows_caps_at_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let rows = pick_rows(&mut rng, 4, 10);
        assert_eq!(rows, vec![0, 1, 2, 3]);
    }
}
