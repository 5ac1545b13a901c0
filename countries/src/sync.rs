//! Reconciliation of the country table against the bundled ISO list.
//!
//! The whole pass runs inside one transaction. A dry run executes every
//! write and then rolls the transaction back, so the reported counts are
//! exactly what a real run would have produced while the table stays
//! untouched. The job is idempotent: re-running it with the same input
//! creates and updates nothing.

use std::collections::{HashMap, HashSet};

use common::error::Res;
use db::dtos::country::CountryUpsert;
use db::models::country::Country;
use sqlx::PgPool;

use crate::data::{self, CountryRecord};

#[derive(Clone, Copy, Debug, Default)]
pub struct SyncOptions {
    /// Compute and report every mutation, then roll the transaction back.
    pub dry_run: bool,
    /// Deactivate active rows whose code is absent from the full
    /// authoritative list.
    pub deactivate_missing: bool,
    /// Only create/update countries that have a phone-code mapping.
    /// Never affects which rows get deactivated.
    pub only_common: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: u64,
    pub updated: u64,
    pub unchanged: u64,
    pub deactivated: u64,
}

/// The mutations one reconciliation pass would apply.
struct SyncPlan {
    creates: Vec<CountryUpsert>,
    updates: Vec<CountryUpsert>,
    unchanged: u64,
    deactivations: Vec<String>,
}

/// Reconciles the countries table with the bundled authoritative list.
///
/// All writes happen in a single transaction; any storage error aborts
/// the whole run with nothing applied.
pub async fn run(pool: &PgPool, opts: SyncOptions) -> Res<SyncReport> {
    let mut tx = pool.begin().await?;

    let existing = db::country::list_countries(&mut *tx).await?;
    let active_codes = db::country::list_active_codes(&mut *tx).await?;
    let plan = build_plan(data::COUNTRIES, &existing, &active_codes, &opts);

    for row in &plan.creates {
        db::country::upsert_country(&mut *tx, row).await?;
        log::info!("  Created: {} - {}", row.code, row.name);
    }
    for row in &plan.updates {
        db::country::upsert_country(&mut *tx, row).await?;
        log::info!("  Updated: {} - {}", row.code, row.name);
    }
    for code in &plan.deactivations {
        db::country::deactivate_country(&mut *tx, code).await?;
        log::warn!("  Deactivated: {}", code);
    }

    if opts.dry_run {
        tx.rollback().await?;
    } else {
        tx.commit().await?;
    }

    Ok(SyncReport {
        created: plan.creates.len() as u64,
        updated: plan.updates.len() as u64,
        unchanged: plan.unchanged,
        deactivated: plan.deactivations.len() as u64,
    })
}

/// Pure planning step: compares the authoritative list against a
/// snapshot of the table and decides what to write. The deactivation
/// sweep works from the store's active-code set and the FULL
/// authoritative list, never the filtered one.
fn build_plan(
    source: &[CountryRecord],
    existing: &[Country],
    active_codes: &HashSet<String>,
    opts: &SyncOptions,
) -> SyncPlan {
    let by_code: HashMap<&str, &Country> =
        existing.iter().map(|c| (c.code.as_str(), c)).collect();

    let mut plan = SyncPlan {
        creates: Vec::new(),
        updates: Vec::new(),
        unchanged: 0,
        deactivations: Vec::new(),
    };

    for record in source {
        if opts.only_common && data::phone_code(record.code).is_none() {
            continue;
        }
        let desired = desired_row(record);
        match by_code.get(record.code) {
            None => plan.creates.push(desired),
            Some(current) if needs_update(current, &desired) => plan.updates.push(desired),
            Some(_) => plan.unchanged += 1,
        }
    }

    if opts.deactivate_missing {
        // An --only-common run must not deactivate valid countries that
        // merely lack a phone code, so stale means absent from the full
        // source list.
        let full_code_set: HashSet<&str> = source.iter().map(|r| r.code).collect();
        let mut stale: Vec<String> = active_codes
            .iter()
            .filter(|code| !full_code_set.contains(code.as_str()))
            .cloned()
            .collect();
        stale.sort();
        plan.deactivations = stale;
    }

    plan
}

fn desired_row(record: &CountryRecord) -> CountryUpsert {
    CountryUpsert {
        code: record.code.to_string(),
        name: record.name.to_string(),
        phone_code: data::phone_code(record.code).unwrap_or("").to_string(),
        currency_code: data::currency_code(record.code).unwrap_or("").to_string(),
    }
}

fn needs_update(current: &Country, desired: &CountryUpsert) -> bool {
    current.name != desired.name
        || current.phone_code != desired.phone_code
        || current.currency_code != desired.currency_code
        || !current.is_active
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(code: &'static str, name: &'static str) -> CountryRecord {
        CountryRecord { code, name }
    }

    fn row(code: &str, name: &str, active: bool) -> Country {
        Country {
            code: code.to_string(),
            name: name.to_string(),
            phone_code: data::phone_code(code).unwrap_or("").to_string(),
            currency_code: data::currency_code(code).unwrap_or("").to_string(),
            is_active: active,
            created_at: NaiveDateTime::default(),
        }
    }

    /// What `list_active_codes` would return for this snapshot.
    fn active_codes(existing: &[Country]) -> HashSet<String> {
        existing
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.code.clone())
            .collect()
    }

    fn plan(source: &[CountryRecord], existing: &[Country], opts: &SyncOptions) -> SyncPlan {
        build_plan(source, existing, &active_codes(existing), opts)
    }

    fn apply(plan: &SyncPlan, existing: &[Country]) -> Vec<Country> {
        let mut rows: Vec<Country> = existing.to_vec();
        for upsert in plan.creates.iter().chain(plan.updates.iter()) {
            match rows.iter_mut().find(|r| r.code == upsert.code) {
                Some(r) => {
                    r.name = upsert.name.clone();
                    r.phone_code = upsert.phone_code.clone();
                    r.currency_code = upsert.currency_code.clone();
                    r.is_active = true;
                }
                None => rows.push(Country {
                    code: upsert.code.clone(),
                    name: upsert.name.clone(),
                    phone_code: upsert.phone_code.clone(),
                    currency_code: upsert.currency_code.clone(),
                    is_active: true,
                    created_at: NaiveDateTime::default(),
                }),
            }
        }
        for code in &plan.deactivations {
            if let Some(r) = rows.iter_mut().find(|r| &r.code == code) {
                r.is_active = false;
            }
        }
        rows
    }

    #[test]
    fn empty_store_creates_every_source_country() {
        let source = [
            record("NG", "Nigeria"),
            record("US", "United States"),
            record("FR", "France"),
        ];
        let plan = plan(&source, &[], &SyncOptions::default());
        assert_eq!(plan.creates.len(), 3);
        assert_eq!(plan.updates.len(), 0);
        assert_eq!(plan.unchanged, 0);
        assert!(plan.deactivations.is_empty());
    }

    #[test]
    fn second_run_with_identical_input_is_a_no_op() {
        let source = [record("NG", "Nigeria"), record("US", "United States")];
        let first = plan(&source, &[], &SyncOptions::default());
        let rows = apply(&first, &[]);

        let second = plan(&source, &rows, &SyncOptions::default());
        assert_eq!(second.creates.len(), 0);
        assert_eq!(second.updates.len(), 0);
        assert_eq!(second.unchanged, 2);
    }

    #[test]
    fn stale_active_rows_are_deactivated() {
        let source = [record("NG", "Nigeria"), record("US", "United States")];
        let existing = [row("NG", "Nigeria", true), row("ZZ", "Atlantis", true)];
        let plan = plan(
            &source,
            &existing,
            &SyncOptions {
                deactivate_missing: true,
                ..Default::default()
            },
        );
        assert_eq!(plan.creates.len(), 1);
        assert_eq!(plan.creates[0].code, "US");
        assert_eq!(plan.unchanged, 1);
        assert_eq!(plan.deactivations, vec!["ZZ".to_string()]);
    }

    #[test]
    fn deactivation_sweep_works_from_the_active_code_set() {
        // The sweep consumes the store's active-code set directly, so a
        // code outside that set never shows up in the deactivations even
        // when a row for it exists.
        let source = [record("NG", "Nigeria")];
        let existing = [
            row("NG", "Nigeria", true),
            row("YY", "Ruritania", true),
            row("ZZ", "Atlantis", true),
        ];
        let mut active = active_codes(&existing);
        active.remove("YY");
        let plan = build_plan(
            &source,
            &existing,
            &active,
            &SyncOptions {
                deactivate_missing: true,
                ..Default::default()
            },
        );
        assert_eq!(plan.deactivations, vec!["ZZ".to_string()]);
    }

    #[test]
    fn already_inactive_rows_are_not_deactivated_again() {
        let source = [record("NG", "Nigeria")];
        let existing = [row("NG", "Nigeria", true), row("ZZ", "Atlantis", false)];
        let plan = plan(
            &source,
            &existing,
            &SyncOptions {
                deactivate_missing: true,
                ..Default::default()
            },
        );
        assert!(plan.deactivations.is_empty());
    }

    #[test]
    fn only_common_filter_never_drives_deactivation() {
        // AQ has no phone-code mapping, so --only-common skips it for
        // upsert, but it is still part of the full authoritative set and
        // must survive a --deactivate-missing sweep.
        let source = [record("AQ", "Antarctica"), record("NG", "Nigeria")];
        let existing = [row("AQ", "Antarctica", true), row("NG", "Nigeria", true)];
        let plan = plan(
            &source,
            &existing,
            &SyncOptions {
                only_common: true,
                deactivate_missing: true,
                ..Default::default()
            },
        );
        assert!(plan.deactivations.is_empty());
        assert_eq!(plan.creates.len(), 0);
        assert_eq!(plan.updates.len(), 0);
        // AQ skipped by the filter, NG unchanged.
        assert_eq!(plan.unchanged, 1);
    }

    #[test]
    fn renamed_country_gets_updated() {
        let source = [record("SZ", "Eswatini")];
        let existing = [row("SZ", "Swaziland", true)];
        let plan = plan(&source, &existing, &SyncOptions::default());
        assert_eq!(plan.updates.len(), 1);
        assert_eq!(plan.updates[0].name, "Eswatini");
    }

    #[test]
    fn inactive_country_present_in_source_is_reactivated() {
        let source = [record("NG", "Nigeria")];
        let existing = [row("NG", "Nigeria", false)];
        let plan = plan(&source, &existing, &SyncOptions::default());
        assert_eq!(plan.updates.len(), 1);
        let rows = apply(&plan, &existing);
        assert!(rows[0].is_active);
    }

    #[test]
    fn dry_run_plans_the_same_mutations() {
        let source = [record("NG", "Nigeria"), record("US", "United States")];
        let wet = plan(&source, &[], &SyncOptions::default());
        let dry = plan(
            &source,
            &[],
            &SyncOptions {
                dry_run: true,
                ..Default::default()
            },
        );
        assert_eq!(dry.creates.len(), wet.creates.len());
        assert_eq!(dry.updates.len(), wet.updates.len());
        assert_eq!(dry.unchanged, wet.unchanged);
    }

    #[test]
    fn full_iso_list_against_empty_store() {
        let plan = plan(data::COUNTRIES, &[], &SyncOptions::default());
        assert_eq!(plan.creates.len(), data::COUNTRIES.len());
    }
}
