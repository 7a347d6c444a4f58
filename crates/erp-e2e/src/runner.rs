// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Batch runner - Drives create/update/delete/validate batches over fixture records
//
// Every record ends in exactly one of the success, skipped or failed lists.
// A failing record never stops the batch: the runner always returns to the
// listing (falling back to a page reload), and only after the summary has been
// logged and exported does it report the failed records as one error.

use crate::constants::{CrudAction, DuplicateField, Entity};
use crate::data::{Feature, RecordDefinition, ValidateRecord};
use crate::error::{Error, Result};
use crate::summary::{CrudSummary, SummaryReporter, ValidationSummary};
use crate::validation;

/// Label recorded for a record that has no usable name.
pub const UNKNOWN_RECORD: &str = "UNKNOWN";

/// Result of the delete orchestration for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The record was not in the listing
    Skipped,
    /// Every attempt failed
    Failed,
}

/// UI operations the runner needs from one master screen.
///
/// Implemented by [`crate::masters::MasterScreen`] for the real ERP and by
/// scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait CrudWorkflow {
    fn entity(&self) -> Entity;

    /// Exact-text lookup of `name` in the listing; any error counts as absent.
    async fn exists(&self, name: &str) -> bool;

    /// Opens the form in create mode, fills it, saves and checks the toast.
    async fn create(&self, record: &RecordDefinition, feature: Feature) -> Result<()>;

    /// Selects the record, edits it, saves and checks the saved name.
    async fn update(&self, record: &RecordDefinition, feature: Feature) -> Result<()>;

    /// Deletes `name`, retrying up to `retries` extra times.
    async fn delete(&self, name: &str, retries: u32) -> DeleteOutcome;

    /// Saves a record repeating an existing value and checks the validation message.
    async fn submit_duplicate(&self, field: DuplicateField, record: &ValidateRecord)
    -> Result<()>;

    async fn return_to_listing(&self) -> Result<()>;

    async fn reload(&self) -> Result<()>;
}

#[derive(Debug, Default)]
struct Outcomes {
    succeeded: Vec<String>,
    skipped: Vec<String>,
    failed: Vec<String>,
}

/// Runs batches of one entity and reports their outcome.
pub struct BatchRunner<'a, W> {
    workflow: &'a W,
    feature: Feature,
    reporter: &'a SummaryReporter,
    delete_retries: u32,
}

impl<'a, W: CrudWorkflow> BatchRunner<'a, W> {
    pub fn new(workflow: &'a W, feature: Feature, reporter: &'a SummaryReporter) -> Self {
        Self {
            workflow,
            feature,
            reporter,
            delete_retries: 1,
        }
    }

    pub fn delete_retries(mut self, retries: u32) -> Self {
        self.delete_retries = retries;
        self
    }

    /// Creates every record not yet listed.
    ///
    /// Returns `Ok(None)` without reporting when `records` is empty.
    pub async fn create_all(&self, records: &[RecordDefinition]) -> Result<Option<CrudSummary>> {
        if records.is_empty() {
            tracing::warn!("{} | Create skipped: no data found", self.entity_name());
            return Ok(None);
        }

        let mut outcomes = Outcomes::default();
        for record in records {
            let name = match (record.key(), validation::check_create(record, self.feature)) {
                (Some(name), None) => name,
                (_, missing) => {
                    tracing::warn!(
                        "{} | Create skipped, missing {}: {:?}",
                        self.entity_name(),
                        missing.map_or("name", |m| m.field()),
                        record
                    );
                    outcomes.skipped.push(skip_label(record));
                    continue;
                }
            };

            if self.workflow.exists(name).await {
                tracing::warn!("{} | Skipped, already exists → {}", self.entity_name(), name);
                outcomes.skipped.push(name.to_string());
                continue;
            }

            match self.workflow.create(record, self.feature).await {
                Ok(()) => outcomes.succeeded.push(name.to_string()),
                Err(e) => {
                    tracing::error!("{} | Creation failed for {}: {}", self.entity_name(), name, e);
                    outcomes.failed.push(name.to_string());
                }
            }
            self.back_to_listing().await;
        }

        self.finish(CrudAction::Create, outcomes, records.len())
    }

    /// Renames every listed record to its `updatedName`.
    ///
    /// Success and failure labels read `"<name> → <updatedName>"`.
    pub async fn update_all(&self, records: &[RecordDefinition]) -> Result<Option<CrudSummary>> {
        if records.is_empty() {
            tracing::warn!("{} | Update skipped: no data found", self.entity_name());
            return Ok(None);
        }

        let mut outcomes = Outcomes::default();
        for record in records {
            let (name, updated_name) = match (
                record.key(),
                record.updated_name.as_deref(),
                validation::check_update(record, self.feature),
            ) {
                (Some(name), Some(updated), None) => (name, updated),
                (_, _, missing) => {
                    tracing::warn!(
                        "{} | Update skipped, missing {}: {:?}",
                        self.entity_name(),
                        missing.map_or("updatedName", |m| m.field()),
                        record
                    );
                    outcomes.skipped.push(skip_label(record));
                    continue;
                }
            };

            if !self.workflow.exists(name).await {
                tracing::warn!("{} | Skipped, does not exist → {}", self.entity_name(), name);
                outcomes.skipped.push(name.to_string());
                continue;
            }

            let label = format!("{} → {}", name, updated_name);
            match self.workflow.update(record, self.feature).await {
                Ok(()) => outcomes.succeeded.push(label),
                Err(e) => {
                    tracing::error!("{} | Update failed for {}: {}", self.entity_name(), name, e);
                    outcomes.failed.push(label);
                }
            }
            self.back_to_listing().await;
        }

        self.finish(CrudAction::Update, outcomes, records.len())
    }

    /// Deletes every listed record through the delete orchestrator.
    pub async fn delete_all(&self, records: &[RecordDefinition]) -> Result<Option<CrudSummary>> {
        if records.is_empty() {
            tracing::warn!("{} | Delete skipped: no data found", self.entity_name());
            return Ok(None);
        }

        let mut outcomes = Outcomes::default();
        for record in records {
            let name = match (record.key(), validation::check_delete(record)) {
                (Some(name), None) => name,
                (_, missing) => {
                    tracing::warn!(
                        "{} | Delete skipped, missing {}: {:?}",
                        self.entity_name(),
                        missing.map_or("name", |m| m.field()),
                        record
                    );
                    outcomes.skipped.push(UNKNOWN_RECORD.to_string());
                    continue;
                }
            };

            match self.workflow.delete(name, self.delete_retries).await {
                DeleteOutcome::Deleted => outcomes.succeeded.push(name.to_string()),
                DeleteOutcome::Skipped => outcomes.skipped.push(name.to_string()),
                DeleteOutcome::Failed => outcomes.failed.push(name.to_string()),
            }
        }

        self.finish(CrudAction::Delete, outcomes, records.len())
    }

    /// Checks that saving a duplicate `field` is rejected.
    ///
    /// Returns `Ok(None)` when the fixture lacks the data the check needs.
    /// The listing is restored before an assertion failure is returned.
    pub async fn validate_duplicate(
        &self,
        field: DuplicateField,
        record: Option<&ValidateRecord>,
    ) -> Result<Option<ValidationSummary>> {
        let record = match (record, validation::check_duplicate(field, record, self.feature)) {
            (Some(record), None) => record,
            (_, missing) => {
                tracing::warn!(
                    "{} | Duplicate {} check skipped: allowCodeManual disabled or {} missing",
                    self.entity_name(),
                    field.as_str().to_ascii_lowercase(),
                    missing.map_or("data", |m| m.field())
                );
                return Ok(None);
            }
        };

        let result = self.workflow.submit_duplicate(field, record).await;
        self.back_to_listing().await;
        result?;

        let value = match field {
            DuplicateField::Code => record.code.clone(),
            DuplicateField::Name => record.name.clone(),
        };
        let summary = ValidationSummary::new(self.workflow.entity(), field, value.unwrap_or_default());
        self.reporter.log_and_export_validation(&summary);
        Ok(Some(summary))
    }

    async fn back_to_listing(&self) {
        if let Err(e) = self.workflow.return_to_listing().await {
            tracing::warn!("Navigation failed, reloading page: {}", e);
            if let Err(e) = self.workflow.reload().await {
                tracing::error!("Page reload failed: {}", e);
            }
        }
    }

    fn finish(
        &self,
        action: CrudAction,
        outcomes: Outcomes,
        total_count: usize,
    ) -> Result<Option<CrudSummary>> {
        let summary = CrudSummary {
            entity_name: self.entity_name().to_string(),
            action,
            success_records: outcomes.succeeded,
            skipped_records: outcomes.skipped,
            failed_records: outcomes.failed,
            total_count,
            generated_at: chrono::Utc::now(),
        };
        self.reporter.log_and_export_crud(&summary);

        if summary.has_failures() {
            return Err(Error::BatchFailed {
                entity: summary.entity_name.clone(),
                action,
                records: summary.failed_records.clone(),
            });
        }
        Ok(Some(summary))
    }

    fn entity_name(&self) -> &'static str {
        self.workflow.entity().name()
    }
}

fn skip_label(record: &RecordDefinition) -> String {
    record.key().unwrap_or(UNKNOWN_RECORD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};

    /// Scripted stand-in for a master screen.
    #[derive(Default)]
    struct FakeWorkflow {
        listed: RefCell<HashSet<String>>,
        failing: HashSet<String>,
        delete_outcomes: HashMap<String, DeleteOutcome>,
        navigation_fails: bool,
        duplicate_rejected: bool,
        lookups: RefCell<Vec<String>>,
        attempts: RefCell<Vec<String>>,
        returns: Cell<usize>,
        reloads: Cell<usize>,
        delete_retries_seen: Cell<Option<u32>>,
    }

    impl FakeWorkflow {
        fn listing(names: &[&str]) -> Self {
            Self {
                listed: RefCell::new(names.iter().map(|n| n.to_string()).collect()),
                ..Default::default()
            }
        }

        fn failing(mut self, names: &[&str]) -> Self {
            self.failing = names.iter().map(|n| n.to_string()).collect();
            self
        }
    }

    impl CrudWorkflow for FakeWorkflow {
        fn entity(&self) -> Entity {
            Entity::DocumentType
        }

        async fn exists(&self, name: &str) -> bool {
            self.lookups.borrow_mut().push(name.to_string());
            self.listed.borrow().contains(name)
        }

        async fn create(&self, record: &RecordDefinition, _feature: Feature) -> Result<()> {
            let name = record.key().unwrap_or_default().to_string();
            self.attempts.borrow_mut().push(name.clone());
            if self.failing.contains(&name) {
                return Err(Error::Assertion(format!("no success toast for {}", name)));
            }
            self.listed.borrow_mut().insert(name);
            Ok(())
        }

        async fn update(&self, record: &RecordDefinition, _feature: Feature) -> Result<()> {
            let name = record.key().unwrap_or_default().to_string();
            self.attempts.borrow_mut().push(name.clone());
            if self.failing.contains(&name) {
                return Err(Error::Assertion(format!("name not saved for {}", name)));
            }
            Ok(())
        }

        async fn delete(&self, name: &str, retries: u32) -> DeleteOutcome {
            self.delete_retries_seen.set(Some(retries));
            self.delete_outcomes
                .get(name)
                .copied()
                .unwrap_or(DeleteOutcome::Skipped)
        }

        async fn submit_duplicate(
            &self,
            field: DuplicateField,
            _record: &ValidateRecord,
        ) -> Result<()> {
            self.attempts.borrow_mut().push(field.as_str().to_string());
            if self.duplicate_rejected {
                Ok(())
            } else {
                Err(Error::Assertion("no 'already exists' message".to_string()))
            }
        }

        async fn return_to_listing(&self) -> Result<()> {
            self.returns.set(self.returns.get() + 1);
            if self.navigation_fails {
                return Err(Error::Navigation("breadcrumb missing".to_string()));
            }
            Ok(())
        }

        async fn reload(&self) -> Result<()> {
            self.reloads.set(self.reloads.get() + 1);
            Ok(())
        }
    }

    fn reporter() -> (tempfile::TempDir, SummaryReporter) {
        let dir = tempfile::tempdir().unwrap();
        let reporter = SummaryReporter::new(dir.path());
        (dir, reporter)
    }

    fn records(names: &[&str]) -> Vec<RecordDefinition> {
        names.iter().map(|n| RecordDefinition::named(*n)).collect()
    }

    #[tokio::test]
    async fn test_create_skips_existing_records() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::listing(&["Invoice"]);
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);

        let summary = runner
            .create_all(&records(&["Invoice", "Invoice"]))
            .await
            .unwrap()
            .unwrap();

        assert!(summary.success_records.is_empty());
        assert_eq!(summary.skipped_records, vec!["Invoice", "Invoice"]);
        assert!(summary.failed_records.is_empty());
        assert_eq!(summary.total_count, 2);
        assert!(workflow.attempts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_create_partitions_input() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::listing(&["Passport"]).failing(&["Visa"]);
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);
        let input = vec![
            RecordDefinition::named("Passport"),
            RecordDefinition::named("Visa"),
            RecordDefinition::named("Residence Permit"),
            RecordDefinition::default(),
        ];

        let err = runner.create_all(&input).await.unwrap_err();
        assert_eq!(err.to_string(), "Document Type creation failed for: Visa");

        let exported: CrudSummary = serde_json::from_slice(
            &std::fs::read(reporter.dir().join("document-type-create.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(exported.success_records, vec!["Residence Permit"]);
        assert_eq!(exported.skipped_records, vec!["Passport", UNKNOWN_RECORD]);
        assert_eq!(exported.failed_records, vec!["Visa"]);
        assert_eq!(
            exported.success_records.len()
                + exported.skipped_records.len()
                + exported.failed_records.len(),
            input.len()
        );
        assert_eq!(workflow.returns.get(), 2);
    }

    #[tokio::test]
    async fn test_blank_name_is_never_attempted() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::default();
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);

        let summary = runner
            .create_all(&records(&["", "  "]))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.skipped_records, vec![UNKNOWN_RECORD, UNKNOWN_RECORD]);
        assert!(workflow.lookups.borrow().is_empty());
        assert!(workflow.attempts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_manual_code_required_for_create() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::default();
        let feature = Feature {
            allow_code_manual: true,
        };
        let runner = BatchRunner::new(&workflow, feature, &reporter);
        let mut coded = RecordDefinition::named("Coded");
        coded.code = Some("C-1".to_string());

        let summary = runner
            .create_all(&[RecordDefinition::named("Uncoded"), coded])
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.skipped_records, vec!["Uncoded"]);
        assert_eq!(summary.success_records, vec!["Coded"]);
    }

    #[tokio::test]
    async fn test_failed_navigation_reloads_once_per_record() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow {
            navigation_fails: true,
            ..FakeWorkflow::default()
        }
        .failing(&["Broken"]);
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);

        let err = runner
            .create_all(&records(&["Fine", "Broken"]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BatchFailed { ref records, .. } if records == &["Broken"]));
        assert_eq!(workflow.returns.get(), 2);
        assert_eq!(workflow.reloads.get(), 2);
    }

    #[tokio::test]
    async fn test_update_skip_rules_and_labels() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::listing(&["Visa", "Permit"]).failing(&["Permit"]);
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);

        let mut visa = RecordDefinition::named("Visa");
        visa.updated_name = Some("Work Visa".to_string());
        let mut permit = RecordDefinition::named("Permit");
        permit.updated_name = Some("Residence Permit".to_string());
        let mut ghost = RecordDefinition::named("Ghost");
        ghost.updated_name = Some("Phantom".to_string());
        let no_new_name = RecordDefinition::named("Visa");

        let err = runner
            .update_all(&[visa, permit, ghost, no_new_name])
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Document Type update failed for: Permit → Residence Permit"
        );

        let exported: CrudSummary = serde_json::from_slice(
            &std::fs::read(reporter.dir().join("document-type-update.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(exported.success_records, vec!["Visa → Work Visa"]);
        assert_eq!(exported.skipped_records, vec!["Ghost", "Visa"]);
        assert_eq!(*workflow.attempts.borrow(), vec!["Visa", "Permit"]);
    }

    #[tokio::test]
    async fn test_update_requires_new_code_when_manual() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::listing(&["Visa"]);
        let feature = Feature {
            allow_code_manual: true,
        };
        let runner = BatchRunner::new(&workflow, feature, &reporter);
        let mut visa = RecordDefinition::named("Visa");
        visa.updated_name = Some("Work Visa".to_string());

        let summary = runner.update_all(&[visa]).await.unwrap().unwrap();
        assert_eq!(summary.skipped_records, vec!["Visa"]);
        assert!(workflow.lookups.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_classifies_tri_state_outcomes() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow {
            delete_outcomes: HashMap::from([
                ("Obsolete".to_string(), DeleteOutcome::Deleted),
                ("Locked".to_string(), DeleteOutcome::Failed),
            ]),
            ..FakeWorkflow::default()
        };
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter).delete_retries(2);

        let err = runner
            .delete_all(&records(&["Obsolete", "Missing", "Locked", ""]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Document Type deletion failed for: Locked");
        assert_eq!(workflow.delete_retries_seen.get(), Some(2));

        let exported: CrudSummary = serde_json::from_slice(
            &std::fs::read(reporter.dir().join("document-type-delete.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(exported.success_records, vec!["Obsolete"]);
        assert_eq!(exported.skipped_records, vec!["Missing", UNKNOWN_RECORD]);
        assert_eq!(exported.failed_records, vec!["Locked"]);
    }

    #[tokio::test]
    async fn test_delete_single_record_succeeds() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow {
            delete_outcomes: HashMap::from([("Obsolete".to_string(), DeleteOutcome::Deleted)]),
            ..FakeWorkflow::default()
        };
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);

        let summary = runner
            .delete_all(&records(&["Obsolete"]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.success_records, vec!["Obsolete"]);
        assert_eq!(workflow.delete_retries_seen.get(), Some(1));
    }

    #[tokio::test]
    async fn test_empty_batch_is_not_reported() {
        let (_dir, reporter) = reporter();
        let workflow = FakeWorkflow::default();
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);

        assert!(runner.create_all(&[]).await.unwrap().is_none());
        assert!(runner.update_all(&[]).await.unwrap().is_none());
        assert!(runner.delete_all(&[]).await.unwrap().is_none());
        assert!(!reporter.dir().join("document-type-create.json").exists());
    }

    #[tokio::test]
    async fn test_duplicate_validation() {
        let (_dir, reporter) = reporter();
        let record = ValidateRecord {
            code: Some("DT-1".to_string()),
            name: Some("Passport".to_string()),
        };

        // Code checks need manual codes
        let workflow = FakeWorkflow {
            duplicate_rejected: true,
            ..FakeWorkflow::default()
        };
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);
        assert!(
            runner
                .validate_duplicate(DuplicateField::Code, Some(&record))
                .await
                .unwrap()
                .is_none()
        );
        let summary = runner
            .validate_duplicate(DuplicateField::Name, Some(&record))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.value, "Passport");
        assert!(
            reporter
                .dir()
                .join("document-type-validate-name.json")
                .exists()
        );

        // A missing validation message fails, after the listing is restored
        let workflow = FakeWorkflow::default();
        let runner = BatchRunner::new(&workflow, Feature::default(), &reporter);
        let err = runner
            .validate_duplicate(DuplicateField::Name, Some(&record))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Assertion(_)));
        assert_eq!(workflow.returns.get(), 1);
    }
}
