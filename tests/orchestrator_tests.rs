use installer_manifest_checks::*;
use std::path::PathBuf;
use std::sync::Arc;
use test_utils::*;

fn orchestrator_with(extractor: Arc<dyn MetadataExtractor>) -> Orchestrator {
    Orchestrator::new(
        ValidatorRegistry::with_defaults(),
        schema_provider(),
        extractor,
        ManifestChecksConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_reports_follow_registration_order() {
    let _ = env_logger::try_init();
    let orchestrator = orchestrator_with(Arc::new(UnavailableExtractor));
    let result = orchestrator.validate_all(&msi_context()).unwrap();

    let order: Vec<&str> = result.reports.iter().map(|r| r.field.as_str()).collect();
    assert_eq!(order, orchestrator.registry().names());
}

#[test]
fn test_every_failure_is_reported() {
    let _ = env_logger::try_init();
    let orchestrator = orchestrator_with(Arc::new(UnavailableExtractor));
    let context = ManifestContext::new()
        .with_field(fields::INSTALLER_TYPE, "msix")
        .with_field(fields::ARCHITECTURE, "sparc")
        .with_field(fields::SCOPE, "X")
        .with_field(fields::UPGRADE_BEHAVIOR, "uninstallPrevious");

    let result = orchestrator.validate_all(&context).unwrap();
    assert!(!result.is_success());
    let failed: Vec<&str> = result.failures().map(|(field, _)| field).collect();
    assert_eq!(
        failed,
        vec![fields::ARCHITECTURE, fields::SCOPE, fields::UPGRADE_BEHAVIOR]
    );
    assert!(result.to_string().ends_with("3 problem(s) found"));
}

#[test]
fn test_overall_status_is_conjunction_of_checked_verdicts() {
    let orchestrator = orchestrator_with(Arc::new(UnavailableExtractor));
    let drafts = vec![
        msi_context(),
        msi_context().with_field(fields::SCOPE, "global"),
        ManifestContext::new().with_field(fields::INSTALLER_TYPE, "exe"),
        ManifestContext::new()
            .with_field(fields::INSTALLER_TYPE, "zip")
            .with_field(fields::NESTED_INSTALLER_TYPE, "portable")
            .with_field(fields::ARCHITECTURE, "neutral"),
    ];

    for draft in drafts {
        let result = orchestrator.validate_all(&draft).unwrap();
        let expected = !result
            .reports
            .iter()
            .any(|r| matches!(r.outcome, FieldOutcome::Checked(Verdict::Failure(_))));
        assert_eq!(result.is_success(), expected, "{}", result);
    }
}

#[test]
fn test_inapplicable_and_absent_fields_are_marked() {
    let orchestrator = orchestrator_with(Arc::new(UnavailableExtractor));
    let context = ManifestContext::new()
        .with_field(fields::INSTALLER_TYPE, "msix")
        .with_field(fields::ARCHITECTURE, "x64");

    let result = orchestrator.validate_all(&context).unwrap();
    assert!(result.is_success(), "{}", result);
    assert_eq!(
        result.get(fields::NESTED_INSTALLER_TYPE),
        Some(&FieldOutcome::Skipped(SkipReason::InapplicableForInstallerType))
    );
    assert_eq!(
        result.get(fields::PRODUCT_CODE),
        Some(&FieldOutcome::Skipped(SkipReason::InapplicableForInstallerType))
    );
    assert_eq!(
        result.get(fields::SCOPE),
        Some(&FieldOutcome::Skipped(SkipReason::NotProvided))
    );
    assert_eq!(
        result.get(fields::UPGRADE_BEHAVIOR),
        Some(&FieldOutcome::Skipped(SkipReason::NotProvided))
    );
}

#[test]
fn test_missing_required_fields_fail() {
    let orchestrator = orchestrator_with(Arc::new(UnavailableExtractor));
    let context = ManifestContext::new().with_field(fields::INSTALLER_TYPE, "zip");

    let result = orchestrator.validate_all(&context).unwrap();
    let missing: Vec<&str> = result
        .failures()
        .filter(|(_, failure)| failure.reason == ReasonCode::MissingRequiredValue)
        .map(|(field, _)| field)
        .collect();
    assert_eq!(missing, vec![fields::NESTED_INSTALLER_TYPE, fields::ARCHITECTURE]);
}

#[test]
fn test_empty_draft_reports_missing_installer_type() {
    let orchestrator = orchestrator_with(Arc::new(UnavailableExtractor));
    let result = orchestrator.validate_all(&ManifestContext::new()).unwrap();

    assert_eq!(
        result.get(fields::INSTALLER_TYPE).and_then(|o| o.verdict()).and_then(|v| v.reason()),
        Some(ReasonCode::MissingRequiredValue)
    );
    assert_eq!(result.metadata, MetadataStatus::NotRequested);
}

#[test]
fn test_metadata_is_extracted_once_per_session() {
    let _ = env_logger::try_init();
    let extractor = Arc::new(CountingExtractor::returning(machine_msi_metadata()));
    let orchestrator = orchestrator_with(extractor.clone());
    let session = orchestrator.session(msi_context());

    session.validate_field(fields::SCOPE, "U").unwrap();
    session.validate_field(fields::ARCHITECTURE, "x64").unwrap();
    session.validate_all().unwrap();
    assert_eq!(extractor.calls(), 1);

    orchestrator.session(msi_context()).validate_all().unwrap();
    assert_eq!(extractor.calls(), 2);
}

#[test]
fn test_conflicts_are_reported_with_available_metadata() {
    let extractor = Arc::new(CountingExtractor::returning(machine_msi_metadata()));
    let orchestrator = orchestrator_with(extractor);
    let context = msi_context()
        .with_field(fields::SCOPE, "user")
        .with_field(fields::ARCHITECTURE, "x86");

    let result = orchestrator.validate_all(&context).unwrap();
    let conflicts: Vec<(&str, Option<&str>)> = result
        .failures()
        .filter(|(_, f)| f.reason == ReasonCode::ConflictsWithInstallerMetadata)
        .map(|(field, f)| (field, f.authoritative.as_deref()))
        .collect();
    assert_eq!(
        conflicts,
        vec![
            (fields::ARCHITECTURE, Some("x64")),
            (fields::SCOPE, Some("machine")),
        ]
    );
}

#[test]
fn test_failed_extraction_relaxes_metadata_checks() {
    let _ = env_logger::try_init();
    let extractor = Arc::new(CountingExtractor::failing(ExtractionError::Unreadable {
        path: PathBuf::from(MSI_PATH),
        reason: "sharing violation".to_string(),
    }));
    let orchestrator = orchestrator_with(extractor.clone());
    let context = msi_context().with_field(fields::SCOPE, "user");

    let result = orchestrator.validate_all(&context).unwrap();
    assert!(result.is_success(), "{}", result);
    match &result.metadata {
        MetadataStatus::Unavailable(reason) => assert!(reason.contains("sharing violation")),
        other => panic!("unexpected metadata status: {:?}", other),
    }
    assert_eq!(extractor.calls(), 1);
}

#[test]
fn test_msi_without_all_users_row_fixes_no_scope() {
    let _ = env_logger::try_init();
    let metadata = MsiTables::new()
        .with_property("ProductCode", PRODUCT_CODE)
        .with_summary("Template", "x64;1033")
        .into_metadata();
    assert_eq!(metadata.scope, None);
    let orchestrator = orchestrator_with(Arc::new(CountingExtractor::returning(metadata)));

    for scope in ["machine", "user"] {
        let result = orchestrator
            .validate_all(&msi_context().with_field(fields::SCOPE, scope))
            .unwrap();
        assert!(result.is_success(), "{}", result);
        assert_eq!(result.metadata, MetadataStatus::Available);
    }
}

#[test]
fn test_draft_without_installer_path_skips_extraction() {
    let extractor = Arc::new(CountingExtractor::returning(machine_msi_metadata()));
    let orchestrator = orchestrator_with(extractor.clone());
    let context = ManifestContext::new()
        .with_field(fields::INSTALLER_TYPE, "msi")
        .with_field(fields::ARCHITECTURE, "x86")
        .with_field(fields::SCOPE, "user");

    let result = orchestrator.validate_all(&context).unwrap();
    assert!(result.is_success(), "{}", result);
    assert_eq!(result.metadata, MetadataStatus::NotRequested);
    assert_eq!(extractor.calls(), 0);
}

#[test]
fn test_zero_timeout_is_rejected() {
    let config = ManifestChecksConfig {
        extraction_timeout: std::time::Duration::ZERO,
        ..ManifestChecksConfig::default()
    };
    let err = Orchestrator::new(
        ValidatorRegistry::with_defaults(),
        schema_provider(),
        Arc::new(UnavailableExtractor),
        config,
    )
    .unwrap_err();
    assert!(matches!(err, CheckError::InvalidConfiguration(_)));
}

/// A field registered by the caller, not built in
struct ChannelValidator;

impl FieldValidator for ChannelValidator {
    fn name(&self) -> &'static str {
        "Channel"
    }

    fn legal_values(&self, _env: &ValidationEnv<'_>) -> Vec<String> {
        vec!["stable".to_string(), "beta".to_string()]
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let legal = self.legal_values(env);
        if legal.iter().any(|v| v == candidate) {
            Verdict::Success
        } else {
            Verdict::out_of_domain(self.name(), candidate, &["stable", "beta"])
        }
    }
}

#[test]
fn test_registered_validators_join_the_run() {
    let mut registry = ValidatorRegistry::with_defaults();
    registry.register(ChannelValidator);
    let orchestrator = Orchestrator::new(
        registry,
        schema_provider(),
        Arc::new(UnavailableExtractor),
        ManifestChecksConfig::default(),
    )
    .unwrap();

    let result = orchestrator
        .validate_all(&msi_context().with_field("Channel", "nightly"))
        .unwrap();
    assert_eq!(result.reports.last().map(|r| r.field.as_str()), Some("Channel"));
    assert_eq!(result.failure_count(), 1);

    let check = orchestrator
        .session(msi_context())
        .validate_field("Channel", "beta")
        .unwrap();
    assert_eq!(check.outcome, FieldOutcome::Checked(Verdict::Success));
    assert_eq!(check.legal_values, vec!["stable", "beta"]);
}
