use installer_manifest_checks::*;
use serde_json::json;
use std::sync::Arc;
use test_utils::*;

#[test]
fn test_scope_keys_without_metadata_conflicts() {
    let _ = env_logger::try_init();
    let checks = offline_checks();
    let session = checks.session(ManifestContext::new().with_field(fields::INSTALLER_TYPE, "exe"));

    for candidate in ["M", "U"] {
        let (verdict, supplement) = session.is_installer_scope_valid(candidate).unwrap();
        assert_eq!(verdict, Verdict::Success, "scope {}", candidate);
        assert_eq!(supplement.legal_values, vec!["machine", "user"]);
        assert_eq!(supplement.skipped, None);
    }
}

#[test]
fn test_upgrade_behavior_keys_legal_for_declared_type() {
    let _ = env_logger::try_init();
    let checks = offline_checks();
    let session = checks.session(ManifestContext::new().with_field(fields::INSTALLER_TYPE, "inno"));

    for candidate in ["I", "U"] {
        let (verdict, _) = session.is_upgrade_behaviour_valid(candidate).unwrap();
        assert_eq!(verdict, Verdict::Success, "upgrade behavior {}", candidate);
    }
}

#[test]
fn test_unknown_scope_key_is_out_of_domain() {
    let _ = env_logger::try_init();
    let checks = offline_checks();
    let session = checks.session(ManifestContext::new().with_field(fields::INSTALLER_TYPE, "exe"));

    let (verdict, supplement) = session.is_installer_scope_valid("X").unwrap();
    assert_eq!(verdict.reason(), Some(ReasonCode::OutOfDomain));
    assert_eq!(verdict.failure().unwrap().candidate.as_deref(), Some("X"));
    assert_eq!(supplement.legal_values, vec!["machine", "user"]);
}

#[test]
fn test_supplement_names_the_authoritative_value() {
    let _ = env_logger::try_init();
    let extractor = Arc::new(CountingExtractor::returning(machine_msi_metadata()));
    let checks = checks_with(extractor.clone());
    let session = checks.session(msi_context());

    let (verdict, supplement) = session.is_installer_scope_valid("U").unwrap();
    assert_eq!(verdict.reason(), Some(ReasonCode::ConflictsWithInstallerMetadata));
    assert_eq!(supplement.authoritative.as_deref(), Some("machine"));

    let (verdict, supplement) = session.is_architecture_valid("arm64").unwrap();
    assert_eq!(verdict.reason(), Some(ReasonCode::ConflictsWithInstallerMetadata));
    assert_eq!(supplement.authoritative.as_deref(), Some("x64"));

    let (verdict, supplement) = session.is_product_code_valid(PRODUCT_CODE).unwrap();
    assert_eq!(verdict, Verdict::Success);
    assert_eq!(supplement.authoritative.as_deref(), Some(PRODUCT_CODE));
    assert!(supplement.legal_values.is_empty());

    assert_eq!(extractor.calls(), 1);
    assert_eq!(session.metadata_status(), MetadataStatus::Available);
}

#[test]
fn test_inapplicable_field_reports_skip_marker() {
    let _ = env_logger::try_init();
    let checks = offline_checks();
    let session = checks.session(ManifestContext::new().with_field(fields::INSTALLER_TYPE, "msix"));

    let (verdict, supplement) = session.is_product_code_valid("anything").unwrap();
    assert_eq!(verdict, Verdict::Success);
    assert_eq!(supplement.skipped, Some(SkipReason::InapplicableForInstallerType));

    let (_, supplement) = session.is_nested_installer_type_valid("exe").unwrap();
    assert_eq!(supplement.skipped, Some(SkipReason::InapplicableForInstallerType));
}

#[test]
fn test_unknown_field_is_an_error() {
    let checks = offline_checks();
    let session = checks.session(msi_context());

    let err = session.check("Bogus", "x").unwrap_err();
    assert_eq!(err, CheckError::UnknownField("Bogus".to_string()));
}

#[test]
fn test_missing_installer_schema_is_an_error() {
    let _ = env_logger::try_init();
    let schemas = Arc::new(
        StaticSchemaProvider::new().with_schema(SchemaKind::Locale, json!({ "definitions": {} })),
    );
    let checks = ManifestChecks::new(schemas, Arc::new(UnavailableExtractor)).unwrap();
    let session = checks.session(msi_context());

    let err = session.is_installer_scope_valid("M").unwrap_err();
    match err {
        CheckError::SchemaUnavailable { kind, source } => {
            assert_eq!(kind, SchemaKind::Installer);
            assert_eq!(source, SchemaError::NotFound(SchemaKind::Installer));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(session.validate_all().is_err());
}

#[test]
fn test_fields_are_listed_in_report_order() {
    let checks = offline_checks();
    assert_eq!(
        checks.fields(),
        vec![
            fields::INSTALLER_TYPE,
            fields::NESTED_INSTALLER_TYPE,
            fields::ARCHITECTURE,
            fields::SCOPE,
            fields::UPGRADE_BEHAVIOR,
            fields::PRODUCT_CODE,
        ]
    );
}

#[test]
fn test_validate_manifest_for_valid_msi() {
    let _ = env_logger::try_init();
    let extractor = Arc::new(CountingExtractor::returning(machine_msi_metadata()));
    let checks = checks_with(extractor);

    let result = checks.validate_manifest(&msi_context()).unwrap();
    assert!(result.is_success(), "{}", result);
    assert_eq!(result.metadata, MetadataStatus::Available);
    assert!(result.to_string().ends_with("manifest is valid"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_success"], true);
    assert_eq!(json["metadata"]["state"], "available");
}

#[test]
fn test_offline_config_never_reads_the_installer() {
    let extractor = Arc::new(CountingExtractor::returning(machine_msi_metadata()));
    let checks = ManifestChecks::with_config(
        schema_provider(),
        extractor.clone(),
        ManifestChecksConfig::offline(),
    )
    .unwrap();
    let session = checks.session(msi_context());

    let (verdict, supplement) = session.is_installer_scope_valid("U").unwrap();
    assert_eq!(verdict, Verdict::Success);
    assert_eq!(supplement.authoritative, None);
    assert_eq!(extractor.calls(), 0);
    assert_eq!(session.metadata_status(), MetadataStatus::NotRequested);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ManifestChecksConfig {
        max_candidate_length: 0,
        ..ManifestChecksConfig::default()
    };
    let err = ManifestChecks::with_config(schema_provider(), Arc::new(UnavailableExtractor), config)
        .unwrap_err();
    assert!(matches!(err, CheckError::InvalidConfiguration(_)));
}

#[test]
fn test_sessions_have_distinct_ids() {
    let checks = offline_checks();
    let first = checks.session(msi_context());
    let second = checks.session(msi_context());
    assert_ne!(first.id(), second.id());
}
