use installer_manifest_checks::*;
use proptest::prelude::*;
use test_utils::*;

fn installer_types() -> impl Strategy<Value = InstallerType> {
    prop::sample::select(InstallerType::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_field_checks_are_deterministic(
        installer_type in installer_types(),
        candidate in "\\PC{0,12}",
    ) {
        let checks = offline_checks();
        let context = ManifestContext::new().with_field(fields::INSTALLER_TYPE, installer_type.as_str());
        let session = checks.session(context);

        for field in checks.fields() {
            let first = session.check(field, &candidate).unwrap();
            let second = session.check(field, &candidate).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_unknown_scope_spellings_are_out_of_domain(candidate in "[a-z]{2,10}") {
        prop_assume!(candidate != "machine" && candidate != "user");
        let checks = offline_checks();
        let session = checks.session(ManifestContext::new().with_field(fields::INSTALLER_TYPE, "exe"));

        let (verdict, _) = session.is_installer_scope_valid(&candidate).unwrap();
        prop_assert_eq!(verdict.reason(), Some(ReasonCode::OutOfDomain));
    }

    #[test]
    fn prop_canonical_spellings_match_in_any_case(
        index in 0usize..5,
        upper in any::<bool>(),
    ) {
        let checks = offline_checks();
        let session = checks.session(ManifestContext::new().with_field(fields::INSTALLER_TYPE, "exe"));
        let spelling = Architecture::ALL[index].as_str();
        let candidate = if upper { spelling.to_uppercase() } else { spelling.to_string() };

        let (verdict, _) = session.is_architecture_valid(&candidate).unwrap();
        prop_assert_eq!(verdict, Verdict::Success);
    }

    #[test]
    fn prop_overall_status_matches_checked_verdicts(
        installer_type in installer_types(),
        scope in prop::option::of("[A-Za-z]{1,8}"),
        architecture in prop::option::of("[a-z0-9]{2,7}"),
    ) {
        let checks = offline_checks();
        let mut context = ManifestContext::new().with_field(fields::INSTALLER_TYPE, installer_type.as_str());
        if let Some(scope) = scope {
            context = context.with_field(fields::SCOPE, scope);
        }
        if let Some(architecture) = architecture {
            context = context.with_field(fields::ARCHITECTURE, architecture);
        }

        let result = checks.validate_manifest(&context).unwrap();
        let failed = result
            .reports
            .iter()
            .filter(|r| matches!(r.outcome, FieldOutcome::Checked(Verdict::Failure(_))))
            .count();
        let expected = failed == 0;
        prop_assert_eq!(result.is_success(), expected);
        prop_assert_eq!(result.failure_count(), failed);
        prop_assert_eq!(result.reports.len(), checks.fields().len());
    }
}
