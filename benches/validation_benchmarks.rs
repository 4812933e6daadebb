use criterion::{black_box, criterion_group, criterion_main, Criterion};
use installer_manifest_checks::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn schemas() -> Arc<StaticSchemaProvider> {
    Arc::new(StaticSchemaProvider::new().with_schema(
        SchemaKind::Installer,
        json!({
            "definitions": {
                "Architecture": { "enum": ["x86", "x64", "arm", "arm64", "neutral"] },
                "Scope": { "enum": ["user", "machine"] },
                "UpgradeBehavior": { "enum": ["install", "uninstallPrevious", "deny"] },
                "ProductCode": { "maxLength": 255 }
            }
        }),
    ))
}

fn draft() -> ManifestContext {
    ManifestContext::new()
        .with_field(fields::INSTALLER_TYPE, "msi")
        .with_field(fields::ARCHITECTURE, "x64")
        .with_field(fields::SCOPE, "machine")
        .with_field(fields::UPGRADE_BEHAVIOR, "install")
        .with_field(fields::PRODUCT_CODE, "{5C8B4A6E-1E0D-4C2B-9E36-0A8F2F1B7D11}")
}

fn benchmark_validation(c: &mut Criterion) {
    let checks = ManifestChecks::with_config(
        schemas(),
        Arc::new(UnavailableExtractor),
        ManifestChecksConfig::offline(),
    )
    .unwrap();
    let context = draft();

    c.bench_function("validate_manifest", |b| {
        b.iter(|| {
            black_box(checks.validate_manifest(&context).unwrap());
        })
    });

    let session = checks.session(context.clone());
    c.bench_function("check_scope_in_session", |b| {
        b.iter(|| {
            black_box(session.is_installer_scope_valid(black_box("U")).unwrap());
        })
    });
}

criterion_group!(benches, benchmark_validation);
criterion_main!(benches);
