use crate::config::ManifestChecksConfig;
use crate::extractor::InstallerMetadata;
use crate::manifest::{match_candidate, InstallerType, ManifestCode, ManifestContext};
use crate::schema::SchemaDocument;
use crate::verdict::Verdict;
use log::debug;

/// Everything a validator may read besides the candidate itself
#[derive(Debug, Clone, Copy)]
pub struct ValidationEnv<'a> {
    pub context: &'a ManifestContext,
    /// Present only when extraction succeeded
    pub metadata: Option<&'a InstallerMetadata>,
    /// The installer schema
    pub schema: &'a SchemaDocument,
    pub config: &'a ManifestChecksConfig,
}

impl<'a> ValidationEnv<'a> {
    pub fn new(
        context: &'a ManifestContext,
        metadata: Option<&'a InstallerMetadata>,
        schema: &'a SchemaDocument,
        config: &'a ManifestChecksConfig,
    ) -> Self {
        Self {
            context,
            metadata,
            schema,
            config,
        }
    }

    pub fn installer_type(&self) -> Option<InstallerType> {
        self.context.installer_type()
    }
}

/// Semantic rules for one manifest field.
///
/// `validate` must be a pure, total function of its arguments: it performs no
/// I/O, never panics on unexpected input and returns the same verdict for the
/// same arguments.
pub trait FieldValidator: Send + Sync {
    /// Manifest field name, also the schema definition name
    fn name(&self) -> &'static str;

    /// Whether the rule means anything for the declared installer type.
    /// `None` means the draft declares no recognisable type.
    fn applies_to(&self, installer_type: Option<InstallerType>) -> bool {
        let _ = installer_type;
        true
    }

    /// Whether a draft without this field is itself a finding
    fn is_required(&self, context: &ManifestContext) -> bool {
        let _ = context;
        false
    }

    /// Whether the orchestrator should extract installer metadata for this field
    fn needs_metadata(&self) -> bool {
        false
    }

    /// Canonical spellings legal for this draft, for prompts and diagnostics
    fn legal_values(&self, env: &ValidationEnv<'_>) -> Vec<String>;

    /// The value the installer itself declares for this field, if it is
    /// authoritative
    fn authoritative_value(&self, env: &ValidationEnv<'_>) -> Option<String> {
        let _ = env;
        None
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict;
}

/// Codes of `T` legal for this draft: those `permitted` by the cross-field
/// rules, narrowed to the schema's enumeration when the schema has one.
pub fn legal_codes<T, F>(definition: &str, env: &ValidationEnv<'_>, permitted: F) -> Vec<T>
where
    T: ManifestCode,
    F: Fn(T) -> bool,
{
    let enumeration = if env.config.use_schema_enumerations {
        env.schema.enumeration(definition)
    } else {
        None
    };
    if enumeration.is_none() && env.config.use_schema_enumerations {
        debug!("Schema declares no enumeration for {}; using built-in codes", definition);
    }

    T::ALL
        .iter()
        .copied()
        .filter(|code| permitted(*code))
        .filter(|code| match &enumeration {
            Some(values) => values.iter().any(|v| v.eq_ignore_ascii_case(code.as_str())),
            None => true,
        })
        .collect()
}

pub fn code_names<T: ManifestCode>(codes: &[T]) -> Vec<String> {
    codes.iter().map(|c| c.as_str().to_string()).collect()
}

/// Narrow a raw candidate to one of the field's legal codes, or explain why
/// it isn't one
pub fn narrow<T: ManifestCode>(field: &str, candidate: &str, env: &ValidationEnv<'_>) -> Result<T, Verdict> {
    narrow_where(field, candidate, env, |_: T| true, "")
}

/// Like [`narrow`], for fields whose legal codes are cut down by `permitted`.
/// A known code the rule excludes is reported with `restriction`, a phrase
/// such as "when InstallerType is msix".
pub fn narrow_where<T, F>(
    field: &str,
    candidate: &str,
    env: &ValidationEnv<'_>,
    permitted: F,
    restriction: &str,
) -> Result<T, Verdict>
where
    T: ManifestCode,
    F: Fn(T) -> bool,
{
    let legal = legal_codes::<T, _>(field, env, &permitted);
    let names: Vec<&str> = legal.iter().map(|c| c.as_str()).collect();

    if candidate.chars().count() > env.config.max_candidate_length {
        return Err(Verdict::out_of_domain(field, candidate, &names));
    }

    if let Some(code) = match_candidate(&legal, candidate) {
        return Ok(code);
    }

    match T::parse(candidate) {
        Some(code) if !permitted(code) && !restriction.is_empty() => {
            Err(Verdict::out_of_domain_when(field, candidate, restriction, &names))
        }
        _ => Err(Verdict::out_of_domain(field, candidate, &names)),
    }
}
