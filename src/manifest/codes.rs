use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed enumeration of legal manifest codes for one field.
///
/// Every code has a canonical manifest spelling and, where the spellings of a
/// field don't collide, a one-character key used by interactive prompts.
pub trait ManifestCode: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// All codes in declaration order
    const ALL: &'static [Self];

    /// Canonical manifest spelling
    fn as_str(&self) -> &'static str;

    /// One-character prompt key
    fn key(&self) -> Option<char> {
        None
    }

    /// Parse a raw candidate against every declared code
    fn parse(candidate: &str) -> Option<Self> {
        match_candidate(Self::ALL, candidate)
    }
}

/// Match a raw candidate against a set of legal codes.
///
/// The candidate is trimmed. A single character is compared against prompt
/// keys, anything longer against canonical spellings. Both comparisons ignore
/// ASCII case.
pub fn match_candidate<T: ManifestCode>(legal: &[T], candidate: &str) -> Option<T> {
    let candidate = candidate.trim();
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (None, _) => None,
        (Some(c), None) => legal
            .iter()
            .copied()
            .find(|code| code.key().is_some_and(|k| k.eq_ignore_ascii_case(&c))),
        _ => legal
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(candidate)),
    }
}

/// Installer technology declared by the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerType {
    Msix,
    Msi,
    Appx,
    Exe,
    Zip,
    Inno,
    Nullsoft,
    Wix,
    Burn,
    Pwa,
    Portable,
}

impl InstallerType {
    /// Windows Installer databases, whoever authored them
    pub fn is_msi_family(&self) -> bool {
        matches!(self, InstallerType::Msi | InstallerType::Wix)
    }

    /// Packaged app formats
    pub fn is_msix_family(&self) -> bool {
        matches!(self, InstallerType::Msix | InstallerType::Appx)
    }

    /// Only an MSI's own property table fixes the install scope.
    pub fn has_authoritative_scope(&self) -> bool {
        self.is_msi_family()
    }

    /// MSI templates and MSIX package manifests declare the payload
    /// architecture; an exe header only describes the bootstrapper.
    pub fn has_authoritative_architecture(&self) -> bool {
        self.is_msi_family() || self.is_msix_family()
    }

    pub fn supports_uninstall_previous(&self) -> bool {
        !matches!(
            self,
            InstallerType::Msix | InstallerType::Appx | InstallerType::Portable | InstallerType::Pwa
        )
    }

    /// Types that may appear inside an archive installer
    pub fn is_nestable(&self) -> bool {
        !matches!(self, InstallerType::Zip | InstallerType::Pwa)
    }

    /// Whether a declared type is compatible with the type detected from the
    /// installer binary. `exe` is the generic spelling for every executable
    /// installer technology.
    pub fn is_compatible_with(&self, detected: InstallerType) -> bool {
        if *self == detected {
            return true;
        }
        if self.is_msi_family() && detected.is_msi_family() {
            return true;
        }
        if self.is_msix_family() && detected.is_msix_family() {
            return true;
        }
        *self == InstallerType::Exe
            && matches!(
                detected,
                InstallerType::Inno | InstallerType::Nullsoft | InstallerType::Burn
            )
    }
}

impl ManifestCode for InstallerType {
    const ALL: &'static [Self] = &[
        InstallerType::Msix,
        InstallerType::Msi,
        InstallerType::Appx,
        InstallerType::Exe,
        InstallerType::Zip,
        InstallerType::Inno,
        InstallerType::Nullsoft,
        InstallerType::Wix,
        InstallerType::Burn,
        InstallerType::Pwa,
        InstallerType::Portable,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            InstallerType::Msix => "msix",
            InstallerType::Msi => "msi",
            InstallerType::Appx => "appx",
            InstallerType::Exe => "exe",
            InstallerType::Zip => "zip",
            InstallerType::Inno => "inno",
            InstallerType::Nullsoft => "nullsoft",
            InstallerType::Wix => "wix",
            InstallerType::Burn => "burn",
            InstallerType::Pwa => "pwa",
            InstallerType::Portable => "portable",
        }
    }
}

/// Install scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Machine,
    User,
}

impl ManifestCode for Scope {
    const ALL: &'static [Self] = &[Scope::Machine, Scope::User];

    fn as_str(&self) -> &'static str {
        match self {
            Scope::Machine => "machine",
            Scope::User => "user",
        }
    }

    fn key(&self) -> Option<char> {
        match self {
            Scope::Machine => Some('M'),
            Scope::User => Some('U'),
        }
    }
}

/// What the package manager does with a previous version on upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeBehavior {
    Install,
    UninstallPrevious,
    Deny,
}

impl ManifestCode for UpgradeBehavior {
    const ALL: &'static [Self] = &[
        UpgradeBehavior::Install,
        UpgradeBehavior::UninstallPrevious,
        UpgradeBehavior::Deny,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            UpgradeBehavior::Install => "install",
            UpgradeBehavior::UninstallPrevious => "uninstallPrevious",
            UpgradeBehavior::Deny => "deny",
        }
    }

    fn key(&self) -> Option<char> {
        match self {
            UpgradeBehavior::Install => Some('I'),
            UpgradeBehavior::UninstallPrevious => Some('U'),
            UpgradeBehavior::Deny => Some('D'),
        }
    }
}

/// Installer architecture. The spellings share prefixes, so there are no
/// prompt keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    X64,
    Arm,
    Arm64,
    Neutral,
}

impl ManifestCode for Architecture {
    const ALL: &'static [Self] = &[
        Architecture::X86,
        Architecture::X64,
        Architecture::Arm,
        Architecture::Arm64,
        Architecture::Neutral,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X64 => "x64",
            Architecture::Arm => "arm",
            Architecture::Arm64 => "arm64",
            Architecture::Neutral => "neutral",
        }
    }
}

macro_rules! display_as_code {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        })+
    };
}

display_as_code!(InstallerType, Scope, UpgradeBehavior, Architecture);
