use crate::manifest::InstallerType;
use std::path::Path;

/// Extensions recognised as installers inside an archive
pub const INSTALLER_EXTENSIONS: [(&str, InstallerType); 4] = [
    ("msi", InstallerType::Msi),
    ("msix", InstallerType::Msix),
    ("appx", InstallerType::Appx),
    ("exe", InstallerType::Exe),
];

/// The single installer found in an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedInstaller {
    pub relative_file_path: String,
    pub installer_type: InstallerType,
}

fn installer_type_of(entry: &str) -> Option<InstallerType> {
    let extension = Path::new(entry).extension()?;
    INSTALLER_EXTENSIONS
        .iter()
        .find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
        .map(|(_, installer_type)| *installer_type)
}

/// Pick the nested installer of an archive. A single installer entry is
/// chosen on its own. With several, `chosen` decides, provided it names one
/// of them; otherwise the author has to choose.
pub fn nested_installer_from_entries<'a, I>(entries: I, chosen: Option<&str>) -> Option<NestedInstaller>
where
    I: IntoIterator<Item = &'a str>,
{
    let installers: Vec<(&str, InstallerType)> = entries
        .into_iter()
        .filter_map(|entry| installer_type_of(entry).map(|t| (entry, t)))
        .collect();

    let (entry, installer_type) = match installers.as_slice() {
        [single] => *single,
        many => *many.iter().find(|(entry, _)| Some(*entry) == chosen)?,
    };
    Some(NestedInstaller {
        relative_file_path: entry.to_string(),
        installer_type,
    })
}
