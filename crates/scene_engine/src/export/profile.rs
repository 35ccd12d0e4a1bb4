//! Target-platform profiles
//!
//! A profile fixes everything that differs between export destinations:
//! where the runtime lives, whether its entry point is suppressed, which
//! extra entry document is emitted, and which manifest and build script
//! templates are used.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Desktop target triple for the host this editor was built for
pub const DESKTOP_TARGET_TRIPLE: &str = desktop_triple(
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else {
        "linux"
    },
    if cfg!(target_arch = "aarch64") { "aarch64" } else { "x86_64" },
);

/// Triple for an operating system and CPU architecture pair
pub const fn desktop_triple(os: &str, arch: &str) -> &'static str {
    let arm = matches!(arch.as_bytes(), b"aarch64");
    match os.as_bytes() {
        b"windows" if arm => "aarch64-pc-windows-msvc",
        b"windows" => "x86_64-pc-windows-msvc",
        b"macos" if arm => "aarch64-apple-darwin",
        b"macos" => "x86_64-apple-darwin",
        _ if arm => "aarch64-unknown-linux-gnu",
        _ => "x86_64-unknown-linux-gnu",
    }
}

/// Android ABIs built into the APK
pub const ANDROID_TARGET_TRIPLES: &[&str] = &["armv7-linux-androideabi", "aarch64-linux-android"];

/// Export destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    /// Native desktop executable; the primary profile
    Desktop,
    /// Android APK; supplies its own entry point
    Android,
}

/// Unrecognized platform name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown target platform '{0}' (expected 'desktop' or 'android')")]
pub struct UnknownPlatform(pub String);

impl TargetPlatform {
    /// Every platform
    pub const ALL: [Self; 2] = [Self::Desktop, Self::Android];

    /// Lowercase identifier used on the command line and console
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Android => "android",
        }
    }

    /// Profile for this platform
    pub fn profile(self) -> &'static TargetProfile {
        match self {
            Self::Desktop => &DESKTOP,
            Self::Android => &ANDROID,
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" | "pc" => Ok(Self::Desktop),
            "android" => Ok(Self::Android),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// Static description of one export destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetProfile {
    /// Platform this profile describes
    pub platform: TargetPlatform,
    /// Human-readable name
    pub display_name: &'static str,
    /// Subdirectory of the export root
    pub output_dir: &'static str,
    /// Path of the generated runtime document
    pub runtime_path: &'static str,
    /// Extra entry-point document supplied by this platform
    pub entry_path: Option<&'static str>,
    /// Whether the runtime's own `main` must be hidden
    pub suppress_primary_entry: bool,
    /// Path of the build descriptor
    pub manifest_path: &'static str,
    /// Build script file name
    pub script_name: &'static str,
    /// Target triples compiled by the script
    pub target_triples: &'static [&'static str],
}

impl TargetProfile {
    /// Extra flags for the cargo invocation in the build script.
    ///
    /// Desktop builds pin their triple on the command line; the APK tool
    /// reads its targets from the manifest instead.
    pub fn cargo_flags(&self) -> String {
        match self.platform {
            TargetPlatform::Desktop => self
                .target_triples
                .iter()
                .map(|triple| format!("--target {triple}"))
                .collect::<Vec<_>>()
                .join(" "),
            TargetPlatform::Android => String::new(),
        }
    }
}

static DESKTOP: TargetProfile = TargetProfile {
    platform: TargetPlatform::Desktop,
    display_name: "Desktop",
    output_dir: "Desktop_Build",
    runtime_path: "src/main.rs",
    entry_path: None,
    suppress_primary_entry: false,
    manifest_path: "Cargo.toml",
    script_name: "build_desktop.sh",
    target_triples: &[DESKTOP_TARGET_TRIPLE],
};

static ANDROID: TargetProfile = TargetProfile {
    platform: TargetPlatform::Android,
    display_name: "Android",
    output_dir: "Android_Build",
    runtime_path: "src/game.rs",
    entry_path: Some("src/lib.rs"),
    suppress_primary_entry: true,
    manifest_path: "Cargo.toml",
    script_name: "build_android.sh",
    target_triples: ANDROID_TARGET_TRIPLES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform() {
        assert_eq!("Desktop".parse::<TargetPlatform>(), Ok(TargetPlatform::Desktop));
        assert_eq!(" android ".parse::<TargetPlatform>(), Ok(TargetPlatform::Android));
        assert!("ios".parse::<TargetPlatform>().is_err());
    }

    #[test]
    fn test_profiles_differ_in_entry_shape() {
        let desktop = TargetPlatform::Desktop.profile();
        let android = TargetPlatform::Android.profile();
        assert!(!desktop.suppress_primary_entry && desktop.entry_path.is_none());
        assert!(android.suppress_primary_entry && android.entry_path.is_some());
        assert_ne!(desktop.output_dir, android.output_dir);
        assert!(android.cargo_flags().is_empty());
        assert!(desktop.cargo_flags() == format!("--target {DESKTOP_TARGET_TRIPLE}"));
    }

    #[test]
    fn test_desktop_triple_follows_architecture_on_every_os() {
        assert_eq!(desktop_triple("linux", "aarch64"), "aarch64-unknown-linux-gnu");
        assert_eq!(desktop_triple("linux", "x86_64"), "x86_64-unknown-linux-gnu");
        assert_eq!(desktop_triple("windows", "aarch64"), "aarch64-pc-windows-msvc");
        assert_eq!(desktop_triple("windows", "x86_64"), "x86_64-pc-windows-msvc");
        assert_eq!(desktop_triple("macos", "aarch64"), "aarch64-apple-darwin");
        assert_eq!(desktop_triple("macos", "x86_64"), "x86_64-apple-darwin");

        let host_is_arm = cfg!(target_arch = "aarch64");
        assert_eq!(DESKTOP_TARGET_TRIPLE.starts_with("aarch64"), host_is_arm);
    }
}
