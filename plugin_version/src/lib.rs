#![cfg_attr(not(feature = "std"), no_std)]

use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};

#[cfg(feature = "semver")]
pub use semver;

/// Plugin version: `major.minor` with an optional build number.
///
/// Ordering goes major, minor, then build. A missing build ranks below any present build
/// (`v1.0 < v1.0.0 < v1.0.5`), two missing builds are the same version.
/// `build: None` is not the same thing as `build: Some(0)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PluginVersion {
    major: u32,
    minor: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    build: Option<u32>,
}

/// Version component, used to report which part of a version was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    Major,
    Minor,
    Build,
}

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version component {component}: {value}")]
    InvalidComponent { component: Component, value: u64 },
}

impl PluginVersion {
    /// Implicit version of a plugin that does not declare one: `v1.0`.
    pub const DEFAULT: PluginVersion = PluginVersion::new(1, 0);

    pub const fn new(major: u32, minor: u32) -> Self {
        PluginVersion {
            major,
            minor,
            build: None,
        }
    }

    pub const fn with_build(major: u32, minor: u32, build: u32) -> Self {
        PluginVersion {
            major,
            minor,
            build: Some(build),
        }
    }

    pub const fn full(major: u32, minor: u32, build: Option<u32>) -> Self {
        PluginVersion {
            major,
            minor,
            build,
        }
    }

    /// Checked construction from wider integers, fails on the first component (major, minor, build)
    /// that does not fit into u32.
    pub fn try_from_parts(
        major: u64,
        minor: u64,
        build: Option<u64>,
    ) -> Result<Self, VersionError> {
        let major = narrow(Component::Major, major)?;
        let minor = narrow(Component::Minor, minor)?;
        let build = build.map(|b| narrow(Component::Build, b)).transpose()?;
        Ok(PluginVersion {
            major,
            minor,
            build,
        })
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn build(&self) -> Option<u32> {
        self.build
    }

    pub fn set_major(&mut self, major: u32) {
        self.major = major;
    }

    pub fn set_minor(&mut self, minor: u32) {
        self.minor = minor;
    }

    pub fn set_build(&mut self, build: Option<u32>) {
        self.build = build;
    }

    pub const fn with_major(self, major: u32) -> Self {
        PluginVersion { major, ..self }
    }

    pub const fn with_minor(self, minor: u32) -> Self {
        PluginVersion { minor, ..self }
    }

    pub const fn with_build_number(self, build: Option<u32>) -> Self {
        PluginVersion { build, ..self }
    }

    pub const fn without_build(self) -> Self {
        PluginVersion {
            build: None,
            ..self
        }
    }

    /// Total order between two versions, same as [Ord::cmp].
    pub fn compare(&self, other: &Self) -> Ordering {
        let ordering = self.cmp(other);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("compare({}, {}) = {:?}", self, other, ordering);
        ordering
    }

    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn is_older_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn is_same(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

fn narrow(component: Component, value: u64) -> Result<u32, VersionError> {
    u32::try_from(value).map_err(|_| VersionError::InvalidComponent { component, value })
}

impl Default for PluginVersion {
    fn default() -> Self {
        PluginVersion::DEFAULT
    }
}

impl TryFrom<(u64, u64, Option<u64>)> for PluginVersion {
    type Error = VersionError;

    fn try_from((major, minor, build): (u64, u64, Option<u64>)) -> Result<Self, Self::Error> {
        PluginVersion::try_from_parts(major, minor, build)
    }
}

impl Display for PluginVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
        }
        Ok(())
    }
}

impl Debug for PluginVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(self, f)
    }
}

// Patch is used as the build number, pre-release and build metadata are dropped.
#[cfg(feature = "semver")]
impl TryFrom<&semver::Version> for PluginVersion {
    type Error = VersionError;

    fn try_from(value: &semver::Version) -> Result<Self, Self::Error> {
        PluginVersion::try_from_parts(value.major, value.minor, Some(value.patch))
    }
}

/// Lossy: a missing build becomes patch 0.
#[cfg(feature = "semver")]
impl From<PluginVersion> for semver::Version {
    fn from(value: PluginVersion) -> Self {
        semver::Version {
            major: value.major as u64,
            minor: value.minor as u64,
            patch: value.build.unwrap_or(0) as u64,
            pre: semver::Prerelease::EMPTY,
            build: semver::BuildMetadata::EMPTY,
        }
    }
}
