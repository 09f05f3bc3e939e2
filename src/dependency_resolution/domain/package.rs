use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for package name with validation
///
/// Ordering is lexicographic on the underlying string, which is the
/// presentation order used by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Names end up on single output lines; whitespace and control characters would break them
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Package name '{}' contains whitespace or control characters, which are not allowed.",
                name.escape_default()
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// PackageRecord value object: one package and its ordered direct dependencies
///
/// Dependencies may reference names that have no record of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: PackageName,
    depends: Vec<PackageName>,
    version: Option<String>,
    description: Option<String>,
}

impl PackageRecord {
    pub fn new(name: PackageName, depends: Vec<PackageName>) -> Self {
        Self {
            name,
            depends,
            version: None,
            description: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn depends(&self) -> &[PackageName] {
        &self.depends
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
