use depviz::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RepositoryLoader for testing
///
/// Serves a fixed adjacency listing (or a fixed failure) and records every
/// source it was asked to load.
#[derive(Clone)]
pub struct MockRepositoryLoader {
    entries: Vec<(String, Vec<String>)>,
    should_fail: bool,
    pub requested: Arc<Mutex<Vec<RepositorySource>>>,
}

#[allow(dead_code)]
impl MockRepositoryLoader {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, deps)| {
                    (
                        name.to_string(),
                        deps.iter().map(|d| d.to_string()).collect(),
                    )
                })
                .collect(),
            should_fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            entries: Vec::new(),
            should_fail: true,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl RepositoryLoader for MockRepositoryLoader {
    fn load(&self, source: &RepositorySource) -> Result<RepositoryDescriptor> {
        self.requested.lock().unwrap().push(source.clone());

        if self.should_fail {
            anyhow::bail!("Mock loader failure for {}", source);
        }

        let records = self
            .entries
            .iter()
            .map(|(name, deps)| {
                let depends = deps
                    .iter()
                    .map(|d| PackageName::new(d.clone()))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PackageRecord::new(PackageName::new(name.clone())?, depends))
            })
            .collect::<Result<Vec<_>>>()?;

        RepositoryDescriptor::new(records)
    }
}
