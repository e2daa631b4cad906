//! Profile Registry
//!
//! In-memory set of named profiles with one active profile.

use super::defaults;
use super::schema::{Profile, ProfileError};
use std::collections::HashMap;
use std::path::Path;

/// File suffix recognised when scanning profile directories
pub const PROFILE_SUFFIX: &str = ".vocab-profile.toml";

const EMBEDDED_GRADE9: &str = include_str!("../../resources/profiles/grade9.vocab-profile.toml");

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
    active_profile: Option<String>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            active_profile: None,
        }
    }

    /// Registry holding the embedded grade 9 profile, already active
    pub fn with_embedded() -> Self {
        let mut registry = Self::new();
        registry.add_embedded_grade9_profile();
        registry.set_active_profile(defaults::PROFILE_NAME);
        registry
    }

    /// Add a profile, replacing any previous one with the same name
    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    pub fn set_active_profile(&mut self, name: &str) -> bool {
        if self.profiles.contains_key(name) {
            self.active_profile = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn get_active_profile(&self) -> Option<&Profile> {
        self.active_profile
            .as_ref()
            .and_then(|name| self.profiles.get(name))
    }

    pub fn get_profile(&self, name: &str) -> Result<&Profile, ProfileError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    /// Profile names, sorted
    pub fn list_profiles(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Add the grade 9 profile compiled into the binary
    pub fn add_embedded_grade9_profile(&mut self) {
        match Profile::from_toml_str(EMBEDDED_GRADE9, "embedded grade9 profile") {
            Ok(profile) => self.add_profile(profile),
            Err(e) => {
                log::warn!("{}. Using built-in tables.", e);
                self.add_profile(Profile::builtin());
            }
        }
    }

    /// Load every `*.vocab-profile.toml` in `dir`; returns how many were added.
    /// Files that fail to load are logged and skipped. A missing directory adds nothing.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let read_dir = match std::fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                log::debug!("Skipping profile directory {:?}: {}", dir, e);
                return 0;
            }
        };

        let mut paths: Vec<_> = read_dir
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(PROFILE_SUFFIX))
            })
            .collect();
        paths.sort();

        let mut added = 0;
        for path in paths {
            match Profile::from_file(&path) {
                Ok(profile) => {
                    log::debug!("Loaded profile '{}' from {:?}", profile.name, path);
                    self.add_profile(profile);
                    added += 1;
                }
                Err(e) => log::warn!("Ignoring profile file: {}", e),
            }
        }
        added
    }
}
