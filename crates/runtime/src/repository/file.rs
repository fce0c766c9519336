//! File-based ProfileRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::repository::{CharacterRecord, ProfileRepository, RepositoryError};
use crate::session::CharacterId;

/// File-based implementation of ProfileRepository.
///
/// Stores each profile as `profile_{id}.bin` in bincode format. Saves go
/// through a temp file and an atomic rename, so a crash mid-write never
/// leaves a truncated profile behind.
pub struct FileProfileRepo {
    base_dir: PathBuf,
}

impl FileProfileRepo {
    /// Create a new file-based profile repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn profile_path(&self, id: CharacterId) -> PathBuf {
        self.base_dir.join(format!("profile_{}.bin", id.0))
    }
}

impl ProfileRepository for FileProfileRepo {
    fn save(&self, id: CharacterId, record: &CharacterRecord) -> Result<()> {
        let path = self.profile_path(id);
        let temp_path = path.with_extension("bin.tmp");

        let bytes = bincode::serialize(record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved profile {} to {}", id, path.display());

        Ok(())
    }

    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        let path = self.profile_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let record: CharacterRecord = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded profile {} from {}", id, path.display());

        Ok(Some(record))
    }

    fn exists(&self, id: CharacterId) -> bool {
        self.profile_path(id).exists()
    }

    fn delete(&self, id: CharacterId) -> Result<()> {
        let path = self.profile_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted profile {}", id);
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("profile_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(id) = id_str.parse::<u32>()
            {
                ids.push(CharacterId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{ProgressionRecord, StrainRecord};

    fn record(tier: u8) -> CharacterRecord {
        CharacterRecord {
            name: "Indra".to_string(),
            progression: ProgressionRecord {
                tier,
                experience: 2500,
                usage_count: 12,
            },
            strain: StrainRecord {
                value: 63,
                total_accumulated: 410,
            },
        }
    }

    #[test]
    fn round_trips_records_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProfileRepo::new(dir.path()).unwrap();
        let id = CharacterId(9);

        assert!(repo.load(id).unwrap().is_none());

        repo.save(id, &record(3)).unwrap();
        assert!(repo.exists(id));
        assert_eq!(repo.load(id).unwrap().unwrap(), record(3));

        // Overwrites replace the existing file.
        repo.save(id, &record(2)).unwrap();
        assert_eq!(repo.load(id).unwrap().unwrap().progression.tier, 2);

        repo.delete(id).unwrap();
        assert!(!repo.exists(id));
        assert!(repo.load(id).unwrap().is_none());
    }

    #[test]
    fn lists_only_profile_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProfileRepo::new(dir.path()).unwrap();

        repo.save(CharacterId(4), &record(1)).unwrap();
        repo.save(CharacterId(2), &record(1)).unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        assert_eq!(
            repo.list_ids().unwrap(),
            vec![CharacterId(2), CharacterId(4)]
        );
    }
}
