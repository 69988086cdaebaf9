//! A keyed, file-backed store of family members.
//!
//! [`MemberStore`] keeps members in memory in insertion order and persists
//! them as a JSON array. Changes reach the disk only on
//! [`MemberStore::flush`], which writes a temporary file next to the target
//! and atomically renames it into place.
//!
//! ```no_run
//! # use kinchart::store::MemberStore;
//! # use kinchart_core::family::{Member, Role};
//! let mut store = MemberStore::open("family.json")?;
//! store.put(Member::new("1", "Ivan", "Petrov", Role::Father));
//! store.flush()?;
//! # Ok::<(), kinchart::store::StoreError>(())
//! ```

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info};
use tempfile::NamedTempFile;
use thiserror::Error;

use kinchart_core::family::{Member, MemberId};

/// Errors raised while loading or persisting a [`MemberStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed member file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("failed to replace member file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Members keyed by id and backed by a JSON file.
#[derive(Debug)]
pub struct MemberStore {
    path: PathBuf,
    members: IndexMap<MemberId, Member>,
    dirty: bool,
}

impl MemberStore {
    /// Opens the store at `path`. A missing file opens an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON array of members. When the file repeats an id, the last entry
    /// wins.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let members = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<Vec<Member>>(&content)?
                .into_iter()
                .map(|member| (member.id().clone(), member))
                .collect(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => IndexMap::new(),
            Err(err) => return Err(err.into()),
        };

        info!(path:? = path, members = members.len(); "Member store opened");
        Ok(Self {
            path,
            members,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    /// Inserts or replaces a member, returning the previous entry. A
    /// replaced member keeps its original position.
    pub fn put(&mut self, member: Member) -> Option<Member> {
        self.dirty = true;
        self.members.insert(member.id().clone(), member)
    }

    /// Removes a member, preserving the order of the others.
    pub fn delete(&mut self, id: &MemberId) -> Option<Member> {
        let removed = self.members.shift_remove(id);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// All members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Clones the members into a list ready for rendering.
    pub fn to_vec(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Writes pending changes to disk. Does nothing when nothing changed
    /// since the last flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed
    /// over the target. The previous file content is left intact.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = NamedTempFile::new_in(directory)?;
        {
            let mut writer = BufWriter::new(file.as_file());
            let members: Vec<&Member> = self.members.values().collect();
            serde_json::to_writer_pretty(&mut writer, &members)?;
            writer.flush()?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        self.dirty = false;
        debug!(path:? = self.path, members = self.members.len(); "Member store flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kinchart_core::family::Role;

    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemberStore::open(dir.path().join("family.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_flush_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.json");

        let mut store = MemberStore::open(&path).unwrap();
        store.put(Member::new("1", "Ivan", "Petrov", Role::Father));
        store.put(
            Member::new("2", "Oleg", "Petrov", Role::Son)
                .with_father("1")
                .with_patronymic("Ivanovich"),
        );
        store.flush().unwrap();

        let reopened = MemberStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        let son = reopened.get(&MemberId::new("2")).unwrap();
        assert_eq!(son.father_id(), Some(&MemberId::new("1")));
        assert_eq!(son.patronymic(), Some("Ivanovich"));

        let ids: Vec<_> = reopened.members().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_put_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemberStore::open(dir.path().join("family.json")).unwrap();
        store.put(Member::new("1", "Ivan", "Petrov", Role::Father));
        store.put(Member::new("2", "Anna", "Petrova", Role::Mother));

        let previous = store.put(Member::new("1", "Ivan", "Sidorov", Role::Father));
        assert_eq!(previous.unwrap().last_name(), "Petrov");
        assert_eq!(store.to_vec()[0].last_name(), "Sidorov");
    }

    #[test]
    fn test_delete_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemberStore::open(dir.path().join("family.json")).unwrap();
        for id in ["a", "b", "c"] {
            store.put(Member::new(id, "", "", Role::Other));
        }

        assert!(store.delete(&MemberId::new("b")).is_some());
        assert!(store.delete(&MemberId::new("b")).is_none());
        let ids: Vec<_> = store.members().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_flush_without_changes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.json");
        let mut store = MemberStore::open(&path).unwrap();

        store.flush().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(MemberStore::open(&path), Err(StoreError::Format(_))));
    }
}
