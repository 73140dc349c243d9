use std::path::Path;

use fjall::{Config, TransactionalKeyspace};
use govchain_serialization::{NumBytes, Read, Write};

mod error;
pub use error::ChainbaseError;

mod undo_session;
pub use undo_session::UndoSession;

/// An object persisted in its own partition, keyed by its primary key bytes.
pub trait ChainbaseObject: Read + Write + NumBytes {
    type PrimaryKey;

    fn primary_key(&self) -> Vec<u8>;
    fn primary_key_to_bytes(key: Self::PrimaryKey) -> Vec<u8>;
    fn table_name() -> &'static str;
}

/// Position in a session's change log that can be reverted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Savepoint(pub usize);

/// Object-level access to chain state.
///
/// Everything above the storage engine talks to state through this trait, so a
/// session can be swapped for another implementation in tests.
pub trait ObjectStore {
    fn exists<T: ChainbaseObject>(&mut self, key: T::PrimaryKey) -> Result<bool, ChainbaseError>;

    fn find<T: ChainbaseObject>(
        &mut self,
        key: T::PrimaryKey,
    ) -> Result<Option<T>, ChainbaseError>;

    fn get<T: ChainbaseObject>(&mut self, key: T::PrimaryKey) -> Result<T, ChainbaseError> {
        self.find::<T>(key)?.ok_or(ChainbaseError::NotFound)
    }

    /// Fails with `AlreadyExists` if an object with the same primary key is stored.
    fn insert<T: ChainbaseObject>(&mut self, object: &T) -> Result<(), ChainbaseError>;

    /// Inserts or overwrites.
    fn upsert<T: ChainbaseObject>(&mut self, object: &T) -> Result<(), ChainbaseError>;

    fn remove<T: ChainbaseObject>(&mut self, object: T) -> Result<(), ChainbaseError>;

    /// Every object of the table, ordered by primary key bytes.
    fn all<T: ChainbaseObject>(&mut self) -> Result<Vec<T>, ChainbaseError>;

    fn savepoint(&self) -> Savepoint;

    /// Undoes every change made after `savepoint` was taken.
    fn revert_to(&mut self, savepoint: Savepoint) -> Result<(), ChainbaseError>;
}

#[derive(Clone)]
pub struct Database {
    keyspace: TransactionalKeyspace,
}

impl Database {
    pub fn new(path: &Path) -> Result<Self, ChainbaseError> {
        Ok(Self {
            keyspace: Config::new(path).open_transactional()?,
        })
    }

    /// Opens a keyspace that is deleted from disk once dropped.
    pub fn temporary(path: &Path) -> Result<Self, ChainbaseError> {
        let keyspace = Config::new(path).temporary(true).open_transactional()?;
        Ok(Self { keyspace })
    }

    pub fn undo_session(&self) -> Result<UndoSession, ChainbaseError> {
        UndoSession::new(&self.keyspace)
    }
}
