use std::{cell::RefCell, rc::Rc};

use fjall::{TransactionalKeyspace, TransactionalPartitionHandle, WriteTransaction};
use govchain_serialization::{Read, Write};
use spdlog::debug;

use crate::{ChainbaseError, ChainbaseObject, ObjectStore, Savepoint};

enum ObjectChange {
    New {
        table: &'static str,
        key: Vec<u8>,
    },
    Modified {
        table: &'static str,
        key: Vec<u8>,
        old: Vec<u8>,
    },
    Deleted {
        table: &'static str,
        key: Vec<u8>,
        old: Vec<u8>,
    },
}

/// A write transaction over the keyspace that remembers every change it made.
#[derive(Clone)]
pub struct UndoSession {
    changes: Rc<RefCell<Vec<ObjectChange>>>,
    tx: Rc<RefCell<WriteTransaction>>,
    keyspace: TransactionalKeyspace,
}

impl UndoSession {
    pub fn new(keyspace: &TransactionalKeyspace) -> Result<Self, ChainbaseError> {
        Ok(Self {
            changes: Rc::new(RefCell::new(Vec::new())),
            tx: Rc::new(RefCell::new(keyspace.write_tx()?)),
            keyspace: keyspace.clone(),
        })
    }

    fn partition(&self, table: &'static str) -> Result<TransactionalPartitionHandle, ChainbaseError> {
        self.keyspace
            .open_partition(table, Default::default())
            .map_err(|e| {
                ChainbaseError::InternalError(format!("failed to open partition {}: {}", table, e))
            })
    }

    fn read_object<T: ChainbaseObject>(serialized: &[u8]) -> Result<T, ChainbaseError> {
        T::unpack(serialized).map_err(|_| ChainbaseError::ReadError)
    }

    fn pack_object<T: ChainbaseObject>(object: &T) -> Result<Vec<u8>, ChainbaseError> {
        object.pack().map_err(|_| ChainbaseError::InvalidData)
    }

    /// Number of changes recorded since the session was opened.
    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn commit(self) -> Result<(), ChainbaseError> {
        let tx = Rc::try_unwrap(self.tx)
            .map_err(|_| {
                ChainbaseError::InternalError("failed to unwrap Rc: multiple owners".to_string())
            })?
            .into_inner();
        tx.commit()
            .map_err(|e| ChainbaseError::InternalError(format!("failed to commit: {}", e)))?
            .map_err(|_| ChainbaseError::InternalError("transaction conflict".to_string()))
    }

    pub fn rollback(self) -> Result<(), ChainbaseError> {
        let tx = Rc::try_unwrap(self.tx)
            .map_err(|_| {
                ChainbaseError::InternalError("failed to unwrap Rc: multiple owners".to_string())
            })?
            .into_inner();
        tx.rollback();
        Ok(())
    }
}

impl ObjectStore for UndoSession {
    fn exists<T: ChainbaseObject>(&mut self, key: T::PrimaryKey) -> Result<bool, ChainbaseError> {
        let partition = self.partition(T::table_name())?;
        let mut tx = self.tx.borrow_mut();
        let res = tx.contains_key(&partition, T::primary_key_to_bytes(key))?;
        Ok(res)
    }

    fn find<T: ChainbaseObject>(
        &mut self,
        key: T::PrimaryKey,
    ) -> Result<Option<T>, ChainbaseError> {
        let partition = self.partition(T::table_name())?;
        let mut tx = self.tx.borrow_mut();
        match tx.get(&partition, T::primary_key_to_bytes(key))? {
            Some(serialized) => Ok(Some(Self::read_object(&serialized)?)),
            None => Ok(None),
        }
    }

    fn insert<T: ChainbaseObject>(&mut self, object: &T) -> Result<(), ChainbaseError> {
        let key = object.primary_key();
        let serialized = Self::pack_object(object)?;
        let partition = self.partition(T::table_name())?;
        let mut tx = self.tx.borrow_mut();
        if tx.contains_key(&partition, &key)? {
            return Err(ChainbaseError::AlreadyExists);
        }
        tx.insert(&partition, key.as_slice(), serialized);
        self.changes.borrow_mut().push(ObjectChange::New {
            table: T::table_name(),
            key,
        });
        Ok(())
    }

    fn upsert<T: ChainbaseObject>(&mut self, object: &T) -> Result<(), ChainbaseError> {
        let key = object.primary_key();
        let serialized = Self::pack_object(object)?;
        let partition = self.partition(T::table_name())?;
        let mut tx = self.tx.borrow_mut();
        let change = match tx.get(&partition, &key)? {
            Some(old) => ObjectChange::Modified {
                table: T::table_name(),
                key: key.clone(),
                old: old.to_vec(),
            },
            None => ObjectChange::New {
                table: T::table_name(),
                key: key.clone(),
            },
        };
        tx.insert(&partition, key.as_slice(), serialized);
        self.changes.borrow_mut().push(change);
        Ok(())
    }

    fn remove<T: ChainbaseObject>(&mut self, object: T) -> Result<(), ChainbaseError> {
        let key = object.primary_key();
        let partition = self.partition(T::table_name())?;
        let mut tx = self.tx.borrow_mut();
        let old = tx.get(&partition, &key)?.ok_or(ChainbaseError::NotFound)?;
        tx.remove(&partition, key.as_slice());
        self.changes.borrow_mut().push(ObjectChange::Deleted {
            table: T::table_name(),
            key,
            old: old.to_vec(),
        });
        Ok(())
    }

    fn all<T: ChainbaseObject>(&mut self) -> Result<Vec<T>, ChainbaseError> {
        let partition = self.partition(T::table_name())?;
        let mut tx = self.tx.borrow_mut();
        let mut objects = Vec::new();
        for item in tx.iter(&partition) {
            let (_, value) = item?;
            objects.push(Self::read_object(&value)?);
        }
        Ok(objects)
    }

    fn savepoint(&self) -> Savepoint {
        Savepoint(self.change_count())
    }

    fn revert_to(&mut self, savepoint: Savepoint) -> Result<(), ChainbaseError> {
        let mut changes = self.changes.borrow_mut();
        if savepoint.0 > changes.len() {
            return Err(ChainbaseError::InternalError(format!(
                "savepoint {} is past the end of the change log ({})",
                savepoint.0,
                changes.len()
            )));
        }

        // Every partition is opened before the log is touched, so a failure
        // leaves both the log and the transaction as they were.
        let mut undo = Vec::with_capacity(changes.len() - savepoint.0);
        for change in changes[savepoint.0..].iter().rev() {
            let (table, key, old) = match change {
                ObjectChange::New { table, key } => (*table, key, None),
                ObjectChange::Modified { table, key, old }
                | ObjectChange::Deleted { table, key, old } => (*table, key, Some(old)),
            };
            undo.push((self.partition(table)?, key.clone(), old.cloned()));
        }

        changes.truncate(savepoint.0);
        debug!("reverting {} state changes", undo.len());
        let mut tx = self.tx.borrow_mut();
        for (partition, key, old) in undo {
            match old {
                Some(old) => tx.insert(&partition, key, old),
                None => tx.remove(&partition, key),
            }
        }
        Ok(())
    }
}
