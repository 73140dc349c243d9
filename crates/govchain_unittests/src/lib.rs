#[cfg(test)]
mod unittests;

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use govchain_chainbase::{
        ChainbaseError, ChainbaseObject, Database, ObjectStore, Savepoint, UndoSession,
    };
    use govchain_core::{
        admin::{AdminCall, AdminReceipt, OwnerGate},
        error::ChainError,
        genesis::{Genesis, PricingConfig},
        state::ChainState,
    };
    use tempfile::TempDir;

    pub fn account(n: u8) -> Address {
        Address::with_last_byte(n)
    }

    pub fn genesis_owner() -> Address {
        account(1)
    }

    pub fn fee_account() -> Address {
        account(9)
    }

    pub fn default_genesis() -> Genesis {
        Genesis::new(vec![genesis_owner()], fee_account(), PricingConfig::default())
    }

    pub struct Testing<S: ObjectStore = UndoSession> {
        pub state: ChainState<S>,
        _db: Database,
        _temp_dir: TempDir,
    }

    impl Testing {
        pub fn new() -> Self {
            Testing::with_genesis(&default_genesis())
        }

        pub fn with_genesis(genesis: &Genesis) -> Self {
            Testing::with_store(genesis, |session| session)
        }
    }

    impl<S: ObjectStore> Testing<S> {
        /// Builds a chain whose session is wrapped by `wrap` once genesis has
        /// been written.
        pub fn with_store<F>(genesis: &Genesis, wrap: F) -> Self
        where
            F: FnOnce(UndoSession) -> S,
        {
            let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
            let db = Database::temporary(temp_dir.path()).expect("Failed to open database");
            let session = db.undo_session().expect("Failed to open undo session");

            let mut state = ChainState::new(session);
            state
                .initialize(genesis)
                .expect("Failed to initialize chain state");

            Testing {
                state: ChainState::new(wrap(state.into_inner())),
                _db: db,
                _temp_dir: temp_dir,
            }
        }

        pub fn invoke(&mut self, caller: Address, call: AdminCall) -> Result<AdminReceipt, ChainError> {
            let input = call.pack()?;
            OwnerGate::invoke(&mut self.state, caller, &input)
        }

        pub fn invoke_raw(&mut self, caller: Address, input: &[u8]) -> Result<AdminReceipt, ChainError> {
            OwnerGate::invoke(&mut self.state, caller, input)
        }

        pub fn owners(&mut self) -> Vec<Address> {
            self.state
                .chain_owners()
                .all_members()
                .expect("Failed to list chain owners")
        }
    }

    /// Store that refuses reads or writes on one table, or refuses to revert,
    /// for exercising failure paths.
    pub struct FaultyStore<S: ObjectStore> {
        pub inner: S,
        pub failing_reads: Option<&'static str>,
        pub failing_writes: Option<&'static str>,
        pub failing_revert: bool,
    }

    impl<S: ObjectStore> FaultyStore<S> {
        pub fn new(inner: S) -> Self {
            Self {
                inner,
                failing_reads: None,
                failing_writes: None,
                failing_revert: false,
            }
        }

        fn check_read<T: ChainbaseObject>(&self) -> Result<(), ChainbaseError> {
            match self.failing_reads {
                Some(table) if table == T::table_name() => Err(ChainbaseError::InternalError(
                    format!("read from {} refused", table),
                )),
                _ => Ok(()),
            }
        }

        fn check_write<T: ChainbaseObject>(&self) -> Result<(), ChainbaseError> {
            match self.failing_writes {
                Some(table) if table == T::table_name() => Err(ChainbaseError::InternalError(
                    format!("write to {} refused", table),
                )),
                _ => Ok(()),
            }
        }
    }

    impl<S: ObjectStore> ObjectStore for FaultyStore<S> {
        fn exists<T: ChainbaseObject>(&mut self, key: T::PrimaryKey) -> Result<bool, ChainbaseError> {
            self.check_read::<T>()?;
            self.inner.exists::<T>(key)
        }

        fn find<T: ChainbaseObject>(
            &mut self,
            key: T::PrimaryKey,
        ) -> Result<Option<T>, ChainbaseError> {
            self.check_read::<T>()?;
            self.inner.find::<T>(key)
        }

        fn insert<T: ChainbaseObject>(&mut self, object: &T) -> Result<(), ChainbaseError> {
            self.check_write::<T>()?;
            self.inner.insert(object)
        }

        fn upsert<T: ChainbaseObject>(&mut self, object: &T) -> Result<(), ChainbaseError> {
            self.check_write::<T>()?;
            self.inner.upsert(object)
        }

        fn remove<T: ChainbaseObject>(&mut self, object: T) -> Result<(), ChainbaseError> {
            self.check_write::<T>()?;
            self.inner.remove(object)
        }

        fn all<T: ChainbaseObject>(&mut self) -> Result<Vec<T>, ChainbaseError> {
            self.check_read::<T>()?;
            self.inner.all::<T>()
        }

        fn savepoint(&self) -> Savepoint {
            self.inner.savepoint()
        }

        fn revert_to(&mut self, savepoint: Savepoint) -> Result<(), ChainbaseError> {
            if self.failing_revert {
                return Err(ChainbaseError::InternalError("revert refused".to_string()));
            }
            self.inner.revert_to(savepoint)
        }
    }
}
