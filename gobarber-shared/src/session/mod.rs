//! Session lifecycle: hydrate from storage, sign in, sign out.

mod storage;
mod store;

pub use storage::{MemoryStorage, SessionStorage, StorageError};
pub use store::{AuthError, Authenticator, Session, SessionStore, TOKEN_KEY, USER_KEY};
