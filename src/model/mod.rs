//! Account record: the persisted entity and its wire form.

mod account;
pub use account::{Account, AccountPayload};
