//! Session state for the SmartKrishi client: cart, role, and display language.
//!
//! Each store owns its in-memory value for the session and a disjoint key in
//! the shared [`krishi_storage::KeyValueStore`]. Persistence is best-effort:
//! storage failures are logged and never surface to the caller.

pub mod cart;
pub mod keys;
pub mod language;
pub mod role;

pub use cart::{CartCandidate, CartItem, CartStore};
pub use keys::{CART_KEY, LANGUAGE_KEY, ROLE_KEY};
pub use language::LanguageStore;
pub use role::RoleStore;
