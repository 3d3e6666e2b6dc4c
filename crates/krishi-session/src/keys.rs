//! Persisted key names. Each store owns exactly one.

/// Active user role: `"farmer"` or `"buyer"`.
pub const ROLE_KEY: &str = "smartkrishi-role";

/// Cart contents: JSON array of cart items.
pub const CART_KEY: &str = "smartkrishi-cart";

/// Active display language code.
pub const LANGUAGE_KEY: &str = "krishi-lang";
