//! Table and provider traits.
//!
//! Only [`Table::name`], [`Table::get_value`], [`Table::put_value`] and
//! [`Table::keys`] are required. The typed getters substitute the caller's
//! default when a key is absent or holds a value of another type; they never
//! fail.

use core::fmt;
use std::sync::Arc;

use crate::value::TableValue;

/// One named key-value table shared between this process and the device.
///
/// Implementations own single-key atomicity. Nothing here groups several
/// keys into one observable update.
pub trait Table: Send + Sync + fmt::Debug {
    /// Name the table was resolved under.
    fn name(&self) -> &str;

    /// Current value for `key`, if one has been published.
    fn get_value(&self, key: &str) -> Option<TableValue>;

    /// Overwrite `key` with `value`.
    fn put_value(&self, key: &str, value: TableValue);

    /// All keys currently holding a value, in no particular order.
    fn keys(&self) -> Vec<String>;

    /// Returns `true` if `key` holds a value of any type.
    fn contains_key(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }

    /// Boolean at `key`, or `default` if absent or not a boolean.
    fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.get_value(key)
            .and_then(|v| v.as_boolean())
            .unwrap_or(default)
    }

    /// Number at `key`, or `default` if absent or not a number.
    fn get_number(&self, key: &str, default: f64) -> f64 {
        self.get_value(key)
            .and_then(|v| v.as_number())
            .unwrap_or(default)
    }

    /// String at `key`, or `default` if absent or not a string.
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get_value(key) {
            Some(TableValue::String(s)) => s,
            _ => default.to_string(),
        }
    }

    /// Overwrite `key` with a boolean.
    fn put_boolean(&self, key: &str, value: bool) {
        self.put_value(key, TableValue::Boolean(value));
    }

    /// Overwrite `key` with a number.
    fn put_number(&self, key: &str, value: f64) {
        self.put_value(key, TableValue::Number(value));
    }

    /// Overwrite `key` with a string.
    fn put_string(&self, key: &str, value: &str) {
        self.put_value(key, TableValue::String(value.to_string()));
    }
}

/// Resolves tables by name.
///
/// Resolution cannot fail: a provider creates the table on first lookup and
/// hands out the same shared instance for every later lookup of that name.
pub trait TableProvider: Send + Sync {
    /// Shared table registered under `name`.
    fn table(&self, name: &str) -> Arc<dyn Table>;
}

impl<P: TableProvider + ?Sized> TableProvider for Arc<P> {
    fn table(&self, name: &str) -> Arc<dyn Table> {
        (**self).table(name)
    }
}

impl<P: TableProvider + ?Sized> TableProvider for &P {
    fn table(&self, name: &str) -> Arc<dyn Table> {
        (**self).table(name)
    }
}
