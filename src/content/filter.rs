//! Enabled-flag filtering
//!
//! Content authors hide entries and nested items by setting
//! `enabled: false`. A missing flag means the item is visible. Only an
//! explicit boolean `false` hides anything.
//!
//! Filtering works structurally over JSON values, so the same routine
//! handles journals, bank programs, flight programs and any other shape
//! that follows the convention.

use serde_json::Value;

/// Name of the visibility flag
pub const ENABLED_FIELD: &str = "enabled";

/// Items that can be hidden by an `enabled` flag
pub trait Enabled {
    fn is_enabled(&self) -> bool;
}

impl Enabled for Value {
    fn is_enabled(&self) -> bool {
        // Non-objects never carry the flag
        !matches!(self.get(ENABLED_FIELD), Some(Value::Bool(false)))
    }
}

impl<T: Enabled + ?Sized> Enabled for &T {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Keep the items that are not explicitly disabled, preserving order
pub fn filter_enabled<T, I>(items: I) -> Vec<T>
where
    T: Enabled,
    I: IntoIterator<Item = T>,
{
    items.into_iter().filter(Enabled::is_enabled).collect()
}

/// Return a copy of `entry` with disabled items removed from every nested
/// sequence, at any depth.
///
/// The entry itself is not checked; callers run [`filter_enabled`] on the
/// collection first and only deep-filter the survivors.
pub fn filter_enabled_deep(entry: &Value) -> Value {
    let mut copy = entry.clone();
    prune_disabled(&mut copy);
    copy
}

/// In-place form of [`filter_enabled_deep`].
///
/// Sequences drop disabled objects; primitives inside a sequence always
/// stay. A disabled object that is a plain field (not a sequence element)
/// is kept, since there is no sequence to remove it from.
pub fn prune_disabled(value: &mut Value) {
    match value {
        Value::Array(items) => {
            items.retain(Enabled::is_enabled);
            items.iter_mut().for_each(prune_disabled);
        }
        Value::Object(fields) => {
            fields.values_mut().for_each(prune_disabled);
        }
        _ => {}
    }
}
