//! Per-widget user-data slot.

use std::any::Any;
use std::rc::Rc;

/// Value type stored in a widget's data slot.
pub type DataValue = Rc<dyn Any>;

/// The user-data slot of a widget.
///
/// While no named property has ever been set, the slot holds the single
/// anonymous value directly. The first named set promotes the slot to a
/// table; removing the last named pair demotes it back, so a widget that
/// round-trips through named properties ends up shaped as if they were
/// never used.
pub enum DataSlot {
    Empty,
    Single(DataValue),
    Table {
        anonymous: Option<DataValue>,
        entries: Vec<(String, DataValue)>,
    },
}

impl DataSlot {
    pub fn new() -> Self {
        DataSlot::Empty
    }

    /// Returns true when the slot has been promoted to a key table.
    pub fn is_keyed(&self) -> bool {
        matches!(self, DataSlot::Table { .. })
    }

    pub fn get(&self) -> Option<DataValue> {
        match self {
            DataSlot::Empty => None,
            DataSlot::Single(value) => Some(Rc::clone(value)),
            DataSlot::Table { anonymous, .. } => anonymous.clone(),
        }
    }

    pub fn set(&mut self, value: Option<DataValue>) {
        match self {
            DataSlot::Table { anonymous, .. } => *anonymous = value,
            _ => {
                *self = match value {
                    Some(value) => DataSlot::Single(value),
                    None => DataSlot::Empty,
                }
            }
        }
    }

    pub fn get_keyed(&self, key: &str) -> Option<DataValue> {
        match self {
            DataSlot::Table { entries, .. } => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| Rc::clone(v)),
            _ => None,
        }
    }

    /// Sets or removes a named property, promoting or demoting the slot
    /// shape as needed.
    pub fn set_keyed(&mut self, key: &str, value: Option<DataValue>) {
        match value {
            Some(value) => {
                self.promote();
                let DataSlot::Table { entries, .. } = self else {
                    unreachable!("promote() always yields a table");
                };
                if let Some(entry) = entries.iter_mut().find(|(k, _)| k == key) {
                    entry.1 = value;
                } else {
                    entries.push((key.to_string(), value));
                }
            }
            None => {
                if let DataSlot::Table { entries, .. } = self {
                    entries.retain(|(k, _)| k != key);
                    if entries.is_empty() {
                        self.demote();
                    }
                }
            }
        }
    }

    fn promote(&mut self) {
        if self.is_keyed() {
            return;
        }
        let anonymous = match std::mem::replace(self, DataSlot::Empty) {
            DataSlot::Single(value) => Some(value),
            _ => None,
        };
        *self = DataSlot::Table {
            anonymous,
            entries: Vec::new(),
        };
    }

    fn demote(&mut self) {
        if let DataSlot::Table { anonymous, entries } = self {
            if entries.is_empty() {
                let anonymous = anonymous.take();
                *self = match anonymous {
                    Some(value) => DataSlot::Single(value),
                    None => DataSlot::Empty,
                };
            }
        }
    }
}

impl Default for DataSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: i32) -> DataValue {
        Rc::new(v)
    }

    fn as_i32(v: &DataValue) -> i32 {
        *v.downcast_ref::<i32>().unwrap()
    }

    #[test]
    fn test_anonymous_slot() {
        let mut slot = DataSlot::new();
        assert!(slot.get().is_none());
        slot.set(Some(value(7)));
        assert_eq!(as_i32(&slot.get().unwrap()), 7);
        slot.set(None);
        assert!(slot.get().is_none());
        assert!(!slot.is_keyed());
    }

    #[test]
    fn test_promotion_keeps_anonymous_value() {
        let mut slot = DataSlot::new();
        slot.set(Some(value(7)));
        slot.set_keyed("a", Some(value(1)));
        assert!(slot.is_keyed());
        assert_eq!(as_i32(&slot.get().unwrap()), 7);
        assert_eq!(as_i32(&slot.get_keyed("a").unwrap()), 1);
    }

    #[test]
    fn test_keyed_set_get_overwrite() {
        let mut slot = DataSlot::new();
        slot.set_keyed("a", Some(value(1)));
        slot.set_keyed("b", Some(value(2)));
        assert_eq!(as_i32(&slot.get_keyed("a").unwrap()), 1);
        assert_eq!(as_i32(&slot.get_keyed("b").unwrap()), 2);
        slot.set_keyed("a", Some(value(3)));
        assert_eq!(as_i32(&slot.get_keyed("a").unwrap()), 3);
        assert!(slot.get_keyed("c").is_none());
    }

    #[test]
    fn test_removing_last_pair_demotes() {
        let mut slot = DataSlot::new();
        slot.set(Some(value(7)));
        slot.set_keyed("a", Some(value(1)));
        slot.set_keyed("b", Some(value(2)));
        slot.set_keyed("b", None);
        assert!(slot.is_keyed());
        slot.set_keyed("a", None);
        assert!(!slot.is_keyed());
        assert_eq!(as_i32(&slot.get().unwrap()), 7);
    }

    #[test]
    fn test_demote_empty_to_empty() {
        let mut slot = DataSlot::new();
        slot.set_keyed("a", Some(value(1)));
        slot.set_keyed("a", None);
        assert!(!slot.is_keyed());
        assert!(slot.get().is_none());
    }
}
