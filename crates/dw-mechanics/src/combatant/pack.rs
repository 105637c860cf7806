//! An inventory list with an optional equipped slot.
//!
//! The equipped slot is an index into the list. Removal is the only place
//! the index can go stale, so `remove` clears or shifts it.

use crate::error::{MechError, MechResult};
use crate::item::ItemKind;

#[derive(Debug, Clone)]
pub(crate) struct Pack<T> {
    kind: ItemKind,
    items: Vec<T>,
    equipped: Option<usize>,
}

impl<T> Pack<T> {
    pub(crate) fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            equipped: None,
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub(crate) fn get(&self, index: usize) -> MechResult<&T> {
        self.items.get(index).ok_or(MechError::InvalidIndex {
            kind: self.kind,
            index,
            len: self.items.len(),
        })
    }

    pub(crate) fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    pub(crate) fn equipped(&self) -> Option<&T> {
        self.equipped.and_then(|i| self.items.get(i))
    }

    pub(crate) fn equip(&mut self, index: usize) -> MechResult<&T> {
        self.get(index)?;
        self.equipped = Some(index);
        self.get(index)
    }

    pub(crate) fn unequip(&mut self) -> Option<&T> {
        let index = self.equipped.take()?;
        self.items.get(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> MechResult<T> {
        self.get(index)?;
        self.equipped = match self.equipped {
            Some(e) if e == index => None,
            Some(e) if e > index => Some(e - 1),
            other => other,
        };
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_of(names: &[&'static str]) -> Pack<&'static str> {
        let mut pack = Pack::new(ItemKind::Weapon);
        for n in names {
            pack.push(*n);
        }
        pack
    }

    #[test]
    fn equip_out_of_range() {
        let mut pack = pack_of(&["a"]);
        let err = pack.equip(3).unwrap_err();
        assert_eq!(
            err,
            MechError::InvalidIndex {
                kind: ItemKind::Weapon,
                index: 3,
                len: 1
            }
        );
        assert_eq!(pack.equipped_index(), None);
    }

    #[test]
    fn removing_equipped_clears_slot() {
        let mut pack = pack_of(&["a", "b"]);
        pack.equip(1).unwrap();
        assert_eq!(pack.remove(1).unwrap(), "b");
        assert_eq!(pack.equipped(), None);
    }

    #[test]
    fn removing_before_equipped_shifts_slot() {
        let mut pack = pack_of(&["a", "b", "c"]);
        pack.equip(2).unwrap();
        pack.remove(0).unwrap();
        assert_eq!(pack.equipped(), Some(&"c"));
        assert_eq!(pack.equipped_index(), Some(1));
    }

    #[test]
    fn removing_after_equipped_keeps_slot() {
        let mut pack = pack_of(&["a", "b", "c"]);
        pack.equip(0).unwrap();
        pack.remove(2).unwrap();
        assert_eq!(pack.equipped(), Some(&"a"));
    }

    #[test]
    fn unequip_returns_item() {
        let mut pack = pack_of(&["a"]);
        pack.equip(0).unwrap();
        assert_eq!(pack.unequip(), Some(&"a"));
        assert_eq!(pack.unequip(), None);
        assert_eq!(pack.items().len(), 1);
    }
}
