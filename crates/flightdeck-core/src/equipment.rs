//! Equipment observed in the actor's chest slot.

use serde::{Deserialize, Serialize};

/// Kind of item a chest slot can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Flight wings — the equipment whose wear the instruments report.
    Wings,
    /// Any other chest-slot item.
    #[default]
    Armor,
}

/// Item occupying the chest slot, with durability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestItem {
    pub kind: ItemKind,
    /// Damage already taken.
    pub damage: u32,
    /// Durability when new.
    pub max_damage: u32,
}

impl ChestItem {
    pub fn wings(damage: u32, max_damage: u32) -> Self {
        Self {
            kind: ItemKind::Wings,
            damage,
            max_damage,
        }
    }

    /// Remaining durability as a percentage in [0,100], if this item is
    /// flight equipment.
    pub fn health_percent(&self) -> Option<f64> {
        if self.kind != ItemKind::Wings || self.max_damage == 0 {
            return None;
        }
        let remain = (self.max_damage as f64 - self.damage as f64) / self.max_damage as f64;
        Some(remain * 100.0)
    }
}
