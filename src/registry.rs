//! Fixed-capacity object arena.
//!
//! Slots are addressed by stable indices.  A slot is either empty or owns a
//! single entity; empty slots are tracked in a free list that always hands
//! out the lowest index first.

use std::collections::BTreeSet;

use crate::canvas::Canvas;
use crate::dice::Dice;
use crate::entities::Entity;
use crate::error::{GameError, Result};

/// Index of a registry slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub usize);

#[derive(Clone, Debug)]
pub struct Registry {
    slots: Vec<Option<Entity>>,
    free: BTreeSet<usize>,
}

impl Registry {
    pub fn new(capacity: usize) -> Self {
        Registry {
            slots: (0..capacity).map(|_| None).collect(),
            free: (0..capacity).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: SlotId) -> Option<&Entity> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Entity> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Lowest empty slot, if any.
    pub fn first_free(&self) -> Option<SlotId> {
        self.free.first().copied().map(SlotId)
    }

    /// Place `entity` in the lowest empty slot.
    pub fn insert(&mut self, entity: impl Into<Entity>) -> Result<SlotId> {
        let id = self.first_free().ok_or(GameError::RegistryFull {
            capacity: self.capacity(),
        })?;
        self.put(id, entity.into());
        Ok(id)
    }

    /// Overwrite slot `id`, returning whatever lived there before.
    /// Out-of-range ids are ignored.
    pub fn replace(&mut self, id: SlotId, entity: impl Into<Entity>) -> Option<Entity> {
        if id.0 >= self.slots.len() {
            return None;
        }
        let previous = self.slots[id.0].take();
        self.put(id, entity.into());
        previous
    }

    /// Empty slot `id` and hand back its entity.
    pub fn remove(&mut self, id: SlotId) -> Option<Entity> {
        let entity = self.slots.get_mut(id.0)?.take();
        if entity.is_some() {
            self.free.insert(id.0);
        }
        entity
    }

    /// Drop every entity.  Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.len();
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free = (0..self.slots.len()).collect();
        released
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Entity)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (SlotId(i), e)))
    }

    /// First occupied slot whose entity satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&Entity) -> bool) -> Option<SlotId> {
        self.iter().find(|(_, e)| pred(e)).map(|(id, _)| id)
    }

    /// The visible player closest to `target`.  Ties go to the lower slot.
    pub fn nearest_visible_player(&self, target: i32) -> Option<SlotId> {
        let mut best: Option<(SlotId, i32)> = None;
        for (id, entity) in self.iter() {
            if !entity.is_player() || !entity.is_visible() {
                continue;
            }
            let distance = (entity.body().position() - target).abs();
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((id, distance)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Update every occupied slot in index order.  Each entity is lifted out
    /// of its slot while it runs so it can reach the others.
    pub fn update_all<D: Dice + ?Sized>(&mut self, dice: &mut D) {
        for i in 0..self.slots.len() {
            let Some(mut entity) = self.slots[i].take() else {
                continue;
            };
            entity.update(&mut self.slots, dice);
            self.slots[i] = Some(entity);
        }
    }

    pub fn draw_all(&mut self, canvas: &mut Canvas) {
        for entity in self.slots.iter_mut().flatten() {
            entity.draw(canvas);
        }
    }

    fn put(&mut self, id: SlotId, entity: Entity) {
        self.slots[id.0] = Some(entity);
        self.free.remove(&id.0);
    }
}
