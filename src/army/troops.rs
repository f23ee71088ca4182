//! Troop container - a fixed number of slots holding creature stacks
//!
//! Slots are addressed by index into an owned `Vec<Option<Troop>>` whose
//! length never changes after construction. `None` marks an empty slot.
//! Battlefield armies use five slots; transient working sets built by the
//! merge algorithms use whatever length they need.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::monster::Monster;
use super::troop::Troop;
use crate::core::error::ArmyError;
use crate::core::types::Race;

/// Number of slots in a battlefield army
pub const ARMY_SLOTS: usize = 5;

/// Result of a strongest-merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The merge finished without the preservation pass
    Merged,
    /// The giver would have been emptied and got this stack back
    GiverKept(Troop),
    /// The giver had to be left empty because the receiver could not spare
    /// a single unit
    GiverStranded,
}

/// Split `count` into `parts` shares differing by at most one
///
/// The first `count % parts` shares carry the extra unit.
pub fn even_split(count: u32, parts: usize) -> Vec<u32> {
    if parts == 0 {
        return Vec::new();
    }
    let parts_u32 = parts as u32;
    let base = count / parts_u32;
    let remainder = (count % parts_u32) as usize;
    (0..parts)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Ordered, fixed-capacity collection of stacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Troops {
    slots: Vec<Option<Troop>>,
}

impl Default for Troops {
    fn default() -> Self {
        Self::with_capacity(ARMY_SLOTS)
    }
}

impl Troops {
    /// Empty container with `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Transient container holding exactly the given stacks
    ///
    /// Stacks with a zero count are dropped.
    pub fn from_stacks<I: IntoIterator<Item = Troop>>(stacks: I) -> Self {
        Self {
            slots: stacks
                .into_iter()
                .filter(|troop| troop.count > 0)
                .map(Some)
                .collect(),
        }
    }

    /// Container with exactly these slots; zero-count stacks become empty
    pub fn from_slots<const N: usize>(slots: [Option<Troop>; N]) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|slot| slot.filter(|troop| troop.count > 0))
                .collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<Troop>] {
        &self.slots
    }

    pub fn occupied_slot_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn free_slot_count(&self) -> usize {
        self.capacity() - self.occupied_slot_count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Occupied stacks in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Troop> + '_ {
        self.slots.iter().flatten()
    }

    /// Occupied stacks with their slot index
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, Troop)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|troop| (index, troop)))
    }

    pub fn get(&self, index: usize) -> Result<Option<Troop>, ArmyError> {
        self.slots
            .get(index)
            .copied()
            .ok_or(ArmyError::SlotOutOfRange {
                index,
                capacity: self.capacity(),
            })
    }

    /// Overwrite a slot; a zero count empties it
    pub fn set(&mut self, index: usize, troop: Troop) -> Result<(), ArmyError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArmyError::SlotOutOfRange { index, capacity })?;
        *slot = (troop.count > 0).then_some(troop);
        Ok(())
    }

    /// Empty a slot and return what it held
    pub fn clear(&mut self, index: usize) -> Result<Option<Troop>, ArmyError> {
        let capacity = self.capacity();
        self.slots
            .get_mut(index)
            .map(Option::take)
            .ok_or(ArmyError::SlotOutOfRange { index, capacity })
    }

    /// Empty every slot
    pub fn clean(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Remove and return every stack in slot order, leaving all slots empty
    pub fn take_stacks(&mut self) -> Vec<Troop> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    pub fn count_of(&self, monster: Monster) -> u32 {
        self.iter()
            .filter(|troop| troop.monster == monster)
            .map(|troop| troop.count)
            .sum()
    }

    pub fn total_units(&self) -> u64 {
        self.iter().map(|troop| troop.count as u64).sum()
    }

    pub fn unique_monster_count(&self) -> usize {
        let mut seen: Vec<Monster> = Vec::with_capacity(self.capacity());
        for troop in self.iter() {
            if !seen.contains(&troop.monster) {
                seen.push(troop.monster);
            }
        }
        seen.len()
    }

    /// True if the container holds troops and all of them belong to `race`
    pub fn all_of_race(&self, race: Race) -> bool {
        !self.is_empty() && self.iter().all(|troop| troop.monster.race() == race)
    }

    /// Unit totals per creature
    pub fn tally(&self) -> AHashMap<Monster, u64> {
        let mut totals = AHashMap::new();
        for troop in self.iter() {
            *totals.entry(troop.monster).or_insert(0) += troop.count as u64;
        }
        totals
    }

    /// Sum of stack combat values, without any commander
    pub fn strength(&self) -> f64 {
        self.iter().map(Troop::strength).sum()
    }

    pub fn has_monster(&self, monster: Monster) -> bool {
        self.iter().any(|troop| troop.monster == monster)
    }

    pub fn first_free_index(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn index_of(&self, monster: Monster) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|troop| troop.monster == monster))
    }

    /// Index of the occupied slot minimizing `key`; ties go to the lowest index
    fn min_index_by<F: Fn(&Troop) -> f64>(&self, key: F) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, troop) in self.iter_indexed() {
            let value = key(&troop);
            if best.map_or(true, |(_, top)| value < top) {
                best = Some((index, value));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Slot with the lowest stack strength
    pub fn weakest_index(&self) -> Option<usize> {
        self.min_index_by(Troop::strength)
    }

    /// Slot with the highest stack strength
    pub fn strongest_index(&self) -> Option<usize> {
        self.min_index_by(|troop| -troop.strength())
    }

    /// Slot with the slowest creature
    pub fn slowest_index(&self) -> Option<usize> {
        self.min_index_by(|troop| troop.monster.stats().speed as u32 as f64)
    }

    /// True if a same-type stack exists or any slot is empty
    pub fn can_join(&self, monster: Monster) -> bool {
        self.has_monster(monster) || self.first_free_index().is_some()
    }

    /// Add units to a same-type stack or to an empty slot
    ///
    /// With `prefer_empty_slot` an empty slot is used even when a matching
    /// stack exists. Returns false for a zero count or when no slot fits.
    pub fn join(&mut self, monster: Monster, count: u32, prefer_empty_slot: bool) -> bool {
        if count == 0 {
            return false;
        }

        let target = if prefer_empty_slot {
            self.first_free_index().or_else(|| self.index_of(monster))
        } else {
            self.index_of(monster).or_else(|| self.first_free_index())
        };
        let Some(index) = target else {
            return false;
        };

        if let Some(troop) = self.slots[index].as_mut() {
            troop.count += count;
        } else {
            self.slots[index] = Some(Troop::new(monster, count));
        }
        true
    }

    pub fn join_troop(&mut self, troop: Troop) -> bool {
        self.join(troop.monster, troop.count, false)
    }

    /// Like [`Troops::join_troop`], reporting why a stack did not fit
    pub fn try_join(&mut self, troop: Troop) -> Result<(), ArmyError> {
        if self.join_troop(troop) {
            Ok(())
        } else {
            Err(ArmyError::NoRoom(troop.to_string()))
        }
    }

    /// Add a stack to an existing same-type stack only
    fn absorb(&mut self, troop: &Troop) -> bool {
        let Some(index) = self.index_of(troop.monster) else {
            return false;
        };
        if let Some(kept) = self.slots[index].as_mut() {
            kept.count += troop.count;
        }
        true
    }

    /// Combine every pair of same-type stacks into the lower slot
    pub fn merge_same_type(&mut self) {
        for first in 0..self.slots.len() {
            let Some(mut kept) = self.slots[first] else {
                continue;
            };
            for second in (first + 1)..self.slots.len() {
                if let Some(other) = self.slots[second] {
                    if other.monster == kept.monster {
                        kept.count += other.count;
                        self.slots[second] = None;
                    }
                }
            }
            self.slots[first] = Some(kept);
        }
    }

    /// Transient container with one stack per creature type and no gaps
    ///
    /// Stacks appear in the order their creature first occurs.
    pub fn optimized(&self) -> Troops {
        let mut merged: Vec<Troop> = Vec::with_capacity(self.capacity());
        for troop in self.iter() {
            match merged.iter_mut().find(|t| t.monster == troop.monster) {
                Some(existing) => existing.count += troop.count,
                None => merged.push(*troop),
            }
        }
        Troops::from_stacks(merged)
    }

    /// Merge same types and move the stacks to the front, keeping capacity
    pub fn canonicalize(&mut self) {
        let stacks = self.optimized().take_stacks();
        self.clean();
        for (slot, troop) in self.slots.iter_mut().zip(stacks) {
            *slot = Some(troop);
        }
    }

    /// Split a stack evenly across free slots
    ///
    /// Uses `k = min(max_slots, free slots, count)` slots and returns `k`.
    pub fn distribute_into_free_slots(&mut self, troop: Troop, max_slots: usize) -> usize {
        let slots = max_slots
            .min(self.free_slot_count())
            .min(troop.count as usize);
        if slots == 0 {
            return 0;
        }

        let shares = even_split(troop.count, slots);
        let free: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
            .take(slots)
            .collect();
        for (index, share) in free.into_iter().zip(shares) {
            self.slots[index] = Some(Troop::new(troop.monster, share));
        }
        slots
    }

    /// Free a slot in a full container by merging the weakest duplicated type
    ///
    /// Returns true without change when a slot is already free and false
    /// when every stack holds a distinct creature.
    pub fn merge_weakest_if_full(&mut self) -> bool {
        if !self.is_full() {
            return true;
        }

        // (monster, slots occupied, summed strength) in first-appearance order
        let mut types: Vec<(Monster, usize, f64)> = Vec::new();
        for troop in self.iter() {
            match types.iter_mut().find(|(m, _, _)| *m == troop.monster) {
                Some(entry) => {
                    entry.1 += 1;
                    entry.2 += troop.strength();
                }
                None => types.push((troop.monster, 1, troop.strength())),
            }
        }

        let mut weakest: Option<(Monster, f64)> = None;
        for (monster, occupied, strength) in types {
            if occupied > 1 && weakest.map_or(true, |(_, top)| strength < top) {
                weakest = Some((monster, strength));
            }
        }
        let Some((monster, _)) = weakest else {
            return false;
        };

        let mut target: Option<usize> = None;
        for index in 0..self.slots.len() {
            let Some(troop) = self.slots[index] else {
                continue;
            };
            if troop.monster != monster {
                continue;
            }
            match target {
                None => target = Some(index),
                Some(first) => {
                    if let Some(kept) = self.slots[first].as_mut() {
                        kept.count += troop.count;
                    }
                    self.slots[index] = None;
                }
            }
        }
        debug!("Merged {} stacks to free a slot", monster);
        true
    }

    /// Peel single units off the stack with the weakest creature
    ///
    /// Moves `min(free slots, count - 1)` units into their own slots so the
    /// source keeps at least one unit. Returns whether anything moved.
    pub fn split_weakest_into_free_slots(&mut self) -> bool {
        let Some(index) = self.min_index_by(Troop::unit_value) else {
            return false;
        };
        let Some(mut source) = self.slots[index] else {
            return false;
        };

        let moved = self
            .free_slot_count()
            .min(source.count.saturating_sub(1) as usize);
        if moved == 0 {
            return false;
        }

        source.count -= moved as u32;
        self.slots[index] = Some(source);
        for _ in 0..moved {
            if let Some(free) = self.first_free_index() {
                self.slots[free] = Some(Troop::new(source.monster, 1));
            }
        }
        trace!("Split {} single {} off slot {}", moved, source.monster, index);
        true
    }

    /// Replace every stack of `monster` with its next tier
    pub fn upgrade_all(&mut self, monster: Monster) -> u32 {
        let Some(next) = monster.upgrade() else {
            return 0;
        };
        let mut upgraded = 0;
        for troop in self.slots.iter_mut().flatten() {
            if troop.monster == monster {
                troop.monster = next;
                upgraded += troop.count;
            }
        }
        upgraded
    }

    /// Take the strongest stacks from `giver` while keeping the slot count
    ///
    /// Everything the receiver cannot hold goes back to the giver. When
    /// `keep_one_for_giver` is set and the giver would be emptied, part of
    /// the receiver's weakest stack is handed back: the whole stack if it is
    /// worth less than `preservation_ratio` of the receiver, otherwise as
    /// many units as fit under that share, at most half the stack and at
    /// least one unit.
    pub fn join_strongest(
        &mut self,
        giver: &mut Troops,
        keep_one_for_giver: bool,
        preservation_ratio: f64,
    ) -> Result<MergeOutcome, ArmyError> {
        let mut expected = self.tally();
        for (monster, count) in giver.tally() {
            *expected.entry(monster).or_insert(0) += count;
        }

        // Slot-aligned pass
        let aligned = self.capacity().min(giver.capacity());
        for index in 0..aligned {
            let Some(given) = giver.slots[index] else {
                continue;
            };
            match self.slots[index] {
                None => self.slots[index] = Some(given),
                Some(ref mut kept) if kept.monster == given.monster => kept.count += given.count,
                Some(_) => continue,
            }
            giver.slots[index] = None;
        }

        // Optimize-and-swap pass
        let mut remainder = giver.optimized().take_stacks();
        giver.clean();
        remainder.sort_by(|a, b| a.strength().total_cmp(&b.strength()));
        self.merge_same_type();
        remainder.retain(|troop| !self.absorb(troop));

        while let Some(free) = self.first_free_index() {
            let Some(troop) = remainder.pop() else {
                break;
            };
            self.slots[free] = Some(troop);
        }

        let mut returned: Vec<Troop> = Vec::new();
        while let (Some(weak_index), Some(candidate)) = (self.weakest_index(), remainder.last()) {
            let Some(weakest) = self.slots[weak_index] else {
                break;
            };
            if candidate.strength() <= weakest.strength() {
                break;
            }
            self.slots[weak_index] = remainder.pop();
            trace!("Swapped {} out for a stronger stack", weakest);
            returned.push(weakest);
        }
        returned.extend(remainder.into_iter().rev());

        for troop in returned {
            if !giver.join_troop(troop) {
                return Err(ArmyError::InvariantViolated(format!(
                    "no slot left to return {} to the giver",
                    troop
                )));
            }
        }

        // Giver-preservation pass
        let mut outcome = MergeOutcome::Merged;
        if keep_one_for_giver && giver.is_empty() {
            outcome = self.preserve_giver(giver, preservation_ratio);
        }

        let mut actual = self.tally();
        for (monster, count) in giver.tally() {
            *actual.entry(monster).or_insert(0) += count;
        }
        debug_assert_eq!(actual, expected, "strongest-merge changed unit totals");
        if actual != expected {
            return Err(ArmyError::InvariantViolated(
                "strongest-merge changed unit totals".into(),
            ));
        }
        Ok(outcome)
    }

    fn preserve_giver(&mut self, giver: &mut Troops, ratio: f64) -> MergeOutcome {
        let Some(index) = self.weakest_index() else {
            return MergeOutcome::GiverStranded;
        };
        let Some(mut weakest) = self.slots[index] else {
            return MergeOutcome::GiverStranded;
        };

        let total = self.strength();
        let threshold = total * ratio;
        let stack_value = weakest.strength();

        let whole_stack = stack_value < threshold && self.occupied_slot_count() > 1;
        let units = if whole_stack {
            weakest.count
        } else {
            let fitting = (weakest.count as f64 * threshold / stack_value).floor() as u32;
            fitting.min(weakest.count / 2).max(1)
        };

        if units >= weakest.count && self.occupied_slot_count() == 1 {
            debug!("Receiver cannot spare any of {}, giver left empty", weakest);
            return MergeOutcome::GiverStranded;
        }

        let kept = Troop::new(weakest.monster, units);
        weakest.count -= units;
        self.slots[index] = (weakest.count > 0).then_some(weakest);
        giver.join_troop(kept);
        debug!("Handed {} back to keep the giver's army alive", kept);
        MergeOutcome::GiverKept(kept)
    }

    /// Keep the weakest stacks and send the strongest to `other`
    ///
    /// Both containers are pooled; `other` receives the strongest stacks up
    /// to its capacity and this container keeps the rest. With `save_last`
    /// an emptied container keeps half of the weakest stack sent over.
    pub fn keep_only_weakest(&mut self, other: &mut Troops, save_last: bool) {
        let mut pool = self.optimized().take_stacks();
        pool.extend(other.optimized().take_stacks());
        let mut pool = Troops::from_stacks(pool).optimized().take_stacks();
        self.clean();
        other.clean();

        // Strongest first
        pool.sort_by(|a, b| b.strength().total_cmp(&a.strength()));
        let split = other.capacity().min(pool.len());
        let weaker = pool.split_off(split);
        let mut stronger = pool;

        for troop in weaker {
            if !self.join_troop(troop) {
                other.join_troop(troop);
            }
        }

        if save_last && self.is_empty() {
            if let Some(last) = stronger.last_mut() {
                let kept = last.count - last.count / 2;
                last.count /= 2;
                self.join(last.monster, kept, false);
            }
        }

        for troop in stronger.into_iter().filter(|t| t.count > 0) {
            other.join_troop(troop);
        }
    }
}
