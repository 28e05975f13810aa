//! In-memory shift collection for the selected month.
//!
//! Entries are unique by id and kept sorted by `(date, start_time)` after
//! every public operation, so a reader can never observe an unsorted or
//! duplicated state.

use crate::libs::shift::Shift;

#[derive(Debug, Clone, Default)]
pub struct ShiftStore {
    shifts: Vec<Shift>,
}

impl ShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current contents and installs `shifts`. When ids repeat,
    /// the last occurrence wins.
    pub fn replace_all(&mut self, shifts: Vec<Shift>) {
        self.shifts.clear();
        for shift in shifts {
            self.put(shift);
        }
        self.sort();
    }

    /// Replaces the entry with the same id, or adds it.
    pub fn upsert(&mut self, shift: Shift) {
        self.put(shift);
        self.sort();
    }

    /// Removes the entry with `id`. Missing ids are not an error.
    pub fn remove(&mut self, id: i64) -> Option<Shift> {
        let index = self.shifts.iter().position(|s| s.id == id)?;
        // Vec::remove keeps the remaining order, which is already sorted.
        Some(self.shifts.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    fn put(&mut self, shift: Shift) {
        match self.shifts.iter_mut().find(|s| s.id == shift.id) {
            Some(existing) => *existing = shift,
            None => self.shifts.push(shift),
        }
    }

    fn sort(&mut self) {
        self.shifts.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));
    }
}
