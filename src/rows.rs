//! Row List
//!
//! Ordered list of field rows. Every structural change (append, remove,
//! move) renumbers before returning, so serials are always `1..=N` in
//! display order.

use leptos_dragdrop::apply_move;

use crate::models::{FieldType, Row, RowId};

/// Ordered field rows plus the id allocator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowList {
    rows: Vec<Row>,
    next_id: u32,
}

impl RowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detached row with a fresh id. The caller inserts it.
    pub fn create_row(&mut self) -> Row {
        self.next_id += 1;
        Row::new(RowId(self.next_id))
    }

    /// Append one empty row at the end
    pub fn append_row(&mut self) -> RowId {
        let row = self.create_row();
        let id = row.id;
        self.rows.push(row);
        self.renumber_all();
        id
    }

    /// Append `count` empty rows and renumber once.
    ///
    /// Returns how many rows were added.
    pub fn append_multiple(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        for _ in 0..count {
            let row = self.create_row();
            self.rows.push(row);
        }
        self.renumber_all();
        count
    }

    /// Batch add driven by the free-text count input.
    ///
    /// Returns how many rows were added; the input is cleared only when
    /// this is non-zero.
    pub fn append_from_input(&mut self, input: &str) -> usize {
        parse_row_count(input).map_or(0, |count| self.append_multiple(count))
    }

    /// Remove the row with `id`. Unknown ids are ignored.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            self.renumber_all();
        }
        removed
    }

    /// Drop `source` onto `target`: a row moving down lands after the
    /// target, a row moving up lands before it.
    pub fn move_row(&mut self, source: RowId, target: RowId) -> bool {
        let moved = apply_move(&mut self.rows, |row| row.id, &source, &target);
        if moved {
            self.renumber_all();
        }
        moved
    }

    /// Rewrite every serial as its 1-based position
    pub fn renumber_all(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.serial = index as u32 + 1;
        }
    }

    pub fn set_name(&mut self, id: RowId, name: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.name = name;
        }
    }

    pub fn set_field_type(&mut self, id: RowId, field_type: Option<FieldType>) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.field_type = field_type;
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn serial_of(&self, id: RowId) -> Option<u32> {
        self.get(id).map(|row| row.serial)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// How many rows a batch-add request asks for.
///
/// Reads a leading integer the way a browser `parseInt` does (sign, digits,
/// trailing junk ignored). No number at all means one row; zero or a
/// negative number means nothing to add. A count too large for `usize`
/// saturates.
pub fn parse_row_count(input: &str) -> Option<usize> {
    let s = input.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return Some(1);
    }
    let digits = &rest[..end];
    if negative || digits.bytes().all(|b| b == b'0') {
        return None;
    }
    // Only digits left, so the parse can fail on overflow alone
    Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}
