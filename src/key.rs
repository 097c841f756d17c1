//! The key-tree node type and the redefinition rules that govern merging into it.

use crate::error::TomlError;
use crate::value::Value;
use std::collections::HashMap;

/// The role a [`Key`] node plays in the tree.
///
/// Distinguishing `Table`/`TableLeaf` and `Key`/`KeyLeaf` is what lets the
/// parser tell "a table header may still be reopened and extended" apart
/// from "a key-value pair was written here and is now closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// An implicit intermediate node created while walking a dotted path.
    Key,
    /// A dotted-key segment that was assigned a scalar/array/inline-table value directly.
    KeyLeaf,
    /// A table opened with `[table]`, still open to further `[table.sub]` headers.
    Table,
    /// A table that received at least one key-value pair directly; closed to
    /// further `[table]` headers.
    TableLeaf,
    /// A table opened with `[[table]]`; its value is always an array of
    /// inline-table rows, the last of which is the currently active row.
    ArrayTable,
}

/// A node in the parsed key tree.
///
/// Every parsed document is a single root `Key` of kind `Table` whose
/// subkeys are the top-level keys; leaves carry a [`Value`], interior nodes
/// only carry subkeys.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub kind: KeyKind,
    pub id: String,
    pub value: Option<Value>,
    pub subkeys: HashMap<String, Key>,
}

impl Key {
    pub fn new(kind: KeyKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into(), value: None, subkeys: HashMap::new() }
    }

    pub fn root() -> Self {
        Self::new(KeyKind::Table, "")
    }

    /// Builds a leaf node holding `value`. An absorbed inline table is given
    /// kind `KeyLeaf`, the same as any other directly-assigned scalar: TOML
    /// inline tables are fully closed once written and may never be extended
    /// by a later dotted key or `[table]`/`[[table]]` header (see
    /// [`keys_compatible`]).
    pub fn leaf(id: impl Into<String>, value: Value) -> Self {
        Self { kind: KeyKind::KeyLeaf, id: id.into(), value: Some(value), subkeys: HashMap::new() }
    }

    /// The currently active row of an `ArrayTable` node: the last element of
    /// its backing array, which is always an inline table.
    pub fn active_row_mut(&mut self) -> Option<&mut Key> {
        match &mut self.value {
            Some(Value::Array(rows)) => match rows.last_mut() {
                Some(Value::InlineTable(row)) => Some(row.as_mut()),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn active_row(&self) -> Option<&Key> {
        match &self.value {
            Some(Value::Array(rows)) => match rows.last() {
                Some(Value::InlineTable(row)) => Some(row.as_ref()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Appends a fresh, empty row to an `ArrayTable`'s backing array and
    /// returns a mutable reference to it.
    pub fn push_array_table_row(&mut self) -> &mut Key {
        let rows = match &mut self.value {
            Some(Value::Array(rows)) => rows,
            _ => {
                self.value = Some(Value::Array(Vec::new()));
                match &mut self.value {
                    Some(Value::Array(rows)) => rows,
                    _ => unreachable!(),
                }
            }
        };
        rows.push(Value::InlineTable(Box::new(Key::new(KeyKind::TableLeaf, ""))));
        match rows.last_mut() {
            Some(Value::InlineTable(row)) => row.as_mut(),
            _ => unreachable!(),
        }
    }

    /// The node whose `subkeys` map actually owns this node's children:
    /// itself, unless it is an `ArrayTable` (children live in the active
    /// row) or a leaf holding an absorbed inline table (children live in
    /// that inline table's own key tree).
    fn routed(&self) -> &Key {
        if self.kind == KeyKind::ArrayTable {
            self.active_row().unwrap_or(self)
        } else if let Some(Value::InlineTable(inner)) = &self.value {
            inner.as_ref()
        } else {
            self
        }
    }

    fn routed_mut(&mut self) -> &mut Key {
        if self.kind == KeyKind::ArrayTable && matches!(self.value, Some(Value::Array(_))) {
            self.active_row_mut().expect("array-of-tables row present")
        } else if let Some(Value::InlineTable(inner)) = &mut self.value {
            inner.as_mut()
        } else {
            self
        }
    }

    /// Looks up an immediate subkey, routing through the active row when
    /// `self` is an `ArrayTable`, or through the nested key tree when
    /// `self` is a leaf holding an inline table.
    pub fn get_child(&self, id: &str) -> Option<&Key> {
        self.routed().subkeys.get(id)
    }

    pub fn get_child_mut(&mut self, id: &str) -> Option<&mut Key> {
        self.routed_mut().subkeys.get_mut(id)
    }

    /// Inserts or merges `incoming` as the subkey named `id`, enforcing the
    /// redefinition-compatibility rules. Returns a mutable reference to the
    /// (possibly pre-existing) resulting node.
    pub fn add_subkey(&mut self, id: &str, incoming: Key, line: usize, column: usize) -> Result<&mut Key, TomlError> {
        let target = self.routed_mut();

        if let Some(existing) = target.subkeys.get(id) {
            if !keys_compatible(existing.kind, incoming.kind) {
                return Err(TomlError::redefine(
                    crate::error::messages::KEY_ALREADY_DEFINED,
                    line,
                    column,
                ));
            }
            if incoming.kind == KeyKind::TableLeaf {
                target.subkeys.get_mut(id).unwrap().kind = KeyKind::TableLeaf;
            }
        } else {
            target.subkeys.insert(id.to_string(), incoming);
        }
        Ok(target.subkeys.get_mut(id).unwrap())
    }

    pub fn lookup(&self, path: &str) -> Result<&Value, TomlError> {
        let mut node = self;
        let segments: Vec<&str> = path.split('.').collect();
        for (i, segment) in segments.iter().enumerate() {
            node = node
                .get_child(segment)
                .ok_or_else(|| TomlError::lookup(crate::error::messages::key_not_found(path)))?;
            if i + 1 == segments.len() {
                return node
                    .value
                    .as_ref()
                    .ok_or_else(|| TomlError::lookup(crate::error::messages::key_not_found(path)));
            }
        }
        Err(TomlError::lookup(crate::error::messages::key_not_found(path)))
    }
}

/// The redefinition-compatibility rule: whether a subkey already of kind
/// `existing` may absorb a newly-parsed subkey of kind `incoming` at the
/// same name, rather than being rejected as a conflicting redefinition.
///
/// A `KeyLeaf` is always closed. A `TableLeaf` may not be reopened by
/// another `[table]`/`[table]` header (`TableLeaf`+`TableLeaf` is the one
/// other rejected combination); every other pairing is accepted, with a
/// `Table` that absorbs a `TableLeaf` being promoted to `TableLeaf` itself
/// so it, in turn, closes to further headers.
pub fn keys_compatible(existing: KeyKind, incoming: KeyKind) -> bool {
    use KeyKind::*;
    match existing {
        KeyLeaf => false,
        TableLeaf if incoming == TableLeaf => false,
        _ => true,
    }
}
