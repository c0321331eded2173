//! Record store: the seam to the collaborator that owns the table storage.
//!
//! The editor only ever talks to a [`RecordStore`]; parsing and writing the
//! columnar table files themselves happens behind this trait. The bundled
//! [`MemoryStore`] keeps everything in insertion-ordered maps and tracks a
//! dirty flag, which is what the GUI and the tests run against.

use crate::record::{ObjectKind, Record, RecordSummary, quote_wire_value};
use crate::schema::{self, AttackProfile, UnitProfile};
use crate::statics;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no record with id {0:?}")]
    UnknownId(String),
    #[error("a record with id {0:?} already exists")]
    DuplicateId(String),
    #[error("record has no id")]
    MissingId,
    #[error("ran out of generated ids")]
    IdsExhausted,
}

/// Parameters of the New Unit dialog.
#[derive(Debug, Clone, Default)]
pub struct NewUnit {
    /// Explicit id; `None` generates one.
    pub id: Option<String>,
    pub name: String,
    pub profile: UnitProfile,
    pub attack: AttackProfile,
}

/// Parameters of the New Item dialog.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub id: Option<String>,
    pub name: String,
}

pub trait RecordStore {
    fn summaries(&self, kind: ObjectKind) -> Vec<RecordSummary>;
    fn record(&self, kind: ObjectKind, id: &str) -> Option<&Record>;
    /// Field-level save: null markers clear the field.
    fn apply_field(
        &mut self,
        kind: ObjectKind,
        id: &str,
        field: &str,
        value: &str,
    ) -> Result<(), StoreError>;
    /// Record-level save: runs finalization, then replaces or inserts.
    fn save_record(&mut self, kind: ObjectKind, record: Record)
    -> Result<RecordSummary, StoreError>;
    fn remove(&mut self, kind: ObjectKind, id: &str) -> Result<(), StoreError>;
    fn create_unit(&mut self, req: &NewUnit) -> Result<RecordSummary, StoreError>;
    fn create_item(&mut self, req: &NewItem) -> Result<RecordSummary, StoreError>;
    /// Next free generated id. Does not reserve: the id stays available
    /// until a record is actually created with it.
    fn generate_id(&mut self, kind: ObjectKind) -> Result<String, StoreError>;
    /// Flushes to the table storage (a collaborator concern) and clears the
    /// dirty flag.
    fn commit(&mut self) -> Result<(), StoreError>;
    fn dirty(&self) -> bool;
}

// Generated ids are a page letter plus three hex digits of the offset.
const MAX_GENERATED_OFFSET: usize = 16383;

fn hex_digit(value: usize) -> char {
    debug_assert!(value < 16);
    if value < 10 {
        (b'0' + value as u8) as char
    } else {
        (b'A' + (value - 10) as u8) as char
    }
}

fn generated_id(page: char, offset: usize) -> String {
    format!(
        "{page}{}{}{}",
        hex_digit((offset / 256) % 16),
        hex_digit((offset / 16) % 16),
        hex_digit(offset % 16)
    )
}

fn unit_page(offset: usize) -> char {
    match offset / 4096 {
        0 => 'u',
        1 => 'n',
        2 => 'h',
        _ => 'o',
    }
}

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    units: IndexMap<String, Record>,
    items: IndexMap<String, Record>,
    abilities: IndexMap<String, Record>,
    next_unit_offset: usize,
    next_item_offset: usize,
    next_ability_offset: usize,
    dirty: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record without touching the dirty flag. This is the loading
    /// path used by whatever parses the table files.
    pub fn insert(&mut self, kind: ObjectKind, id: &str, record: Record) {
        self.map_mut(kind).insert(id.to_string(), record);
    }

    pub fn len(&self, kind: ObjectKind) -> usize {
        self.map(kind).len()
    }

    fn map(&self, kind: ObjectKind) -> &IndexMap<String, Record> {
        match kind {
            ObjectKind::Unit => &self.units,
            ObjectKind::Item => &self.items,
            ObjectKind::Ability => &self.abilities,
        }
    }

    fn map_mut(&mut self, kind: ObjectKind) -> &mut IndexMap<String, Record> {
        match kind {
            ObjectKind::Unit => &mut self.units,
            ObjectKind::Item => &mut self.items,
            ObjectKind::Ability => &mut self.abilities,
        }
    }

    fn summary(id: &str, record: &Record) -> RecordSummary {
        RecordSummary {
            id: id.to_string(),
            name: record.display(statics::FK_NAME).to_string(),
            editor_suffix: record.display(statics::FK_EDITOR_SUFFIX).to_string(),
        }
    }

    fn resolve_new_id(
        &mut self,
        kind: ObjectKind,
        requested: Option<&str>,
    ) -> Result<String, StoreError> {
        let id = match requested {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => self.generate_id(kind)?,
        };
        if self.map(kind).contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        Ok(id)
    }
}

impl RecordStore for MemoryStore {
    fn summaries(&self, kind: ObjectKind) -> Vec<RecordSummary> {
        self.map(kind)
            .iter()
            .map(|(id, record)| Self::summary(id, record))
            .collect()
    }

    fn record(&self, kind: ObjectKind, id: &str) -> Option<&Record> {
        self.map(kind).get(id)
    }

    fn apply_field(
        &mut self,
        kind: ObjectKind,
        id: &str,
        field: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let Some(record) = self.map_mut(kind).get_mut(id) else {
            return Err(StoreError::UnknownId(id.to_string()));
        };
        record.set(field, value);
        self.dirty = true;
        Ok(())
    }

    fn save_record(
        &mut self,
        kind: ObjectKind,
        mut record: Record,
    ) -> Result<RecordSummary, StoreError> {
        schema::finalize_record(kind, &mut record);

        let id_field = schema::schema_for(kind).id_field;
        let id = record.display(id_field).to_string();
        if id.is_empty() {
            return Err(StoreError::MissingId);
        }

        let summary = Self::summary(&id, &record);
        self.map_mut(kind).insert(id, record);
        self.dirty = true;
        Ok(summary)
    }

    fn remove(&mut self, kind: ObjectKind, id: &str) -> Result<(), StoreError> {
        if self.map_mut(kind).shift_remove(id).is_none() {
            return Err(StoreError::UnknownId(id.to_string()));
        }
        self.dirty = true;
        Ok(())
    }

    fn create_unit(&mut self, req: &NewUnit) -> Result<RecordSummary, StoreError> {
        let id = self.resolve_new_id(ObjectKind::Unit, req.id.as_deref())?;

        let mut record = Record::new();
        record.set(statics::FK_UNIT_ID, &id);
        record.set_raw(statics::FK_NAME, &quote_wire_value(&req.name));
        schema::apply_template(&mut record, schema::body_template(req.profile));
        if req.profile == UnitProfile::Hero {
            schema::apply_template(&mut record, schema::HERO_OVERLAY_TEMPLATE);
        }
        schema::apply_template(&mut record, schema::attack_template(req.attack));

        info!(id = %id, name = %req.name, "created unit");
        let summary = Self::summary(&id, &record);
        self.units.insert(id, record);
        self.dirty = true;
        Ok(summary)
    }

    fn create_item(&mut self, req: &NewItem) -> Result<RecordSummary, StoreError> {
        let id = self.resolve_new_id(ObjectKind::Item, req.id.as_deref())?;

        let mut record = Record::new();
        record.set(statics::FK_ITEM_ID, &id);
        record.set_raw(statics::FK_NAME, &quote_wire_value(&req.name));
        schema::apply_template(&mut record, schema::ITEM_TEMPLATE);

        info!(id = %id, name = %req.name, "created item");
        let summary = Self::summary(&id, &record);
        self.items.insert(id, record);
        self.dirty = true;
        Ok(summary)
    }

    fn generate_id(&mut self, kind: ObjectKind) -> Result<String, StoreError> {
        let page: fn(usize) -> char = match kind {
            ObjectKind::Unit => unit_page,
            ObjectKind::Item => |_| 'I',
            ObjectKind::Ability => |_| 'A',
        };
        let mut offset = match kind {
            ObjectKind::Unit => self.next_unit_offset,
            ObjectKind::Item => self.next_item_offset,
            ObjectKind::Ability => self.next_ability_offset,
        };

        let taken = self.map(kind);
        loop {
            if offset > MAX_GENERATED_OFFSET {
                return Err(StoreError::IdsExhausted);
            }
            let id = generated_id(page(offset), offset);
            if !taken.contains_key(&id) {
                break;
            }
            offset += 1;
        }

        // The cursor sticks so the same id is handed out until a record
        // claims it.
        match kind {
            ObjectKind::Unit => self.next_unit_offset = offset,
            ObjectKind::Item => self.next_item_offset = offset,
            ObjectKind::Ability => self.next_ability_offset = offset,
        }
        Ok(generated_id(page(offset), offset))
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        info!(
            units = self.units.len(),
            items = self.items.len(),
            abilities = self.abilities.len(),
            "committing record store"
        );
        self.dirty = false;
        Ok(())
    }

    fn dirty(&self) -> bool {
        self.dirty
    }
}
