use crate::config::{self, EditorConfig};
use crate::markup::markup_spans;
use crate::record::{self, ObjectKind, RecordSummary, SortKey, SortOrder};
use crate::schema::{self, AttackProfile, ObjectSchema, UnitProfile, WidgetKind};
use crate::statics;
use crate::store::{NewItem, NewUnit, RecordStore};
use crate::tooltip;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use indexmap::IndexMap;
use std::path::PathBuf;

pub fn run_gui(store: Box<dyn RecordStore>) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(SlkedApp::new(store)))),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveStatus {
    Saved,
    Unsaved,
    Saving,
}

impl SaveStatus {
    fn label(self) -> &'static str {
        match self {
            SaveStatus::Saved => statics::EN_STATUS_SAVED,
            SaveStatus::Unsaved => statics::EN_STATUS_UNSAVED,
            SaveStatus::Saving => statics::EN_STATUS_SAVING,
        }
    }
}

/// Per-tab table state: search query, three-state sort, selection.
#[derive(Default)]
struct KindState {
    query: String,
    name_order: SortOrder,
    id_order: SortOrder,
    selected: Option<String>,
}

impl KindState {
    /// Engaging one sort column resets the other.
    fn cycle_sort(&mut self, key: SortKey) {
        match key {
            SortKey::Name => {
                self.name_order = self.name_order.cycle();
                self.id_order = SortOrder::Unsorted;
            }
            SortKey::Id => {
                self.id_order = self.id_order.cycle();
                self.name_order = SortOrder::Unsorted;
            }
        }
    }
}

/// The main application state: the record store (owned), configuration, and
/// the per-tab UI state plus the form buffers for the selected record.
struct SlkedApp {
    store: Box<dyn RecordStore>,
    config: EditorConfig,
    config_dir: PathBuf,
    disabled_fields: Vec<String>,

    tab: ObjectKind,
    units: KindState,
    items: KindState,
    abilities: KindState,

    // Form buffers for the selected record, keyed by field key and rebuilt
    // on selection change so in-progress typing is never clobbered.
    form: IndexMap<String, String>,

    status: SaveStatus,
    last_error: Option<String>,
    focus_search: bool,

    about_open: bool,

    new_unit_open: bool,
    new_unit_name: String,
    new_unit_id: String,
    new_unit_generate: bool,
    new_unit_profile: UnitProfile,
    new_unit_attack: AttackProfile,

    new_item_open: bool,
    new_item_name: String,
    new_item_id: String,
    new_item_generate: bool,

    options_open: bool,
    options_in_dir: String,
    options_out_dir: String,
}

impl SlkedApp {
    fn new(store: Box<dyn RecordStore>) -> Self {
        let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = EditorConfig::load_or_default(&config_dir);
        let disabled_fields = config::load_disabled_fields(&config_dir).unwrap_or_else(|e| {
            tracing::warn!("falling back to built-in disabled-field list: {e:#}");
            statics::DEFAULT_DISABLED_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        SlkedApp {
            store,
            config,
            config_dir,
            disabled_fields,
            tab: ObjectKind::Unit,
            units: KindState::default(),
            items: KindState::default(),
            abilities: KindState::default(),
            form: IndexMap::new(),
            status: SaveStatus::Saved,
            last_error: None,
            focus_search: false,
            about_open: false,
            new_unit_open: false,
            new_unit_name: String::new(),
            new_unit_id: String::new(),
            new_unit_generate: true,
            new_unit_profile: UnitProfile::default(),
            new_unit_attack: AttackProfile::default(),
            new_item_open: false,
            new_item_name: String::new(),
            new_item_id: String::new(),
            new_item_generate: true,
            options_open: false,
            options_in_dir: String::new(),
            options_out_dir: String::new(),
        }
    }

    fn state(&self, kind: ObjectKind) -> &KindState {
        match kind {
            ObjectKind::Unit => &self.units,
            ObjectKind::Item => &self.items,
            ObjectKind::Ability => &self.abilities,
        }
    }

    fn state_mut(&mut self, kind: ObjectKind) -> &mut KindState {
        match kind {
            ObjectKind::Unit => &mut self.units,
            ObjectKind::Item => &mut self.items,
            ObjectKind::Ability => &mut self.abilities,
        }
    }

    fn field_hidden(locked: bool, disabled: &[String], key: &str) -> bool {
        locked && disabled.iter().any(|f| f == key)
    }

    /// Rebuilds the form buffers from the selected record.
    fn rebuild_form(&mut self) {
        self.form.clear();
        let kind = self.tab;
        let Some(id) = self.state(kind).selected.clone() else {
            return;
        };
        let Some(record) = self.store.record(kind, &id) else {
            return;
        };

        let sch = schema::schema_for(kind);
        for section in sch.sections {
            for field in section.fields {
                let value = match field.kind {
                    WidgetKind::MultiLine => record.display_multiline(field.key),
                    _ => record.display(field.key).to_string(),
                };
                self.form.insert(field.key.to_string(), value);
            }
        }

        // The split button-position columns override a stale combined one.
        if self.form.contains_key(statics::FK_BUTTON_POS_X) {
            let pos = record::sanitize_button_pos(
                record.get(statics::FK_BUTTON_POS),
                record.get(statics::FK_BUTTON_POS_X),
                record.get(statics::FK_BUTTON_POS_Y),
            );
            let mut coords = pos.split(',');
            if let (Some(x), Some(y)) = (coords.next(), coords.next()) {
                self.form
                    .insert(statics::FK_BUTTON_POS_X.to_string(), x.to_string());
                self.form
                    .insert(statics::FK_BUTTON_POS_Y.to_string(), y.to_string());
            }
        }

        if sch.has_level_data {
            let levels = record.get_i64(statics::FK_LEVELS).unwrap_or(0).clamp(0, 50);
            for (base, _) in statics::ABILITY_LEVEL_FIELDS {
                for level in 1..=levels {
                    let key = format!("{base}{level}");
                    self.form
                        .insert(key.clone(), record.display(&key).to_string());
                }
            }
        }
    }

    fn select_record(&mut self, kind: ObjectKind, id: String) {
        self.state_mut(kind).selected = Some(id);
        self.last_error = None;
        self.rebuild_form();
    }

    fn apply_field_edit(&mut self, field: &str, wire: &str) {
        let kind = self.tab;
        let Some(id) = self.state(kind).selected.clone() else {
            return;
        };
        match self.store.apply_field(kind, &id, field, wire) {
            Ok(()) => {
                self.status = SaveStatus::Unsaved;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to apply field: {e}")),
        }
    }

    /// Record-level save of the selection followed by a store commit.
    fn save_to_file(&mut self) {
        self.status = SaveStatus::Saving;

        let kind = self.tab;
        if let Some(id) = self.state(kind).selected.clone()
            && let Some(record) = self.store.record(kind, &id).cloned()
        {
            match self.store.save_record(kind, record) {
                Ok(summary) => {
                    // Finalization may have re-keyed the record (edited id).
                    self.state_mut(kind).selected = Some(summary.id);
                    self.rebuild_form();
                }
                Err(e) => {
                    self.status = SaveStatus::Unsaved;
                    self.last_error = Some(format!("Failed to save: {e}"));
                    return;
                }
            }
        }

        match self.store.commit() {
            Ok(()) => {
                self.status = SaveStatus::Saved;
                self.last_error = None;
            }
            Err(e) => {
                self.status = SaveStatus::Unsaved;
                self.last_error = Some(format!("Failed to save: {e}"));
            }
        }
    }

    fn remove_selected(&mut self) {
        let kind = self.tab;
        let Some(id) = self.state(kind).selected.clone() else {
            return;
        };
        match self.store.remove(kind, &id) {
            Ok(()) => {
                self.state_mut(kind).selected = None;
                self.form.clear();
                self.status = SaveStatus::Unsaved;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to remove: {e}")),
        }
    }

    fn suggest_tooltip(&mut self) {
        let kind = self.tab;
        let Some(id) = self.state(kind).selected.clone() else {
            return;
        };
        let Some(record) = self.store.record(kind, &id) else {
            return;
        };

        let generated = tooltip::generate_attack_tooltip(record);
        self.form.insert(
            statics::FK_UBERTIP.to_string(),
            generated.replace(statics::MARKUP_LINE_BREAK, "\n"),
        );
        let wire = record::quote_wire_value(&generated);
        self.apply_field_edit(statics::FK_UBERTIP, &wire);
    }

    /// Colored preview of annotated tooltip text.
    fn markup_layout_job(text: &str, default_color: egui::Color32) -> egui::text::LayoutJob {
        let mut job = egui::text::LayoutJob::default();
        for span in markup_spans(text) {
            let color = span
                .color
                .map(|c| egui::Color32::from_rgba_unmultiplied(c.red, c.green, c.blue, c.alpha))
                .unwrap_or(default_color);
            job.append(
                &span.text,
                0.0,
                egui::TextFormat {
                    color,
                    ..Default::default()
                },
            );
        }
        job
    }

    fn sort_glyph(order: SortOrder) -> Option<&'static str> {
        match order {
            SortOrder::Unsorted => None,
            SortOrder::Ascending => Some(statics::EN_GLYPH_SORT_ASC),
            SortOrder::Descending => Some(statics::EN_GLYPH_SORT_DESC),
        }
    }

    /// Renders one schema-driven form field row; edits land in `pending`
    /// as (field key, wire value) pairs.
    fn render_field(
        ui: &mut egui::Ui,
        field: &schema::FieldSpec,
        form: &mut IndexMap<String, String>,
        pending: &mut Vec<(String, String)>,
    ) {
        ui.label(field.label);
        match field.kind {
            WidgetKind::Text => {
                let buf = form.entry(field.key.to_string()).or_default();
                let changed = ui
                    .add(egui::TextEdit::singleline(buf).desired_width(260.0))
                    .changed();
                if changed {
                    let value = form.get(field.key).cloned().unwrap_or_default();
                    pending.push((field.key.to_string(), schema::normalize_text_input(&value)));
                }
            }
            WidgetKind::MultiLine => {
                let buf = form.entry(field.key.to_string()).or_default();
                let changed = ui
                    .add(
                        egui::TextEdit::multiline(buf)
                            .desired_rows(4)
                            .desired_width(260.0),
                    )
                    .changed();
                if changed {
                    let value = form.get(field.key).cloned().unwrap_or_default();
                    pending.push((field.key.to_string(), schema::normalize_text_input(&value)));
                }
            }
            WidgetKind::Select => {
                let current = form.get(field.key).cloned().unwrap_or_default();
                let mut picked: Option<&'static str> = None;
                egui::ComboBox::from_id_salt(field.key)
                    .width(260.0)
                    .selected_text(if current.is_empty() {
                        "_".to_string()
                    } else {
                        current.clone()
                    })
                    .show_ui(ui, |ui| {
                        for opt in field.options.iter().copied() {
                            let display = record::trim_quotes(opt);
                            if ui.selectable_label(current == display, display).clicked() {
                                picked = Some(opt);
                            }
                        }
                    });
                if let Some(opt) = picked {
                    form.insert(
                        field.key.to_string(),
                        record::trim_quotes(opt).to_string(),
                    );
                    pending.push((field.key.to_string(), opt.to_string()));
                }
            }
            WidgetKind::Check => {
                let mut checked = form.get(field.key).map(String::as_str) == Some("1");
                if ui.checkbox(&mut checked, "").changed() {
                    let value = schema::check_value(checked);
                    form.insert(field.key.to_string(), value.to_string());
                    pending.push((field.key.to_string(), value.to_string()));
                }
            }
            WidgetKind::MultiCheck => {
                let current = form.get(field.key).cloned().unwrap_or_default();
                let mut selected = schema::multi_check_selected(&current, field.options);
                let summary = if selected.is_empty() {
                    "_".to_string()
                } else {
                    selected.join(",")
                };

                let mut changed = false;
                egui::CollapsingHeader::new(summary)
                    .id_salt(field.key)
                    .show(ui, |ui| {
                        for opt in field.options.iter().copied() {
                            let mut on = selected.contains(&opt);
                            if ui.checkbox(&mut on, opt).changed() {
                                changed = true;
                                if on {
                                    selected.push(opt);
                                } else {
                                    selected.retain(|o| *o != opt);
                                }
                            }
                        }
                    });

                if changed {
                    let ordered: Vec<&str> = field
                        .options
                        .iter()
                        .copied()
                        .filter(|o| selected.contains(o))
                        .collect();
                    form.insert(field.key.to_string(), ordered.join(","));
                    pending.push((field.key.to_string(), schema::multi_check_value(&ordered)));
                }
            }
        }
        ui.end_row();
    }

    fn render_form_sections(
        ui: &mut egui::Ui,
        sch: &'static ObjectSchema,
        form: &mut IndexMap<String, String>,
        locked: bool,
        disabled: &[String],
        pending: &mut Vec<(String, String)>,
    ) {
        for section in sch.sections {
            ui.heading(section.title);
            egui::Grid::new(section.title)
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for field in section.fields {
                        if Self::field_hidden(locked, disabled, field.key) {
                            continue;
                        }
                        Self::render_field(ui, field, form, pending);
                    }
                });
            ui.separator();
        }
    }

    fn render_level_rows(
        ui: &mut egui::Ui,
        form: &mut IndexMap<String, String>,
        pending: &mut Vec<(String, String)>,
    ) {
        let levels: i64 = form
            .get(statics::FK_LEVELS)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        if levels <= 0 {
            return;
        }

        ui.heading(statics::EN_HEADING_LEVELS);
        egui::Grid::new("level_data")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (base, label) in statics::ABILITY_LEVEL_FIELDS {
                    for level in 1..=levels.min(50) {
                        let key = format!("{base}{level}");
                        ui.label(format!("{label} - {level}"));
                        let buf = form.entry(key.clone()).or_default();
                        let changed = ui
                            .add(egui::TextEdit::singleline(buf).desired_width(260.0))
                            .changed();
                        if changed {
                            let value = form.get(&key).cloned().unwrap_or_default();
                            pending.push((key, schema::normalize_text_input(&value)));
                        }
                        ui.end_row();
                    }
                }
            });
        ui.separator();
    }

    fn render_record_table(&mut self, ui: &mut egui::Ui) {
        let tab = self.tab;
        let summaries = self.store.summaries(tab);
        let regex_mode = self.config.is_regex_search;
        let focus_search = self.focus_search;
        self.focus_search = false;

        let mut regex_toggled = false;
        let mut clicked: Option<String> = None;

        {
            let state = match tab {
                ObjectKind::Unit => &mut self.units,
                ObjectKind::Item => &mut self.items,
                ObjectKind::Ability => &mut self.abilities,
            };

            ui.horizontal(|ui| {
                ui.label(statics::EN_LABEL_SEARCH);
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut state.query)
                        .hint_text(statics::EN_HINT_SEARCH),
                );
                if focus_search {
                    resp.request_focus();
                }
                let mut regex = regex_mode;
                if ui.checkbox(&mut regex, statics::EN_LABEL_REGEX).changed() {
                    regex_toggled = true;
                }
                if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                    state.query.clear();
                }
            });
            ui.separator();

            let mut list = record::filter_summaries(&summaries, &state.query, regex_mode);
            if state.name_order != SortOrder::Unsorted {
                record::sort_summaries(&mut list, SortKey::Name, state.name_order);
            } else {
                record::sort_summaries(&mut list, SortKey::Id, state.id_order);
            }

            if list.is_empty() && !state.query.is_empty() {
                ui.label(statics::EN_SEARCH_NO_MATCHES);
            }

            let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
            let selected_id = state.selected.clone();
            let mut sort_clicked: Option<SortKey> = None;

            ui.push_id("record_table", |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::initial(70.0).resizable(true))
                    .column(Column::remainder().resizable(true))
                    .header(row_h, |mut header| {
                        header.col(|ui| {
                            if ui
                                .add(egui::Button::new(statics::EN_COL_ID).frame(false))
                                .clicked()
                            {
                                sort_clicked = Some(SortKey::Id);
                            }
                            if let Some(glyph) = Self::sort_glyph(state.id_order) {
                                ui.label(glyph);
                            }
                        });
                        header.col(|ui| {
                            if ui
                                .add(egui::Button::new(statics::EN_COL_NAME).frame(false))
                                .clicked()
                            {
                                sort_clicked = Some(SortKey::Name);
                            }
                            if let Some(glyph) = Self::sort_glyph(state.name_order) {
                                ui.label(glyph);
                            }
                        });
                    })
                    .body(|body| {
                        body.rows(row_h, list.len(), |mut row| {
                            let summary: &RecordSummary = &list[row.index()];
                            let is_selected = selected_id.as_deref() == Some(summary.id.as_str());
                            row.col(|ui| {
                                ui.monospace(&summary.id);
                            });
                            row.col(|ui| {
                                if ui.selectable_label(is_selected, &summary.name).clicked() {
                                    clicked = Some(summary.id.clone());
                                }
                                if !summary.editor_suffix.is_empty() {
                                    ui.weak(&summary.editor_suffix);
                                }
                            });
                        });
                    });
            });

            if let Some(key) = sort_clicked {
                state.cycle_sort(key);
            }
        }

        if regex_toggled {
            self.config.is_regex_search = !regex_mode;
            if let Err(e) = self.config.save(&self.config_dir) {
                self.last_error = Some(format!("Failed to save config: {e:#}"));
            }
        }

        if let Some(id) = clicked {
            self.select_record(tab, id);
        }
    }

    fn render_new_unit_window(&mut self, ctx: &egui::Context) {
        if !self.new_unit_open {
            return;
        }
        let mut open = self.new_unit_open;
        let mut close_requested = false;

        egui::Window::new(statics::EN_WINDOW_NEW_UNIT)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("new_unit_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(statics::EN_LABEL_NAME);
                        ui.text_edit_singleline(&mut self.new_unit_name);
                        ui.end_row();

                        ui.label(statics::EN_LABEL_GENERATE_ID);
                        ui.checkbox(&mut self.new_unit_generate, "");
                        ui.end_row();

                        ui.label(statics::EN_LABEL_ID);
                        ui.horizontal(|ui| {
                            ui.add_enabled(
                                !self.new_unit_generate,
                                egui::TextEdit::singleline(&mut self.new_unit_id)
                                    .desired_width(80.0),
                            );
                            if ui
                                .add_enabled(
                                    !self.new_unit_generate,
                                    egui::Button::new(statics::EN_BTN_GENERATE),
                                )
                                .clicked()
                            {
                                match self.store.generate_id(ObjectKind::Unit) {
                                    Ok(id) => self.new_unit_id = id,
                                    Err(e) => {
                                        self.last_error =
                                            Some(format!("Failed to generate id: {e}"));
                                    }
                                }
                            }
                        });
                        ui.end_row();

                        ui.label(statics::EN_LABEL_UNIT_TYPE);
                        ui.horizontal(|ui| {
                            for profile in
                                [UnitProfile::Unit, UnitProfile::Building, UnitProfile::Hero]
                            {
                                ui.selectable_value(
                                    &mut self.new_unit_profile,
                                    profile,
                                    profile.label(),
                                );
                            }
                        });
                        ui.end_row();

                        ui.label(statics::EN_LABEL_ATTACK_TYPE);
                        egui::ComboBox::from_id_salt("new_unit_attack")
                            .selected_text(self.new_unit_attack.label())
                            .show_ui(ui, |ui| {
                                for attack in [
                                    AttackProfile::None,
                                    AttackProfile::Melee,
                                    AttackProfile::Ranged,
                                    AttackProfile::RangedSplash,
                                ] {
                                    ui.selectable_value(
                                        &mut self.new_unit_attack,
                                        attack,
                                        attack.label(),
                                    );
                                }
                            });
                        ui.end_row();
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_CREATE).clicked() {
                        if self.new_unit_name.trim().is_empty() {
                            self.last_error = Some(statics::EN_ERR_NAME_REQUIRED.to_string());
                        } else if !self.new_unit_generate && self.new_unit_id.trim().is_empty() {
                            self.last_error = Some(statics::EN_ERR_ID_REQUIRED.to_string());
                        } else {
                            let req = NewUnit {
                                id: (!self.new_unit_generate)
                                    .then(|| self.new_unit_id.trim().to_string()),
                                name: self.new_unit_name.trim().to_string(),
                                profile: self.new_unit_profile,
                                attack: self.new_unit_attack,
                            };
                            match self.store.create_unit(&req) {
                                Ok(summary) => {
                                    self.tab = ObjectKind::Unit;
                                    self.select_record(ObjectKind::Unit, summary.id);
                                    self.status = SaveStatus::Unsaved;
                                    self.new_unit_name.clear();
                                    self.new_unit_id.clear();
                                    close_requested = true;
                                }
                                Err(e) => {
                                    self.last_error = Some(format!("Failed to create unit: {e}"));
                                }
                            }
                        }
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        close_requested = true;
                    }
                });
            });

        if close_requested {
            open = false;
        }
        self.new_unit_open = open;
    }

    fn render_new_item_window(&mut self, ctx: &egui::Context) {
        if !self.new_item_open {
            return;
        }
        let mut open = self.new_item_open;
        let mut close_requested = false;

        egui::Window::new(statics::EN_WINDOW_NEW_ITEM)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("new_item_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(statics::EN_LABEL_NAME);
                        ui.text_edit_singleline(&mut self.new_item_name);
                        ui.end_row();

                        ui.label(statics::EN_LABEL_GENERATE_ID);
                        ui.checkbox(&mut self.new_item_generate, "");
                        ui.end_row();

                        ui.label(statics::EN_LABEL_ID);
                        ui.add_enabled(
                            !self.new_item_generate,
                            egui::TextEdit::singleline(&mut self.new_item_id).desired_width(80.0),
                        );
                        ui.end_row();
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_CREATE).clicked() {
                        if self.new_item_name.trim().is_empty() {
                            self.last_error = Some(statics::EN_ERR_NAME_REQUIRED.to_string());
                        } else if !self.new_item_generate && self.new_item_id.trim().is_empty() {
                            self.last_error = Some(statics::EN_ERR_ID_REQUIRED.to_string());
                        } else {
                            let req = NewItem {
                                id: (!self.new_item_generate)
                                    .then(|| self.new_item_id.trim().to_string()),
                                name: self.new_item_name.trim().to_string(),
                            };
                            match self.store.create_item(&req) {
                                Ok(summary) => {
                                    self.tab = ObjectKind::Item;
                                    self.select_record(ObjectKind::Item, summary.id);
                                    self.status = SaveStatus::Unsaved;
                                    self.new_item_name.clear();
                                    self.new_item_id.clear();
                                    close_requested = true;
                                }
                                Err(e) => {
                                    self.last_error = Some(format!("Failed to create item: {e}"));
                                }
                            }
                        }
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        close_requested = true;
                    }
                });
            });

        if close_requested {
            open = false;
        }
        self.new_item_open = open;
    }

    fn render_options_window(&mut self, ctx: &egui::Context) {
        if !self.options_open {
            return;
        }
        let mut open = self.options_open;
        let mut close_requested = false;

        egui::Window::new(statics::EN_WINDOW_OPTIONS)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("options_grid")
                    .num_columns(3)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(statics::EN_LABEL_INPUT_DIR);
                        ui.add(
                            egui::TextEdit::singleline(&mut self.options_in_dir)
                                .desired_width(300.0),
                        );
                        if ui.button(statics::EN_BTN_BROWSE).clicked()
                            && let Some(dir) = rfd::FileDialog::new()
                                .set_directory(&self.config.in_dir)
                                .pick_folder()
                        {
                            self.options_in_dir = dir.display().to_string();
                        }
                        ui.end_row();

                        ui.label(statics::EN_LABEL_OUTPUT_DIR);
                        ui.add(
                            egui::TextEdit::singleline(&mut self.options_out_dir)
                                .desired_width(300.0),
                        );
                        if ui.button(statics::EN_BTN_BROWSE).clicked()
                            && let Some(dir) = rfd::FileDialog::new()
                                .set_directory(&self.config.out_dir)
                                .pick_folder()
                        {
                            self.options_out_dir = dir.display().to_string();
                        }
                        ui.end_row();
                    });

                ui.checkbox(
                    &mut self.config.is_regex_search,
                    statics::EN_LABEL_REGEX_SEARCH,
                );

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_APPLY).clicked() {
                        self.config.in_dir = PathBuf::from(self.options_in_dir.trim());
                        self.config.out_dir = PathBuf::from(self.options_out_dir.trim());
                        match self.config.save(&self.config_dir) {
                            Ok(()) => {
                                self.last_error = None;
                                close_requested = true;
                            }
                            Err(e) => {
                                self.last_error = Some(format!("Failed to save config: {e:#}"));
                            }
                        }
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        close_requested = true;
                    }
                });
            });

        if close_requested {
            open = false;
        }
        self.options_open = open;
    }

    fn render_about_window(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }
        let mut open = self.about_open;
        egui::Window::new(statics::EN_WINDOW_ABOUT)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading(statics::EN_ABOUT_HEADING);
                ui.label(format!(
                    "{} {}",
                    statics::EN_ABOUT_VERSION,
                    env!("CARGO_PKG_VERSION")
                ));
                ui.separator();
                ui.label(statics::EN_ABOUT_SHORTCUTS);
                ui.label(statics::EN_ABOUT_SHORTCUT_SAVE);
                ui.label(statics::EN_ABOUT_SHORTCUT_FIND);
                ui.separator();
                ui.hyperlink_to(
                    format!("{} @ {}", statics::EN_PROJECT_REPO, statics::GITHUB_URL),
                    statics::GITHUB_URL,
                );
            });
        self.about_open = open;
    }
}

impl eframe::App for SlkedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Shortcuts. Consuming stops egui text editors from also reacting.
        let mut do_save = false;
        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::CTRL, egui::Key::S) {
                do_save = true;
            }
            if i.consume_key(egui::Modifiers::CTRL, egui::Key::F) {
                self.focus_search = true;
            }
        });
        if do_save {
            self.save_to_file();
            do_save = false;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_SAVE).clicked() {
                    do_save = true;
                }
                if ui.button(statics::EN_BTN_NEW_UNIT).clicked() {
                    self.new_unit_open = true;
                }
                if ui.button(statics::EN_BTN_NEW_ITEM).clicked() {
                    self.new_item_open = true;
                }
                if ui.button(statics::EN_BTN_OPTIONS).clicked() {
                    self.options_open = true;
                    self.options_in_dir = self.config.in_dir.display().to_string();
                    self.options_out_dir = self.config.out_dir.display().to_string();
                }

                let mut locked = self.config.is_locked;
                if ui.checkbox(&mut locked, statics::EN_BTN_LOCK).changed() {
                    self.config.is_locked = locked;
                    if let Err(e) = self.config.save(&self.config_dir) {
                        self.last_error = Some(format!("Failed to save config: {e:#}"));
                    }
                }

                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }

                ui.separator();
                ui.label(self.status.label());
            });
        });
        if do_save {
            self.save_to_file();
        }

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        self.render_new_unit_window(ctx);
        self.render_new_item_window(ctx);
        self.render_options_window(ctx);
        self.render_about_window(ctx);

        // Bottom status bar first so it spans the full window width.
        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for kind in [ObjectKind::Unit, ObjectKind::Item, ObjectKind::Ability] {
                    ui.label(format!(
                        "{}: {}",
                        kind.label(),
                        self.store.summaries(kind).len()
                    ));
                    ui.separator();
                }
                ui.label(format!("in: {}", self.config.in_dir.display()));
                ui.separator();
                ui.label(format!("out: {}", self.config.out_dir.display()));
                if self.store.dirty() {
                    ui.separator();
                    ui.colored_label(egui::Color32::YELLOW, statics::EN_STATUS_UNSAVED);
                }
            });
        });

        egui::SidePanel::left("records_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                let before = self.tab;
                ui.horizontal(|ui| {
                    for kind in [ObjectKind::Unit, ObjectKind::Item, ObjectKind::Ability] {
                        ui.selectable_value(&mut self.tab, kind, kind.label());
                    }
                });
                ui.separator();
                if before != self.tab {
                    self.rebuild_form();
                }

                self.render_record_table(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let kind = self.tab;
            let Some(id) = self.state(kind).selected.clone() else {
                ui.label(statics::EN_SELECT_RECORD);
                return;
            };

            ui.horizontal(|ui| {
                ui.heading(format!("{}: {}", kind.label(), id));
                ui.separator();
                if ui.button(statics::EN_BTN_REMOVE).clicked() {
                    self.remove_selected();
                }
                if kind == ObjectKind::Unit
                    && ui.button(statics::EN_BTN_SUGGEST_TOOLTIP).clicked()
                {
                    self.suggest_tooltip();
                }
            });
            ui.separator();

            if self.state(kind).selected.is_none() {
                return;
            }

            let sch = schema::schema_for(kind);
            let locked = self.config.is_locked;
            let mut pending: Vec<(String, String)> = Vec::new();

            ui.push_id("form_scroll", |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.columns(2, |columns| {
                            Self::render_form_sections(
                                &mut columns[0],
                                sch,
                                &mut self.form,
                                locked,
                                &self.disabled_fields,
                                &mut pending,
                            );
                            if sch.has_level_data {
                                Self::render_level_rows(
                                    &mut columns[0],
                                    &mut self.form,
                                    &mut pending,
                                );
                            }

                            // Live tooltip preview, recomputed every frame.
                            let preview_ui = &mut columns[1];
                            preview_ui.heading(statics::EN_HEADING_PREVIEW);
                            preview_ui.separator();
                            let text = self
                                .form
                                .get(statics::FK_UBERTIP)
                                .cloned()
                                .unwrap_or_default();
                            let job = Self::markup_layout_job(
                                &text,
                                preview_ui.visuals().text_color(),
                            );
                            preview_ui.label(job);
                        });
                    });
            });

            let mut levels_changed = false;
            for (field, wire) in pending {
                if field == statics::FK_LEVELS {
                    levels_changed = true;
                }
                self.apply_field_edit(&field, &wire);
            }
            if levels_changed {
                // New level rows come from the record, not stale buffers.
                let keep: Vec<(String, String)> = self
                    .form
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                self.rebuild_form();
                for (k, v) in keep {
                    self.form.entry(k).or_insert(v);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{KindState, SlkedApp};
    use crate::record::{SortKey, SortOrder};
    use eframe::egui;

    #[test]
    fn cycling_one_sort_column_resets_the_other() {
        let mut state = KindState::default();
        state.cycle_sort(SortKey::Name);
        assert_eq!(state.name_order, SortOrder::Ascending);

        state.cycle_sort(SortKey::Id);
        assert_eq!(state.id_order, SortOrder::Ascending);
        assert_eq!(state.name_order, SortOrder::Unsorted);

        state.cycle_sort(SortKey::Id);
        assert_eq!(state.id_order, SortOrder::Descending);
    }

    #[test]
    fn hidden_fields_only_apply_while_locked() {
        let disabled = vec!["Blend".to_string()];
        assert!(SlkedApp::field_hidden(true, &disabled, "Blend"));
        assert!(!SlkedApp::field_hidden(false, &disabled, "Blend"));
        assert!(!SlkedApp::field_hidden(true, &disabled, "Name"));
    }

    #[test]
    fn markup_layout_job_colors_span_bodies() {
        let job = SlkedApp::markup_layout_job(
            "plain |cffffcc00Gold|r tail",
            egui::Color32::WHITE,
        );
        assert_eq!(job.text, "plain Gold tail");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(
            job.sections[1].format.color,
            egui::Color32::from_rgba_unmultiplied(0xFF, 0xCC, 0x00, 0xFF)
        );
        assert_eq!(job.sections[0].format.color, egui::Color32::WHITE);
    }
}
