//! Declarative field schema for the detail forms.
//!
//! Instead of deriving bindings from widget identifier strings, every record
//! kind carries an explicit table: field key -> label, widget kind, options.
//! The save-time business rules live here too, as data: a default table
//! (always-written filler columns vs. fill-if-empty data columns), the id
//! mirror list for the per-table id columns, and the new-record templates.

use crate::record::{ObjectKind, Record, quote_wire_value};
use crate::statics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Text,
    MultiLine,
    Select,
    Check,
    MultiCheck,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: WidgetKind,
    pub options: &'static [&'static str],
}

impl FieldSpec {
    const fn text(key: &'static str, label: &'static str) -> FieldSpec {
        FieldSpec {
            key,
            label,
            kind: WidgetKind::Text,
            options: &[],
        }
    }

    const fn multiline(key: &'static str, label: &'static str) -> FieldSpec {
        FieldSpec {
            key,
            label,
            kind: WidgetKind::MultiLine,
            options: &[],
        }
    }

    const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> FieldSpec {
        FieldSpec {
            key,
            label,
            kind: WidgetKind::Select,
            options,
        }
    }

    const fn check(key: &'static str, label: &'static str) -> FieldSpec {
        FieldSpec {
            key,
            label,
            kind: WidgetKind::Check,
            options: &[],
        }
    }

    const fn multi_check(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> FieldSpec {
        FieldSpec {
            key,
            label,
            kind: WidgetKind::MultiCheck,
            options,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    pub id_field: &'static str,
    /// Per-table id columns kept in sync with the record id on save.
    pub id_mirrors: &'static [&'static str],
    pub sections: &'static [Section],
    /// Whether the form appends the per-level ability rows.
    pub has_level_data: bool,
}

pub fn schema_for(kind: ObjectKind) -> &'static ObjectSchema {
    match kind {
        ObjectKind::Unit => &UNIT_SCHEMA,
        ObjectKind::Item => &ITEM_SCHEMA,
        ObjectKind::Ability => &ABILITY_SCHEMA,
    }
}

pub const UNIT_ID_MIRRORS: &[&str] = &["UnitBalanceID", "UnitUIID", "UnitWeapID", "UnitAbilID"];

pub const UNIT_SCHEMA: ObjectSchema = ObjectSchema {
    id_field: statics::FK_UNIT_ID,
    id_mirrors: UNIT_ID_MIRRORS,
    sections: &[
        Section {
            title: "Identity",
            fields: &[
                FieldSpec::text("UnitID", "ID"),
                FieldSpec::text("Name", "Name"),
                FieldSpec::text("EditorSuffix", "Editor Suffix"),
                FieldSpec::text("Hotkey", "Hotkey"),
                FieldSpec::text("Tip", "Tooltip"),
                FieldSpec::multiline("Ubertip", "Tooltip - Extended"),
                FieldSpec::select("Race", "Race", statics::RACES),
            ],
        },
        Section {
            title: "Art",
            fields: &[
                FieldSpec::text("Art", "Icon"),
                FieldSpec::text("ButtonposX", "Button Position X"),
                FieldSpec::text("ButtonposY", "Button Position Y"),
                FieldSpec::text("File", "Model File"),
                FieldSpec::text("UnitSound", "Sound Set"),
                FieldSpec::text("Scale", "Selection Scale"),
                FieldSpec::text("ScaleBull", "Scaling Value"),
                FieldSpec::text("ModelScale", "Model Scale"),
                FieldSpec::text("Red", "Tint Red"),
                FieldSpec::text("Green", "Tint Green"),
                FieldSpec::text("Blue", "Tint Blue"),
                FieldSpec::text("TeamColor", "Team Color"),
                FieldSpec::text("UnitShadow", "Unit Shadow"),
                FieldSpec::text("BuildingShadow", "Building Shadow"),
                FieldSpec::text("UberSplat", "Ground Texture"),
                FieldSpec::check("HideOnMinimap", "Hide Minimap Display"),
                FieldSpec::text("Blend", "Blend Time"),
                FieldSpec::text("Run", "Run Speed"),
                FieldSpec::text("Walk", "Walk Speed"),
                FieldSpec::text("MaxPitch", "Max Pitch"),
                FieldSpec::text("MaxRoll", "Max Roll"),
                FieldSpec::text("SelZ", "Selection Circle Height"),
                FieldSpec::check("ShadowOnWater", "Shadow On Water"),
                FieldSpec::check("SelCircOnWater", "Selection Circle On Water"),
                FieldSpec::text("OccH", "Occlusion Height"),
            ],
        },
        Section {
            title: "Stats",
            fields: &[
                FieldSpec::text("HP", "Hit Points"),
                FieldSpec::text("RegenHP", "Hit Point Regeneration"),
                FieldSpec::select("RegenType", "Regeneration Type", statics::REGEN_TYPES),
                FieldSpec::text("ManaN", "Mana"),
                FieldSpec::text("Mana0", "Initial Mana"),
                FieldSpec::text("Def", "Defense Base"),
                FieldSpec::text("DefUp", "Defense Upgrade Bonus"),
                FieldSpec::select("DefType", "Defense Type", statics::DEFENSE_TYPES),
                FieldSpec::check("Isbldg", "Is a Building"),
                FieldSpec::text("Level", "Level"),
                FieldSpec::text("Goldcost", "Gold Cost"),
                FieldSpec::text("Lumbercost", "Lumber Cost"),
                FieldSpec::text("GoldRep", "Gold Repair Cost"),
                FieldSpec::text("LumberRep", "Lumber Repair Cost"),
                FieldSpec::text("Fused", "Food Cost"),
                FieldSpec::text("Fmade", "Food Produced"),
                FieldSpec::text("Bldtm", "Build Time"),
                FieldSpec::text("Reptm", "Repair Time"),
                FieldSpec::text("Sight", "Sight Radius - Day"),
                FieldSpec::text("Nsight", "Sight Radius - Night"),
                FieldSpec::text("Points", "Point Value"),
                FieldSpec::text("StockMax", "Stock Maximum"),
                FieldSpec::text("StockRegen", "Stock Replenish Interval"),
                FieldSpec::text("StockStart", "Stock Start Delay"),
                FieldSpec::text("STR", "Strength"),
                FieldSpec::text("AGI", "Agility"),
                FieldSpec::text("INT", "Intelligence"),
                FieldSpec::text("STRplus", "Strength Per Level"),
                FieldSpec::text("AGIplus", "Agility Per Level"),
                FieldSpec::text("INTplus", "Intelligence Per Level"),
                FieldSpec::text("Primary", "Primary Attribute"),
            ],
        },
        Section {
            title: "Movement",
            fields: &[
                FieldSpec::select("Movetp", "Movement Type", statics::MOVE_TYPES),
                FieldSpec::text("Spd", "Movement Speed"),
                FieldSpec::text("MinSpd", "Movement Speed Minimum"),
                FieldSpec::text("MaxSpd", "Movement Speed Maximum"),
                FieldSpec::text("MoveHeight", "Flying Height"),
                FieldSpec::text("MoveFloor", "Minimum Flying Height"),
                FieldSpec::text("TurnRate", "Turn Rate"),
                FieldSpec::text("Collision", "Collision Size"),
            ],
        },
        Section {
            title: "Techtree",
            fields: &[
                FieldSpec::text("AbilList", "Abilities"),
                FieldSpec::text("Builds", "Structures Built"),
                FieldSpec::text("Trains", "Units Trained"),
                FieldSpec::text("Upgrade", "Upgrades To"),
                FieldSpec::text("Requires", "Requirements"),
                FieldSpec::text("Upgrades", "Upgrades Used"),
                FieldSpec::text("Sellunits", "Units Sold"),
                FieldSpec::text("Sellitems", "Items Sold"),
            ],
        },
        Section {
            title: "Combat - Weapon One",
            fields: &[
                FieldSpec::select("WeapsOn", "Attacks Enabled", statics::WEAPONS_ON_MODES),
                FieldSpec::text("Acquire", "Acquisition Range"),
                FieldSpec::select("AtkType1", "Attack Type", statics::ATTACK_TYPES),
                FieldSpec::select("WeapTp1", "Weapon Type", statics::WEAPON_TYPES),
                FieldSpec::text("Cool1", "Cooldown"),
                FieldSpec::text("Dmgplus1", "Damage Base"),
                FieldSpec::text("Dice1", "Damage Number of Dice"),
                FieldSpec::text("Sides1", "Damage Sides Per Die"),
                FieldSpec::text("RangeN1", "Range"),
                FieldSpec::text("RngBuff1", "Range Motion Buffer"),
                FieldSpec::multi_check("Targs1", "Targets Allowed", statics::TARGET_FLAGS),
                FieldSpec::check("ShowUI1", "Show In UI"),
                FieldSpec::text("Dmgpt1", "Damage Point"),
                FieldSpec::text("BackSw1", "Backswing Point"),
                FieldSpec::text("Farea1", "Area of Effect - Full"),
                FieldSpec::text("Harea1", "Area of Effect - Medium"),
                FieldSpec::text("Qarea1", "Area of Effect - Small"),
                FieldSpec::text("Hfact1", "Damage Factor - Medium"),
                FieldSpec::text("Qfact1", "Damage Factor - Small"),
                FieldSpec::text("DamageLoss1", "Damage Loss Factor"),
                FieldSpec::multi_check("SplashTargs1", "Area Targets", statics::TARGET_FLAGS),
                FieldSpec::text("Missileart", "Projectile Art"),
                FieldSpec::text("Missilearc", "Projectile Arc"),
                FieldSpec::text("Missilespeed", "Projectile Speed"),
            ],
        },
        Section {
            title: "Combat - Weapon Two",
            fields: &[
                FieldSpec::select("AtkType2", "Attack Type", statics::ATTACK_TYPES),
                FieldSpec::select("WeapTp2", "Weapon Type", statics::WEAPON_TYPES),
                FieldSpec::text("Cool2", "Cooldown"),
                FieldSpec::text("Dmgplus2", "Damage Base"),
                FieldSpec::text("Dice2", "Damage Number of Dice"),
                FieldSpec::text("Sides2", "Damage Sides Per Die"),
                FieldSpec::text("RangeN2", "Range"),
                FieldSpec::text("RngBuff2", "Range Motion Buffer"),
                FieldSpec::multi_check("Targs2", "Targets Allowed", statics::TARGET_FLAGS),
                FieldSpec::check("ShowUI2", "Show In UI"),
                FieldSpec::text("Dmgpt2", "Damage Point"),
                FieldSpec::text("BackSw2", "Backswing Point"),
                FieldSpec::text("Farea2", "Area of Effect - Full"),
                FieldSpec::text("Harea2", "Area of Effect - Medium"),
                FieldSpec::text("Qarea2", "Area of Effect - Small"),
                FieldSpec::text("Hfact2", "Damage Factor - Medium"),
                FieldSpec::text("Qfact2", "Damage Factor - Small"),
                FieldSpec::text("DamageLoss2", "Damage Loss Factor"),
                FieldSpec::multi_check("SplashTargs2", "Area Targets", statics::TARGET_FLAGS),
            ],
        },
        Section {
            title: "Other",
            fields: &[
                FieldSpec::select("DeathType", "Death Type", statics::DEATH_TYPES),
                FieldSpec::text("Death", "Death Time"),
                FieldSpec::text("CargoSize", "Cargo Size"),
                FieldSpec::multi_check("TargType", "Targeted As", statics::TARGET_FLAGS),
                FieldSpec::multi_check("Type", "Classification", statics::CLASSIFICATION_FLAGS),
                FieldSpec::check("CanSleep", "Can Sleep"),
                FieldSpec::check("CanFlee", "Can Flee"),
                FieldSpec::check("CanBuildOn", "Can Build On"),
                FieldSpec::check("IsBuildOn", "Can Be Built On"),
                FieldSpec::check("DropItems", "Drops Items Upon Death"),
                FieldSpec::check("Campaign", "Is Campaign"),
                FieldSpec::text("Prio", "Display Priority"),
                FieldSpec::text("Threat", "Threat"),
                FieldSpec::text("Formation", "Formation Rank"),
                FieldSpec::text("PropWin", "Proximity Window"),
                FieldSpec::text("OrientInterp", "Orientation Interpolation"),
                FieldSpec::text("ElevPts", "Elevation Sample Points"),
                FieldSpec::text("ElevRad", "Elevation Sample Radius"),
                FieldSpec::text("FogRad", "Fog of War Sample Radius"),
                FieldSpec::text("PathTex", "Pathing Texture"),
                FieldSpec::text("PreventPlace", "Placement Prevented By"),
                FieldSpec::text("RequirePlace", "Placement Requires"),
                FieldSpec::text("RequireWaterRadius", "Placement Requires Water Radius"),
            ],
        },
    ],
    has_level_data: false,
};

pub const ITEM_SCHEMA: ObjectSchema = ObjectSchema {
    id_field: statics::FK_ITEM_ID,
    id_mirrors: &[],
    sections: &[
        Section {
            title: "Identity",
            fields: &[
                FieldSpec::text("ItemID", "ID"),
                FieldSpec::text("Name", "Name"),
                FieldSpec::text("EditorSuffix", "Editor Suffix"),
                FieldSpec::text("Hotkey", "Hotkey"),
                FieldSpec::text("Tip", "Tooltip"),
                FieldSpec::multiline("Ubertip", "Tooltip - Extended"),
                FieldSpec::text("Description", "Description"),
                FieldSpec::select("Class", "Class", statics::ITEM_CLASSES),
            ],
        },
        Section {
            title: "Art",
            fields: &[
                FieldSpec::text("Art", "Icon"),
                FieldSpec::text("ButtonposX", "Button Position X"),
                FieldSpec::text("ButtonposY", "Button Position Y"),
                FieldSpec::text("File", "Model File"),
                FieldSpec::text("Scale", "Scaling Value"),
                FieldSpec::text("SelSize", "Selection Size"),
                FieldSpec::text("ColorR", "Tint Red"),
                FieldSpec::text("ColorG", "Tint Green"),
                FieldSpec::text("ColorB", "Tint Blue"),
                FieldSpec::text("Armor", "Armor Sound"),
            ],
        },
        Section {
            title: "Stats",
            fields: &[
                FieldSpec::text("Goldcost", "Gold Cost"),
                FieldSpec::text("Lumbercost", "Lumber Cost"),
                FieldSpec::text("Level", "Level"),
                FieldSpec::text("OldLevel", "Level (Unclassified)"),
                FieldSpec::text("HP", "Hit Points"),
                FieldSpec::text("Uses", "Charges"),
                FieldSpec::text("StockMax", "Stock Maximum"),
                FieldSpec::text("StockRegen", "Stock Replenish Interval"),
                FieldSpec::text("Prio", "Priority"),
            ],
        },
        Section {
            title: "Behavior",
            fields: &[
                FieldSpec::text("AbilList", "Abilities"),
                FieldSpec::text("CooldownID", "Cooldown Group"),
                FieldSpec::check("Droppable", "Droppable"),
                FieldSpec::check("Sellable", "Sellable"),
                FieldSpec::check("Pawnable", "Pawnable"),
                FieldSpec::check("Perishable", "Perishable"),
                FieldSpec::check("PickRandom", "Include As Random Choice"),
                FieldSpec::check("Drop", "Dropped When Carrier Dies"),
                FieldSpec::check("IgnoreCD", "Ignore Cooldown"),
                FieldSpec::check("Morph", "Morph"),
            ],
        },
    ],
    has_level_data: false,
};

pub const ABILITY_SCHEMA: ObjectSchema = ObjectSchema {
    id_field: statics::FK_ABILITY_ID,
    id_mirrors: &[],
    sections: &[
        Section {
            title: "Identity",
            fields: &[
                FieldSpec::text("Alias", "ID"),
                FieldSpec::text("Code", "Base Ability"),
                FieldSpec::text("Name", "Name"),
                FieldSpec::text("EditorSuffix", "Editor Suffix"),
                FieldSpec::text("Hotkey", "Hotkey"),
                FieldSpec::text("Tip", "Tooltip"),
                FieldSpec::multiline("Ubertip", "Tooltip - Extended"),
            ],
        },
        Section {
            title: "Art",
            fields: &[
                FieldSpec::text("Art", "Icon"),
                FieldSpec::text("Unart", "Icon - Turn Off"),
                FieldSpec::text("ButtonposX", "Button Position X"),
                FieldSpec::text("ButtonposY", "Button Position Y"),
                FieldSpec::text("Missileart", "Projectile Art"),
                FieldSpec::text("Missilearc", "Projectile Arc"),
                FieldSpec::text("Missilespeed", "Projectile Speed"),
            ],
        },
        Section {
            title: "Stats",
            fields: &[
                FieldSpec::text("Levels", "Levels"),
                FieldSpec::select("Race", "Race", statics::RACES),
                FieldSpec::check("Hero", "Hero Ability"),
                FieldSpec::check("Item", "Item Ability"),
                FieldSpec::text("Reqlevel", "Required Level"),
                FieldSpec::text("Checkdep", "Check Tech Tree Dependencies"),
                FieldSpec::text("Priority", "Learn Priority"),
            ],
        },
    ],
    has_level_data: true,
};

/// Widget input normalization, matching the field-level save rules:
/// raw newlines become line-break tokens, then the quoting rule applies.
pub fn normalize_text_input(raw: &str) -> String {
    quote_wire_value(&raw.replace('\n', statics::MARKUP_LINE_BREAK))
}

pub fn check_value(checked: bool) -> &'static str {
    if checked { "1" } else { "0" }
}

/// Joins multi-check selections into the quoted comma list the storage
/// expects; an empty selection collapses to the quoted underscore marker.
pub fn multi_check_value(selected: &[&str]) -> String {
    if selected.is_empty() {
        statics::WIRE_UNDERSCORE.to_string()
    } else {
        format!("\"{}\"", selected.join(","))
    }
}

/// Which of `options` a stored comma list has enabled (case-insensitive).
pub fn multi_check_selected(
    value: &str,
    options: &'static [&'static str],
) -> Vec<&'static str> {
    let enabled: Vec<String> = crate::record::trim_quotes(value)
        .split(',')
        .map(|v| v.trim().to_lowercase())
        .collect();
    options
        .iter()
        .copied()
        .filter(|opt| enabled.iter().any(|v| v == &opt.to_lowercase()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Filler/sort/meta columns written on every save.
    Always,
    /// Data-bearing columns only filled when the form left them empty.
    IfEmpty,
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultRule {
    pub field: &'static str,
    pub value: &'static str,
    pub fill: Fill,
}

const fn always(field: &'static str, value: &'static str) -> DefaultRule {
    DefaultRule {
        field,
        value,
        fill: Fill::Always,
    }
}

const fn if_empty(field: &'static str, value: &'static str) -> DefaultRule {
    DefaultRule {
        field,
        value,
        fill: Fill::IfEmpty,
    }
}

/// Save-time defaults for unit records, one rule per table column the form
/// does not necessarily populate.
pub const UNIT_SAVE_DEFAULTS: &[DefaultRule] = &[
    // unitabilities
    always("SortAbil", "\"z3\""),
    always("AbilTest", "\"-\""),
    // unitbalance
    always("SortBalance", "\"z3\""),
    always("Sort2", "\"zzm\""),
    always("Nbrandom", "\"_\""),
    always("InBeta", "0"),
    if_empty("Type", "\"_\""),
    if_empty("Def", "\"0\""),
    if_empty("STR", "\"-\""),
    if_empty("AGI", "\"-\""),
    if_empty("INT", "\"-\""),
    if_empty("Primary", "\"_\""),
    if_empty("Upgrades", "\"_\""),
    // unitdata
    always("Sort", "\"z3\""),
    always("FatLOS", "0"),
    always("BuffType", "\"_\""),
    always("BuffRadius", "\"-\""),
    always("NameCount", "\"-\""),
    always("Version", "1"),
    if_empty("Threat", "1"),
    if_empty("Valid", "1"),
    if_empty("TargType", "\"_\""),
    if_empty("RequireWaterRadius", "0"),
    // unitui
    always("SortUI", "\"z3\""),
    always("TilesetSpecific", "0"),
    if_empty("Name", "-"),
    if_empty("Campaign", "1"),
    if_empty("InEditor", "1"),
    if_empty("HiddenInEditor", "0"),
    if_empty("HostilePal", "0"),
    if_empty("DropItems", "1"),
    if_empty("NbmmIcon", "1"),
    if_empty("UseClickHelper", "0"),
    if_empty("HideHeroBar", "0"),
    if_empty("HideHeroMinimap", "0"),
    if_empty("HideHeroDeathMsg", "0"),
    if_empty("Weap1", "\"_\""),
    if_empty("Weap2", "\"_\""),
    // unitweapons
    always("SortWeap", "\"n2\""),
    always("RngTst", "\"-\""),
    always("RngTst2", "\"-\""),
    always("Mincool1", "\"-\""),
    always("Mindmg1", "0"),
    always("Mindmg2", "0"),
    always("Avgdmg1", "0"),
    always("Avgdmg2", "0"),
    always("Maxdmg1", "0"),
    always("Maxdmg2", "0"),
    if_empty("Targs1", "\"-\""),
    if_empty("Targs2", "\"-\""),
    if_empty("DmgUp1", "\"-\""),
    if_empty("DmgUp2", "\"-\""),
    if_empty("Hfact1", "\"-\""),
    if_empty("Hfact2", "\"-\""),
    if_empty("Qfact1", "\"-\""),
    if_empty("Qfact2", "\"-\""),
    if_empty("SplashTargs1", "\"_\""),
    if_empty("SplashTargs2", "\"_\""),
    if_empty("DmgUpg", "\"-\""),
];

/// Columns mirroring another column's value at save time.
pub const UNIT_VALUE_MIRRORS: &[(&str, &str)] = &[
    (statics::FK_REAL_HP, statics::FK_HP),
    (statics::FK_REAL_DEF, statics::FK_DEF),
];

/// Re-applies the quoting rule to every stored field.
pub fn apply_quote_pass(record: &mut Record) {
    let keys: Vec<String> = record.iter().map(|(k, _)| k.to_string()).collect();
    for key in keys {
        let value = record
            .get(&key)
            .map(str::to_string)
            .expect("key collected above");
        record.set_raw(&key, &quote_wire_value(&value));
    }
}

/// Save-time finalization for unit records: mirror the id into the
/// per-table id columns, apply the quoting rule everywhere, then fill the
/// declarative defaults and value mirrors.
pub fn finalize_unit(record: &mut Record) {
    let id = record.display(statics::FK_UNIT_ID).to_string();
    if !id.is_empty() {
        let quoted = format!("\"{id}\"");
        record.set_raw(statics::FK_UNIT_ID, &quoted);
        for mirror in UNIT_ID_MIRRORS {
            record.set_raw(mirror, &quoted);
        }
    }

    apply_quote_pass(record);

    for rule in UNIT_SAVE_DEFAULTS {
        if rule.fill == Fill::IfEmpty && !record.contains(rule.field) {
            record.set_raw(rule.field, rule.value);
        }
    }

    for (dst, src) in UNIT_VALUE_MIRRORS {
        if let Some(v) = record.get(src).map(str::to_string) {
            record.set_raw(dst, &v);
        }
    }

    for rule in UNIT_SAVE_DEFAULTS {
        if rule.fill == Fill::Always {
            record.set_raw(rule.field, rule.value);
        }
    }
}

/// Kind-dispatching finalization. Items and abilities only re-quote; the
/// default table is a unit concern.
pub fn finalize_record(kind: ObjectKind, record: &mut Record) {
    match kind {
        ObjectKind::Unit => finalize_unit(record),
        ObjectKind::Item | ObjectKind::Ability => apply_quote_pass(record),
    }
}

/// Starting profile picked in the New Unit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitProfile {
    #[default]
    Unit,
    Building,
    Hero,
}

impl UnitProfile {
    pub fn label(self) -> &'static str {
        match self {
            UnitProfile::Unit => statics::EN_UNIT_TYPE_UNIT,
            UnitProfile::Building => statics::EN_UNIT_TYPE_BUILDING,
            UnitProfile::Hero => statics::EN_UNIT_TYPE_HERO,
        }
    }
}

/// Weapon profile picked in the New Unit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackProfile {
    None,
    #[default]
    Melee,
    Ranged,
    RangedSplash,
}

impl AttackProfile {
    pub fn label(self) -> &'static str {
        match self {
            AttackProfile::None => "None",
            AttackProfile::Melee => "Melee",
            AttackProfile::Ranged => "Ranged",
            AttackProfile::RangedSplash => "Ranged (Splash)",
        }
    }
}

pub const UNIT_BODY_TEMPLATE: &[(&str, &str)] = &[
    ("Art", "\"ReplaceableTextures\\CommandButtons\\BTNFootman.blp\""),
    ("ButtonposX", "0"),
    ("ButtonposY", "0"),
    ("Buttonpos", "\"0,0\""),
    ("Level", "2"),
    ("Goldcost", "135"),
    ("Lumbercost", "0"),
    ("GoldRep", "135"),
    ("LumberRep", "0"),
    ("Fused", "2"),
    ("Fmade", "\"-\""),
    ("HP", "420"),
    ("RegenHP", "0.25"),
    ("RegenType", "\"always\""),
    ("ManaN", "\"-\""),
    ("Mana0", "\"-\""),
    ("Def", "2"),
    ("DefUp", "2"),
    ("DefType", "\"large\""),
    ("Spd", "270"),
    ("MinSpd", "0"),
    ("MaxSpd", "0"),
    ("Bldtm", "20"),
    ("Reptm", "20"),
    ("Sight", "1400"),
    ("Nsight", "800"),
    ("Isbldg", "0"),
    ("Collision", "31"),
    ("Race", "\"human\""),
    ("Prio", "6"),
    ("DeathType", "3"),
    ("Death", "3.04"),
    ("CanSleep", "0"),
    ("CargoSize", "1"),
    ("Movetp", "\"foot\""),
    ("MoveHeight", "0"),
    ("MoveFloor", "0"),
    ("TurnRate", "0.6"),
    ("TargType", "\"ground\""),
    ("PathTex", "\"_\""),
    ("Points", "100"),
    ("CanFlee", "1"),
    ("File", "\"units\\human\\Footman\\Footman\""),
    ("UnitSound", "\"Footman\""),
    ("Scale", "1"),
    ("ScaleBull", "1"),
    ("ModelScale", "1"),
    ("Red", "255"),
    ("Green", "255"),
    ("Blue", "255"),
    ("UnitShadow", "\"Shadow\""),
    ("Campaign", "0"),
    ("AbilList", "\"Adef,Aihn\""),
];

pub const BUILDING_BODY_TEMPLATE: &[(&str, &str)] = &[
    ("Art", "\"ReplaceableTextures\\CommandButtons\\BTNFarm.blp\""),
    ("ButtonposX", "0"),
    ("ButtonposY", "1"),
    ("Buttonpos", "\"0,1\""),
    ("Level", "\"-\""),
    ("Type", "\"Mechanical\""),
    ("Goldcost", "80"),
    ("Lumbercost", "20"),
    ("GoldRep", "80"),
    ("LumberRep", "20"),
    ("Fused", "\"-\""),
    ("Fmade", "6"),
    ("HP", "500"),
    ("RegenHP", "\"-\""),
    ("RegenType", "\"none\""),
    ("Def", "5"),
    ("DefUp", "1"),
    ("DefType", "\"fort\""),
    ("Spd", "\"-\""),
    ("Bldtm", "35"),
    ("Reptm", "35"),
    ("Sight", "900"),
    ("Nsight", "600"),
    ("Isbldg", "1"),
    ("PreventPlace", "\"unbuildable\""),
    ("Collision", "72"),
    ("Race", "\"human\""),
    ("Prio", "1"),
    ("DeathType", "2"),
    ("Death", "2.34"),
    ("CanSleep", "0"),
    ("CargoSize", "\"-\""),
    ("Movetp", "\"_\""),
    ("TurnRate", "\"-\""),
    ("TargType", "\"structure\""),
    ("PathTex", "\"PathTextures\\4x4SimpleSolid.tga\""),
    ("Points", "100"),
    ("CanFlee", "1"),
    ("File", "\"buildings\\human\\Farm\\Farm\""),
    ("UnitSound", "\"Farm\""),
    ("Scale", "2.5"),
    ("ScaleBull", "1"),
    ("ModelScale", "1"),
    ("UberSplat", "\"HSMA\""),
    ("UnitShadow", "\"_\""),
    ("BuildingShadow", "\"ShadowHouse\""),
    ("AbilList", "\"Abds\""),
];

/// Applied on top of the unit body for hero records.
pub const HERO_OVERLAY_TEMPLATE: &[(&str, &str)] = &[
    ("Level", "1"),
    ("Goldcost", "425"),
    ("Lumbercost", "100"),
    ("Fused", "5"),
    ("HP", "100"),
    ("ManaN", "0"),
    ("RegenMana", "0.01"),
    ("Def", "1"),
    ("DefType", "\"hero\""),
    ("STR", "22"),
    ("AGI", "13"),
    ("INT", "14"),
    ("STRplus", "2.7"),
    ("AGIplus", "1.5"),
    ("INTplus", "1.8"),
    ("Primary", "\"STR\""),
    ("Points", "200"),
    ("DropItems", "1"),
];

pub const ATTACK_NONE_TEMPLATE: &[(&str, &str)] = &[
    ("WeapsOn", "0"),
    ("Acquire", "\"-\""),
    ("WeapType1", "\"_\""),
    ("Targs1", "\"_\""),
    ("ShowUI1", "1"),
    ("RangeN1", "\"-\""),
    ("AtkType1", "\"normal\""),
    ("WeapTp1", "\"-\""),
    ("Cool1", "\"-\""),
    ("Dice1", "\"-\""),
    ("Sides1", "\"-\""),
    ("Dmgplus1", "\"-\""),
    ("AtkType2", "\"normal\""),
    ("WeapTp2", "\"_\""),
    ("Targs2", "\"_\""),
];

pub const ATTACK_MELEE_TEMPLATE: &[(&str, &str)] = &[
    ("WeapsOn", "1"),
    ("Acquire", "500"),
    ("WeapType1", "\"MetalMediumSlice\""),
    ("Targs1", "\"ground,structure,debris,item,ward\""),
    ("ShowUI1", "1"),
    ("RangeN1", "90"),
    ("RngBuff1", "250"),
    ("AtkType1", "\"normal\""),
    ("WeapTp1", "\"normal\""),
    ("Cool1", "1.35"),
    ("Dice1", "1"),
    ("Sides1", "2"),
    ("Dmgplus1", "11"),
    ("Dmgpt1", "0.5"),
    ("BackSw1", "0.5"),
    ("TargCount1", "1"),
    ("AtkType2", "\"normal\""),
    ("WeapTp2", "\"_\""),
    ("Targs2", "\"_\""),
];

pub const ATTACK_RANGED_TEMPLATE: &[(&str, &str)] = &[
    ("WeapsOn", "1"),
    ("Acquire", "700"),
    (
        "Missileart",
        "\"Abilities\\Weapons\\GuardTowerMissile\\GuardTowerMissile.mdl\"",
    ),
    ("Missilearc", "0.15"),
    ("Missilespeed", "1800"),
    ("WeapType1", "\"_\""),
    ("Targs1", "\"ground,structure,debris,air,item,ward\""),
    ("ShowUI1", "1"),
    ("RangeN1", "700"),
    ("RngBuff1", "250"),
    ("AtkType1", "\"pierce\""),
    ("WeapTp1", "\"missile\""),
    ("Cool1", "0.9"),
    ("Dice1", "1"),
    ("Sides1", "5"),
    ("Dmgplus1", "22"),
    ("Dmgpt1", "0.3"),
    ("BackSw1", "0.3"),
    ("TargCount1", "1"),
    ("AtkType2", "\"normal\""),
    ("WeapTp2", "\"_\""),
    ("Targs2", "\"_\""),
];

pub const ATTACK_SPLASH_TEMPLATE: &[(&str, &str)] = &[
    ("WeapsOn", "3"),
    ("Acquire", "800"),
    (
        "Missileart",
        "\"Abilities\\Weapons\\CannonTowerMissile\\CannonTowerMissile.mdl\"",
    ),
    ("Missilearc", "0.35"),
    ("Missilespeed", "700"),
    ("WeapType1", "\"_\""),
    ("Targs1", "\"ground,debris,tree,wall,ward,item\""),
    ("ShowUI1", "1"),
    ("RangeN1", "800"),
    ("RngBuff1", "250"),
    ("AtkType1", "\"siege\""),
    ("WeapTp1", "\"msplash\""),
    ("Cool1", "2.5"),
    ("Dice1", "1"),
    ("Sides1", "22"),
    ("Dmgplus1", "89"),
    ("Dmgpt1", "0.3"),
    ("BackSw1", "0.3"),
    ("Farea1", "50"),
    ("Harea1", "100"),
    ("Qarea1", "125"),
    ("Hfact1", "0.5"),
    ("Qfact1", "0.1"),
    ("SplashTargs1", "\"ground,structure,debris,tree,wall,notself\""),
    ("TargCount1", "1"),
    ("AtkType2", "\"normal\""),
    ("WeapTp2", "\"_\""),
    ("Targs2", "\"_\""),
];

pub const ITEM_TEMPLATE: &[(&str, &str)] = &[
    ("AbilList", "\"Aret\""),
    ("ButtonposX", "0"),
    ("ButtonposY", "0"),
    ("Buttonpos", "\"0,0\""),
    (
        "Art",
        "\"ReplaceableTextures\\CommandButtons\\BTNTomeOfRetraining.blp\"",
    ),
    (
        "File",
        "\"Objects\\InventoryItems\\TreasureChest\\treasurechest.mdl\"",
    ),
    ("Scale", "1"),
    ("SelSize", "0"),
    ("ColorR", "255"),
    ("ColorG", "255"),
    ("ColorB", "255"),
    ("Armor", "\"Wood\""),
    ("Class", "\"Purchasable\""),
    ("CooldownID", "\"Aret\""),
    ("Goldcost", "300"),
    ("HP", "75"),
    ("Level", "3"),
    ("OldLevel", "0"),
    ("Uses", "1"),
    ("Droppable", "1"),
    ("Sellable", "1"),
    ("Pawnable", "1"),
    ("Perishable", "1"),
    ("PickRandom", "0"),
    ("Drop", "0"),
    ("IgnoreCD", "0"),
    ("Morph", "0"),
    ("Prio", "0"),
    ("StockMax", "1"),
    ("StockRegen", "440"),
];

pub fn apply_template(record: &mut Record, entries: &[(&str, &str)]) {
    for (field, value) in entries {
        record.set_raw(field, value);
    }
}

pub fn body_template(profile: UnitProfile) -> &'static [(&'static str, &'static str)] {
    match profile {
        UnitProfile::Unit | UnitProfile::Hero => UNIT_BODY_TEMPLATE,
        UnitProfile::Building => BUILDING_BODY_TEMPLATE,
    }
}

pub fn attack_template(profile: AttackProfile) -> &'static [(&'static str, &'static str)] {
    match profile {
        AttackProfile::None => ATTACK_NONE_TEMPLATE,
        AttackProfile::Melee => ATTACK_MELEE_TEMPLATE,
        AttackProfile::Ranged => ATTACK_RANGED_TEMPLATE,
        AttackProfile::RangedSplash => ATTACK_SPLASH_TEMPLATE,
    }
}
