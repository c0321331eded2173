// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// External links
pub const GITHUB_URL: &str = "https://github.com/slked/slked";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "SLKED: Object Data Editor";

pub const EN_BTN_SAVE: &str = "Save";
pub const EN_BTN_NEW_UNIT: &str = "New Unit...";
pub const EN_BTN_NEW_ITEM: &str = "New Item...";
pub const EN_BTN_OPTIONS: &str = "Options...";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_REMOVE: &str = "Remove";
pub const EN_BTN_GENERATE: &str = "Generate";
pub const EN_BTN_CREATE: &str = "Create";
pub const EN_BTN_CANCEL: &str = "Cancel";
pub const EN_BTN_APPLY: &str = "Apply";
pub const EN_BTN_CLEAR: &str = "Clear";
pub const EN_BTN_SUGGEST_TOOLTIP: &str = "Suggest";
pub const EN_BTN_LOCK: &str = "Lock";

pub const EN_TAB_UNITS: &str = "Units";
pub const EN_TAB_ITEMS: &str = "Items";
pub const EN_TAB_ABILITIES: &str = "Abilities";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_WINDOW_NEW_UNIT: &str = "New Unit";
pub const EN_WINDOW_NEW_ITEM: &str = "New Item";
pub const EN_WINDOW_OPTIONS: &str = "Options";

pub const EN_ABOUT_HEADING: &str = "SLKED: Object Data Editor";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_SHORTCUTS: &str = "Shortcuts:";
pub const EN_ABOUT_SHORTCUT_SAVE: &str = "- Ctrl+S: save to file";
pub const EN_ABOUT_SHORTCUT_FIND: &str = "- Ctrl+F: focus the search field";
pub const EN_PROJECT_REPO: &str = "GitHub Repo";

pub const EN_LABEL_SEARCH: &str = "Search:";
pub const EN_HINT_SEARCH: &str = "name, id or suffix";
pub const EN_LABEL_REGEX: &str = "Regex";
pub const EN_SEARCH_NO_MATCHES: &str = "No matches.";

// Small glyphs used in tables/headers.
pub const EN_GLYPH_SORT_ASC: &str = "^";
pub const EN_GLYPH_SORT_DESC: &str = "v";

pub const EN_COL_ID: &str = "ID";
pub const EN_COL_NAME: &str = "Name";

pub const EN_SELECT_RECORD: &str = "Select a record from the left.";
pub const EN_HEADING_PREVIEW: &str = "Preview";
pub const EN_HEADING_LEVELS: &str = "Level Data";

pub const EN_STATUS_SAVED: &str = "Saved";
pub const EN_STATUS_UNSAVED: &str = "Unsaved changes";
pub const EN_STATUS_SAVING: &str = "Saving...";

pub const EN_LABEL_NAME: &str = "Name:";
pub const EN_LABEL_ID: &str = "ID:";
pub const EN_LABEL_GENERATE_ID: &str = "Generate ID";
pub const EN_LABEL_UNIT_TYPE: &str = "Type:";
pub const EN_LABEL_ATTACK_TYPE: &str = "Attack type:";
pub const EN_UNIT_TYPE_UNIT: &str = "Unit";
pub const EN_UNIT_TYPE_BUILDING: &str = "Building";
pub const EN_UNIT_TYPE_HERO: &str = "Hero";

pub const EN_LABEL_INPUT_DIR: &str = "Input directory:";
pub const EN_LABEL_OUTPUT_DIR: &str = "Output directory:";
pub const EN_BTN_BROWSE: &str = "Browse...";
pub const EN_LABEL_REGEX_SEARCH: &str = "Regex search by default";

pub const EN_ERR_NAME_REQUIRED: &str = "A name is required";
pub const EN_ERR_ID_REQUIRED: &str = "An id is required unless one is generated";

pub const EN_EMPTY: &str = "";

// Markup conventions shared with the stored tooltip text.
pub const MARKUP_LINE_BREAK: &str = "|n";
pub const MARKUP_COLOR_END: &str = "|r";
pub const MARKUP_COLOR_GOLD: &str = "|cffffcc00";
pub const HTML_LINE_BREAK: &str = "<br>";

// Wire-value markers treated as "no value" by the table storage.
pub const WIRE_NULL_MARKERS: &[&str] = &["", "_", "\"_\"", "-", "\"-\""];
pub const WIRE_UNDERSCORE: &str = "\"_\"";
pub const WIRE_DASH: &str = "\"-\"";

// Configuration files (written next to the executable, like the classic tools).
pub const CONFIG_FILENAME: &str = "config.json";
pub const DISABLED_INPUTS_FILENAME: &str = "disabled-inputs.json";
pub const DEFAULT_DATA_DIR: &str = "./input";

// Record field keys referenced outside the schema tables (FK_ prefix).
pub const FK_UNIT_ID: &str = "UnitID";
pub const FK_ITEM_ID: &str = "ItemID";
pub const FK_ABILITY_ID: &str = "Alias";
pub const FK_NAME: &str = "Name";
pub const FK_EDITOR_SUFFIX: &str = "EditorSuffix";
pub const FK_TIP: &str = "Tip";
pub const FK_UBERTIP: &str = "Ubertip";
pub const FK_BUTTON_POS: &str = "Buttonpos";
pub const FK_BUTTON_POS_X: &str = "ButtonposX";
pub const FK_BUTTON_POS_Y: &str = "ButtonposY";
pub const FK_HP: &str = "HP";
pub const FK_REAL_HP: &str = "RealHP";
pub const FK_DEF: &str = "Def";
pub const FK_REAL_DEF: &str = "Realdef";
pub const FK_WEAPS_ON: &str = "WeapsOn";
pub const FK_LEVELS: &str = "Levels";
pub const FK_ATK_TYPE_1: &str = "AtkType1";

// Option lists shown by Select widgets, in wire form (quoted strings).
pub const RACES: &[&str] = &[
    "\"_\"",
    "\"commoner\"",
    "\"creeps\"",
    "\"critters\"",
    "\"demon\"",
    "\"human\"",
    "\"naga\"",
    "\"nightelf\"",
    "\"orc\"",
    "\"other\"",
    "\"unknown\"",
    "\"undead\"",
];

pub const MOVE_TYPES: &[&str] = &[
    "\"_\"",
    "\"foot\"",
    "\"horse\"",
    "\"fly\"",
    "\"hover\"",
    "\"float\"",
    "\"amph\"",
];

pub const WEAPON_TYPES: &[&str] = &[
    "\"_\"",
    "\"normal\"",
    "\"instant\"",
    "\"artillery\"",
    "\"aline\"",
    "\"missile\"",
    "\"msplash\"",
    "\"mbounce\"",
    "\"mline\"",
];

pub const ATTACK_TYPES: &[&str] = &[
    "\"_\"",
    "\"normal\"",
    "\"pierce\"",
    "\"siege\"",
    "\"spells\"",
    "\"chaos\"",
    "\"magic\"",
    "\"hero\"",
];

pub const DEFENSE_TYPES: &[&str] = &[
    "\"normal\"",
    "\"small\"",
    "\"medium\"",
    "\"large\"",
    "\"fort\"",
    "\"hero\"",
    "\"divine\"",
    "\"unarmored\"",
];

pub const DEATH_TYPES: &[&str] = &["0", "1", "2", "3"];

pub const REGEN_TYPES: &[&str] = &[
    "\"_\"",
    "\"always\"",
    "\"blight\"",
    "\"day\"",
    "\"night\"",
    "\"none\"",
];

pub const WEAPONS_ON_MODES: &[&str] = &["0", "1", "2", "3"];

pub const ITEM_CLASSES: &[&str] = &[
    "\"_\"",
    "\"Permanent\"",
    "\"Charged\"",
    "\"PowerUp\"",
    "\"Artifact\"",
    "\"Purchasable\"",
    "\"Campaign\"",
    "\"Miscellaneous\"",
];

// Flags joined into comma lists by multi-check widgets (bare, unquoted).
pub const TARGET_FLAGS: &[&str] = &[
    "air",
    "alive",
    "allies",
    "ancient",
    "bridge",
    "dead",
    "debris",
    "decoration",
    "enemies",
    "friend",
    "ground",
    "hero",
    "invulnerable",
    "item",
    "mechanical",
    "neutral",
    "nonancient",
    "nonhero",
    "nonsapper",
    "none",
    "notself",
    "organic",
    "player",
    "self",
    "structure",
    "sapper",
    "terrain",
    "tree",
    "vulnerable",
    "wall",
    "ward",
];

pub const CLASSIFICATION_FLAGS: &[&str] = &[
    "ancient",
    "giant",
    "mechanical",
    "neutral",
    "suicidal",
    "summoned",
    "tauren",
    "townhall",
    "tree",
    "undead",
    "walkable",
    "ward",
    "worker",
];

// Per-level ability field bases and their display names. Level keys are
// formed by appending the 1-based level number (e.g. "Cool3").
pub const ABILITY_LEVEL_FIELDS: &[(&str, &str)] = &[
    ("Cast", "Casting Time"),
    ("Dur", "Duration - Normal"),
    ("HeroDur", "Duration - Hero"),
    ("Cool", "Cooldown"),
    ("Cost", "Mana Cost"),
    ("Area", "Area of Effect"),
    ("Rng", "Cast Range"),
    ("Targs", "Targets Allowed"),
    ("UnitID", "Summoned Unit Type"),
    ("BuffID", "Buffs"),
    ("EfctID", "Effects"),
];

// Field keys hidden from the detail form while the editor is locked.
// Written to disabled-inputs.json on first use so users can tune the list.
pub const DEFAULT_DISABLED_FIELDS: &[&str] = &[
    "Blend",
    "Castbsw",
    "Castpt",
    "Run",
    "Walk",
    "Death",
    "ElevPts",
    "ElevRad",
    "FogRad",
    "ShadowOnWater",
    "MaxPitch",
    "MaxRoll",
    "FileVerFlags",
    "OccH",
    "OrientInterp",
    "PropWin",
    "SelZ",
    "SelCircOnWater",
    "Special",
    "MaxSpd",
    "MinSpd",
    "Formation",
    "Prio",
    "CargoSize",
];
