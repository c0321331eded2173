use pretty_assertions::assert_eq;
use slked::{
    MemoryStore, ObjectKind, Record, RecordStore, finalize_unit, generate_attack_tooltip,
    quote_wire_value, render_markup, trim_quotes,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn finalized_units_carry_the_full_filler_column_set() {
    let mut record = Record::new();
    record.set("UnitID", "hfoo");
    record.set("Name", "Footman");
    record.set("HP", "420");
    record.set("Def", "2");
    finalize_unit(&mut record);

    // Id mirrored into every per-table id column.
    for field in ["UnitID", "UnitBalanceID", "UnitUIID", "UnitWeapID", "UnitAbilID"] {
        assert_eq!(record.get(field), Some("\"hfoo\""), "{field}");
    }

    // Value mirrors track the (possibly defaulted) sources.
    assert_eq!(record.get("RealHP"), Some("420"));
    assert_eq!(record.get("Realdef"), Some("2"));

    // Sort keys and per-table fillers.
    assert_eq!(record.get("SortAbil"), Some("\"z3\""));
    assert_eq!(record.get("SortBalance"), Some("\"z3\""));
    assert_eq!(record.get("Sort"), Some("\"z3\""));
    assert_eq!(record.get("SortUI"), Some("\"z3\""));
    assert_eq!(record.get("SortWeap"), Some("\"n2\""));
    assert_eq!(record.get("Sort2"), Some("\"zzm\""));
    assert_eq!(record.get("InBeta"), Some("0"));
    assert_eq!(record.get("Version"), Some("1"));

    // Data columns fill only when empty.
    assert_eq!(record.get("Def"), Some("2"));
    assert_eq!(record.get("Threat"), Some("1"));
    assert_eq!(record.get("Targs1"), Some("\"-\""));
}

#[test]
fn quoting_rule_is_stable_across_repeated_saves() -> Result<()> {
    let mut store = MemoryStore::new();
    let mut record = Record::new();
    record.set("UnitID", "hfoo");
    record.set("Name", "Footman");
    record.set("Race", "human");
    record.set("Spd", "270");
    store.save_record(ObjectKind::Unit, record)?;

    let first = store.record(ObjectKind::Unit, "hfoo").expect("record").clone();
    store.save_record(ObjectKind::Unit, first.clone())?;
    let second = store.record(ObjectKind::Unit, "hfoo").expect("record").clone();

    // A second finalization pass changes nothing: quoting is idempotent.
    assert_eq!(first, second);
    assert_eq!(second.get("Race"), Some("\"human\""));
    assert_eq!(second.get("Spd"), Some("270"));
    Ok(())
}

#[test]
fn wire_helpers_agree_on_what_counts_as_numeric() {
    assert_eq!(quote_wire_value("z3"), "\"z3\"");
    assert_eq!(quote_wire_value("-1"), "-1");
    assert_eq!(trim_quotes(&quote_wire_value("human")), "human");
}

#[test]
fn generated_tooltips_render_into_colored_preview_markup() {
    let mut record = Record::new();
    record.set("WeapsOn", "1");
    record.set("AtkType1", "\"pierce\"");
    record.set("Cool1", "0.9");
    record.set("Dmgplus1", "22");
    record.set("Dice1", "1");
    record.set("Sides1", "5");
    record.set("RangeN1", "700");

    let tip = generate_attack_tooltip(&record);
    let html = render_markup(&tip);

    // Every generated label renders as a gold span followed by a break.
    assert_eq!(
        html,
        "<span style=\"color: rgba(255, 204, 0, 1)\">Attack:</span> Pierce<br>\
         <span style=\"color: rgba(255, 204, 0, 1)\">Cooldown:</span> 0.9<br>\
         <span style=\"color: rgba(255, 204, 0, 1)\">Damage:</span> 23 - 27<br>\
         <span style=\"color: rgba(255, 204, 0, 1)\">Range:</span> 700<br>"
    );
}
