//! Derives the gold-highlighted attack tooltip from a unit's weapon fields.

use crate::record::Record;
use crate::statics;

fn gold(label: &str) -> String {
    format!(
        "{}{}{}",
        statics::MARKUP_COLOR_GOLD,
        label,
        statics::MARKUP_COLOR_END
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Damage range from the dice fields: `base+dice` through `base+dice*sides`.
/// Returns None when any of the three fields is missing or non-numeric.
fn damage_range(record: &Record, weapon: u8) -> Option<(i64, i64)> {
    let base = record.get_i64(&format!("Dmgplus{weapon}"))?;
    let dice = record.get_i64(&format!("Dice{weapon}"))?;
    let sides = record.get_i64(&format!("Sides{weapon}"))?;
    Some((base + dice, base + dice * sides))
}

fn weapon_section(record: &Record, weapon: u8, suffix: &str) -> String {
    let mut out = String::new();
    let atk_type = capitalize(record.display(&format!("AtkType{weapon}")));
    out.push_str(&gold(&format!("Attack{suffix}:")));
    out.push(' ');
    out.push_str(&atk_type);
    out.push_str(statics::MARKUP_LINE_BREAK);

    out.push_str(&gold(&format!("Cooldown{suffix}:")));
    out.push(' ');
    out.push_str(record.display(&format!("Cool{weapon}")));
    out.push_str(statics::MARKUP_LINE_BREAK);

    if let Some((min, max)) = damage_range(record, weapon) {
        out.push_str(&gold(&format!("Damage{suffix}:")));
        out.push_str(&format!(" {min} - {max}"));
        out.push_str(statics::MARKUP_LINE_BREAK);
    }

    out.push_str(&gold(&format!("Range{suffix}:")));
    out.push(' ');
    out.push_str(record.display(&format!("RangeN{weapon}")));
    out.push_str(statics::MARKUP_LINE_BREAK);
    out
}

/// Builds the extended-tooltip attack summary, honoring the attacks-enabled
/// mode: 0 none, 1 weapon one, 2 weapon two, 3 both (the second weapon gets
/// a `(2)` label suffix).
pub fn generate_attack_tooltip(record: &Record) -> String {
    let mut out = String::new();
    match record.display(statics::FK_WEAPS_ON) {
        "1" | "3" => out.push_str(&weapon_section(record, 1, "")),
        "2" => out.push_str(&weapon_section(record, 2, "")),
        "0" => {
            out.push_str(&gold("Attack:"));
            out.push_str(" None");
            out.push_str(statics::MARKUP_LINE_BREAK);
            out.push_str(&gold("Range:"));
            out.push(' ');
            out.push_str(record.display("RangeN1"));
            out.push_str(statics::MARKUP_LINE_BREAK);
        }
        _ => {}
    }

    if record.display(statics::FK_WEAPS_ON) == "3" {
        out.push_str(&weapon_section(record, 2, "(2)"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_attack_tooltip;
    use crate::record::Record;

    fn weapon_one_unit() -> Record {
        let mut rec = Record::new();
        rec.set("WeapsOn", "1");
        rec.set("AtkType1", "\"normal\"");
        rec.set("Cool1", "1.35");
        rec.set("Dmgplus1", "11");
        rec.set("Dice1", "1");
        rec.set("Sides1", "2");
        rec.set("RangeN1", "90");
        rec
    }

    #[test]
    fn weapon_one_tooltip_lists_attack_cooldown_damage_range() {
        let tip = generate_attack_tooltip(&weapon_one_unit());
        assert_eq!(
            tip,
            "|cffffcc00Attack:|r Normal|n\
             |cffffcc00Cooldown:|r 1.35|n\
             |cffffcc00Damage:|r 12 - 13|n\
             |cffffcc00Range:|r 90|n"
        );
    }

    #[test]
    fn no_attack_mode_reports_none_with_primary_range() {
        let mut rec = Record::new();
        rec.set("WeapsOn", "0");
        rec.set("RangeN1", "128");
        let tip = generate_attack_tooltip(&rec);
        assert_eq!(tip, "|cffffcc00Attack:|r None|n|cffffcc00Range:|r 128|n");
    }

    #[test]
    fn both_weapons_mode_appends_a_numbered_second_section() {
        let mut rec = weapon_one_unit();
        rec.set("WeapsOn", "3");
        rec.set("AtkType2", "\"siege\"");
        rec.set("Cool2", "2.5");
        rec.set("Dmgplus2", "89");
        rec.set("Dice2", "1");
        rec.set("Sides2", "22");
        rec.set("RangeN2", "800");

        let tip = generate_attack_tooltip(&rec);
        assert!(tip.contains("|cffffcc00Attack:|r Normal|n"));
        assert!(tip.contains("|cffffcc00Attack(2):|r Siege|n"));
        assert!(tip.contains("|cffffcc00Damage(2):|r 90 - 111|n"));
        assert!(tip.contains("|cffffcc00Range(2):|r 800|n"));
    }

    #[test]
    fn missing_damage_fields_omit_the_damage_line() {
        let mut rec = Record::new();
        rec.set("WeapsOn", "1");
        rec.set("AtkType1", "\"pierce\"");
        rec.set("Cool1", "0.9");
        rec.set("RangeN1", "700");
        let tip = generate_attack_tooltip(&rec);
        assert!(!tip.contains("Damage"));
        assert!(tip.contains("|cffffcc00Attack:|r Pierce|n"));
    }

    #[test]
    fn unknown_mode_produces_an_empty_tooltip() {
        let rec = Record::new();
        assert_eq!(generate_attack_tooltip(&rec), "");
    }
}
