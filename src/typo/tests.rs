use proptest::prelude::*;

use super::{MisspellingSeeds, MisspellingTable, PROVIDER_SEEDS, TLD_SEEDS, TypoMatcher, find_typo};

fn table() -> MisspellingTable {
    MisspellingTable::build(MisspellingSeeds::default())
}

#[test]
fn misspelled_provider_maps_to_canonical() {
    let table = table();
    assert_eq!(find_typo(&table, "gamil.com").as_deref(), Some("gmail.com"));
    assert_eq!(find_typo(&table, "hotmial.co.uk").as_deref(), Some("hotmail.co.uk"));
}

#[test]
fn misspelled_tld_maps_to_canonical() {
    let table = table();
    assert_eq!(find_typo(&table, "gmail.cmo").as_deref(), Some("gmail.com"));
    assert_eq!(find_typo(&table, "yahoo.co.uj").as_deref(), Some("yahoo.co.uk"));
}

#[test]
fn double_misspelling_maps_to_canonical() {
    let table = table();
    assert_eq!(find_typo(&table, "gamil.con").as_deref(), Some("gmail.com"));
}

#[test]
fn lookup_is_case_insensitive() {
    let table = table();
    assert_eq!(find_typo(&table, "GaMiL.CoM").as_deref(), Some("gmail.com"));
}

#[test]
fn canonical_domain_is_not_a_typo() {
    let table = table();
    assert_eq!(find_typo(&table, "gmail.com"), None);
    for (name, seed) in PROVIDER_SEEDS.entries() {
        for tld in seed.tlds {
            let canonical = format!("{name}.{tld}");
            assert_eq!(table.get(&canonical), None, "{canonical} must not be a key");
        }
    }
}

#[test]
fn trailing_dot_bypasses_table() {
    let table = table();
    assert_eq!(find_typo(&table, "gmail.com."), None);
    assert_eq!(find_typo(&table, "gamil.com."), None);
}

#[test]
fn unrelated_domain_is_clean() {
    let table = table();
    let matcher = TypoMatcher::new(&table);
    assert_eq!(matcher.find_typo("example.org"), None);
}

#[test]
fn table_covers_full_cross_product() {
    let table = table();
    let gmail = PROVIDER_SEEDS.get("gmail").expect("gmail seed");
    let com = TLD_SEEDS.get("com").copied().expect("com seed");
    for typo in gmail.misspellings {
        assert_eq!(table.get(&format!("{typo}.com")), Some("gmail.com"));
        for tld_typo in com {
            assert_eq!(table.get(&format!("{typo}.{tld_typo}")), Some("gmail.com"));
        }
    }
    for tld_typo in com {
        assert_eq!(table.get(&format!("gmail.{tld_typo}")), Some("gmail.com"));
    }
}

#[test]
fn build_is_deterministic() {
    assert_eq!(table(), table());
}

proptest! {
    #[test]
    fn every_value_is_a_canonical_provider(idx in 0usize..512) {
        let table = table();
        let mut values: Vec<&str> = table.iter().map(|(_, v)| v).collect();
        values.sort_unstable();
        let value = values[idx % values.len()];
        let (name, tld) = value.split_once('.').expect("canonical has a dot");
        let seed = PROVIDER_SEEDS.get(name).expect("known provider");
        prop_assert!(seed.tlds.iter().any(|t| *t == tld));
    }
}
