/// Tests for the resource table
#[cfg(test)]
mod tests {
    use crate::locale::*;

    const CUSTOM: &str = r#"
[en]
thousands_separator = ","
[en.strings]
USER = "User"
[en.items]
ORE = "Ore"

[de]
thousands_separator = "."
[de.strings]
USER = "Benutzer"
"#;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ","), "0");
        assert_eq!(group_thousands(999, ","), "999");
        assert_eq!(group_thousands(1500, ","), "1,500");
        assert_eq!(group_thousands(1_234_567, "."), "1.234.567");
        assert_eq!(group_thousands(100_000, ","), "100,000");
        assert_eq!(group_thousands(u128::from(u64::MAX) + 5, ","), "18,446,744,073,709,551,620");
    }

    #[test]
    fn test_unknown_key_returns_raw_key() {
        let table = ResourceTable::from_toml_str(CUSTOM).unwrap();
        assert_eq!(table.get_string("MISSING_KEY", "en"), "MISSING_KEY");
        assert_eq!(table.get_item("PLATINUM", "de"), "PLATINUM");
    }

    #[test]
    fn test_locale_falls_back_to_english() {
        let table = ResourceTable::from_toml_str(CUSTOM).unwrap();
        assert_eq!(table.get_string("USER", "de"), "Benutzer");
        // German has no items, English does
        assert_eq!(table.get_item("ORE", "de"), "Ore");
        // Unknown locale entirely
        assert_eq!(table.get_string("USER", "fr"), "User");
    }

    #[test]
    fn test_region_tag_uses_language() {
        let table = ResourceTable::from_toml_str(CUSTOM).unwrap();
        assert_eq!(table.get_string("USER", "de-DE"), "Benutzer");
        assert_eq!(table.get_string("USER", "de_AT"), "Benutzer");
        assert!(table.has_locale("de-CH"));
        assert!(!table.has_locale("fr"));
    }

    #[test]
    fn test_format_amount_uses_locale_separator() {
        let table = ResourceTable::from_toml_str(CUSTOM).unwrap();
        assert_eq!(table.format_amount(1500, "en"), "1,500");
        assert_eq!(table.format_amount(1500, "de"), "1.500");
        assert_eq!(table.format_amount(1500, "fr"), "1,500");
    }

    #[test]
    fn test_overrides_layer_on_top() {
        let overrides = ResourceTable::from_toml_str("[en.items]\nORE = \"Rock\"\nGEM = \"Gem\"\n").unwrap();
        let table = ResourceTable::from_toml_str(CUSTOM).unwrap().with_overrides(overrides);
        assert_eq!(table.get_item("ORE", "en"), "Rock");
        assert_eq!(table.get_item("GEM", "en"), "Gem");
        assert_eq!(table.get_string("USER", "en"), "User");
        assert_eq!(table.format_amount(2000, "en"), "2,000");
    }

    #[test]
    fn test_builtin_table_has_report_keys() {
        let table = ResourceTable::builtin();
        for key in ["USER", "AMOUNT", "UPDATED", "RAW_MATERIAL", "RESOURCE_UNKNOWN", "USER_UNKNOWN", "NO_DATA"] {
            assert_ne!(table.get_string(key, "en"), key, "missing en string {}", key);
            assert_ne!(table.get_string(key, "de"), key, "missing de string {}", key);
        }
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = ResourceTable::from_toml_str("[en\nUSER = 1").unwrap_err();
        assert!(err.contains("Invalid resource table"));
    }
}
