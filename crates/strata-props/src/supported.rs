//! Built-in supported-keyword tables.

use strata_core::KeywordDescriptor;

/// Region-number and flag keywords. All default to 1.
pub const INT_KEYWORDS: &[&str] = &[
    "ACTNUM", "SATNUM", "IMBNUM", "PVTNUM", "EQLNUM", "ENDNUM", "FIPNUM", "FLUXNUM", "MULTNUM",
    "OPERNUM", "ROCKNUM", "MISCNUM",
];

/// Saturation endpoint keywords, drainage then imbibition.
pub const ENDPOINT_KEYWORDS: &[&str] = &[
    "SWL", "SWCR", "SWU", "SGL", "SGCR", "SGU", "SOWCR", "SOGCR", "ISWL", "ISWCR", "ISWU", "ISGL",
    "ISGCR", "ISGU", "ISOWCR", "ISOGCR",
];

/// Multiplier keywords. All default to 1.
pub const MULTIPLIER_KEYWORDS: &[&str] = &[
    "NTG", "MULTPV", "MULTX", "MULTX-", "MULTY", "MULTY-", "MULTZ", "MULTZ-",
];

/// Descriptors for the integer registry.
pub fn int_keywords() -> Vec<KeywordDescriptor<i32>> {
    INT_KEYWORDS
        .iter()
        .map(|&name| KeywordDescriptor::new(name, 1, "1"))
        .collect()
}

/// Descriptors for the floating registry.
///
/// Geometry, porosity, permeability and endpoints default to NaN so that
/// cells the deck never reaches are detectable.
pub fn double_keywords() -> Vec<KeywordDescriptor<f64>> {
    let nan = f64::NAN;
    let mut keywords = vec![
        KeywordDescriptor::new("PORO", nan, "1"),
        KeywordDescriptor::new("PERMX", nan, "Permeability"),
        KeywordDescriptor::new("PERMY", nan, "Permeability"),
        KeywordDescriptor::new("PERMZ", nan, "Permeability"),
        KeywordDescriptor::new("TOPS", nan, "Length"),
        KeywordDescriptor::new("DX", nan, "Length"),
        KeywordDescriptor::new("DY", nan, "Length"),
        KeywordDescriptor::new("DZ", nan, "Length"),
        KeywordDescriptor::new("SWATINIT", nan, "1"),
    ];
    keywords.extend(
        ENDPOINT_KEYWORDS
            .iter()
            .map(|&name| KeywordDescriptor::new(name, nan, "1")),
    );
    keywords.extend(
        MULTIPLIER_KEYWORDS
            .iter()
            .map(|&name| KeywordDescriptor::new(name, 1.0, "1")),
    );
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_do_not_overlap() {
        let ints = int_keywords();
        let doubles = double_keywords();
        for d in &doubles {
            assert!(ints.iter().all(|i| i.name() != d.name()), "{} in both tables", d.name());
        }
    }

    #[test]
    fn defaults() {
        assert!(int_keywords().iter().all(|d| d.default_value() == 1));
        let doubles = double_keywords();
        let find = |name: &str| doubles.iter().find(|d| d.name() == name).unwrap();
        assert!(find("PORO").default_value().is_nan());
        assert!(find("ISWU").default_value().is_nan());
        assert_eq!(find("NTG").default_value(), 1.0);
        assert_eq!(find("PERMX").unit(), "Permeability");
    }
}
