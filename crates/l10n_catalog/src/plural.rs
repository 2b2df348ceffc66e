use std::fmt;

/// Grammatical count categories a plural block may carry.
///
/// Which categories exist in a block is up to the translator; nothing here
/// decides which category applies to a given count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Processing order. Placeholder indices are assigned while walking
    /// categories in this order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Field name used inside a plural block of a locale file.
    pub fn field_name(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zeroValue",
            PluralCategory::One => "oneValue",
            PluralCategory::Two => "twoValue",
            PluralCategory::Few => "fewValue",
            PluralCategory::Many => "manyValue",
            PluralCategory::Other => "otherValue",
        }
    }

    /// Name used in the catalog's `variations.plural` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.field_name() == name)
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
