use std::collections::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Dialing code preselected in both lead forms.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Phone-format rule for one dialing code.
///
/// `pattern` is matched against the digits-only form of the number and is
/// anchored on both ends when compiled.
#[derive(Debug, PartialEq, Eq)]
pub struct CountryRule {
    pub code: &'static str,
    pub flag: &'static str,
    pub name: &'static str,
    pub min_digits: usize,
    pub pattern: &'static str,
    pub error_msg: Option<&'static str>,
}

pub static COUNTRY_RULES: [CountryRule; 6] = [
    CountryRule {
        code: "+91",
        flag: "🇮🇳",
        name: "India",
        min_digits: 10,
        pattern: r"[6-9]\d{9}",
        error_msg: Some("Indian mobile numbers must start with 6, 7, 8, or 9"),
    },
    CountryRule {
        code: "+1",
        flag: "🇺🇸",
        name: "USA",
        min_digits: 10,
        pattern: r"\d{10}",
        error_msg: None,
    },
    CountryRule {
        code: "+44",
        flag: "🇬🇧",
        name: "UK",
        min_digits: 10,
        pattern: r"\d{10,11}",
        error_msg: None,
    },
    CountryRule {
        code: "+61",
        flag: "🇦🇺",
        name: "Australia",
        min_digits: 9,
        pattern: r"[2-9]\d{8}",
        error_msg: None,
    },
    CountryRule {
        code: "+971",
        flag: "🇦🇪",
        name: "UAE",
        min_digits: 9,
        pattern: r"5\d{8}",
        error_msg: None,
    },
    CountryRule {
        code: "+65",
        flag: "🇸🇬",
        name: "Singapore",
        min_digits: 8,
        pattern: r"[689]\d{7}",
        error_msg: None,
    },
];

// Compiled once; the table is static so a bad pattern is a build-time bug.
static COMPILED_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    COUNTRY_RULES
        .iter()
        .map(|rule| {
            let anchored = format!("^(?:{})$", rule.pattern);
            let re = Regex::new(&anchored).expect("country rule pattern must compile");
            (rule.code, re)
        })
        .collect()
});

pub fn lookup(code: &str) -> Option<&'static CountryRule> {
    COUNTRY_RULES.iter().find(|rule| rule.code == code)
}

impl CountryRule {
    /// Full match of `digits` against this rule's pattern.
    pub fn matches(&self, digits: &str) -> bool {
        COMPILED_PATTERNS
            .get(self.code)
            .map_or(false, |re| re.is_match(digits))
    }

    /// Option label used by the country select, e.g. "🇮🇳 India (+91)".
    pub fn option_label(&self) -> String {
        format!("{} {} ({})", self.flag, self.name, self.code)
    }
}
