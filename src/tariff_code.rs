use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref DOTTED: Result<Regex, regex::Error> = Regex::new(r"^\d{4}\.\d{2}\.\d{2}$");
}

fn is_dotted(raw: &str) -> bool {
    DOTTED.as_ref().map_or(false, |re| re.is_match(raw))
}

/// A tariff classification code (TIGIE fracción or HTSUS) as it is sent to
/// the lookup service.
///
/// Normalization never fails. Codes that are not recognisably 8-digit are
/// forwarded as typed and the service decides whether they exist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TariffCode(String);

impl TariffCode {
    const DIGITS: usize = 8;

    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        let digits = Self::strip(trimmed);

        if digits.len() == Self::DIGITS {
            return Self(format!(
                "{}.{}.{}",
                &digits[0..4],
                &digits[4..6],
                &digits[6..8]
            ));
        }

        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code has the `####.##.##` shape the lookup tables are
    /// keyed on. Codes that don't were forwarded as typed and are unlikely
    /// to match.
    pub fn is_dotted(&self) -> bool {
        is_dotted(&self.0)
    }

    fn strip(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for TariffCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TariffCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
