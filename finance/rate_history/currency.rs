use serde::Serialize;
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// ISO 4217 code, upper-cased.
///
/// Nothing checks that the code is a real currency; an unknown code is
/// simply never found in a payload.
#[derive(Serialize, PartialEq, Eq, Hash, Debug, Clone, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Self {
        CurrencyCode(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::new(s))
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Ordered set of codes; keeps the first occurrence of each code.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct CurrencyCodes(Vec<CurrencyCode>);

impl CurrencyCodes {
    pub fn new() -> Self {
        CurrencyCodes(Vec::new())
    }

    pub fn insert(&mut self, code: CurrencyCode) -> bool {
        if self.contains(&code) {
            return false;
        }
        self.0.push(code);
        true
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.0.contains(code)
    }

    /// Codes of `self` that are not in `other`, in order.
    pub fn without(&self, other: &CurrencyCodes) -> CurrencyCodes {
        self.iter()
            .filter(|code| !other.contains(code))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CurrencyCode> for CurrencyCodes {
    fn from_iter<I: IntoIterator<Item = CurrencyCode>>(iter: I) -> Self {
        let mut codes = CurrencyCodes::new();
        for code in iter {
            codes.insert(code);
        }
        codes
    }
}

impl<'a> FromIterator<&'a str> for CurrencyCodes {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(CurrencyCode::new).collect()
    }
}

impl<'a> IntoIterator for &'a CurrencyCodes {
    type Item = &'a CurrencyCode;
    type IntoIter = std::slice::Iter<'a, CurrencyCode>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
