// This file is part of Quanta.
//
// Quanta is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Quanta is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Quanta.  If not, see <http://www.gnu.org/licenses/>.
use crate::UnitError;
use std::{fmt, str::FromStr};

/// Symbols of the dimensions tracked by a signature, in display order.
pub const SI_SYMBOLS: [&str; 9] = ["rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd"];

// Longest first, so that "mol" is not read as "m" and "sr" is not read as "s".
const PARSE_ORDER: [usize; 9] = [0, 7, 1, 2, 8, 3, 4, 5, 6];

/// Integer exponents of each SI dimension, e.g. `kgm2/s3` for power.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SiDimensions([i8; 9]);

impl SiDimensions {
    pub const DIMENSIONLESS: SiDimensions = SiDimensions([0; 9]);

    pub const fn new(exponents: [i8; 9]) -> Self {
        Self(exponents)
    }

    pub fn exponents(&self) -> [i8; 9] {
        self.0
    }

    pub fn exponent(&self, symbol: &str) -> Option<i8> {
        SI_SYMBOLS
            .iter()
            .position(|s| *s == symbol)
            .map(|i| self.0[i])
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// Dimensions of a product.
    pub fn plus(self, other: Self) -> Result<Self, UnitError> {
        self.combine(other, i8::checked_add)
    }

    /// Dimensions of a quotient.
    pub fn minus(self, other: Self) -> Result<Self, UnitError> {
        self.combine(other, i8::checked_sub)
    }

    pub fn pow(self, n: i8) -> Result<Self, UnitError> {
        self.combine(Self([n; 9]), i8::checked_mul)
    }

    fn combine(self, other: Self, op: impl Fn(i8, i8) -> Option<i8>) -> Result<Self, UnitError> {
        let mut out = self;
        for (e, o) in out.0.iter_mut().zip(other.0) {
            *e = op(*e, o).ok_or_else(|| UnitError::signature(&self.to_string(), "exponent out of range"))?;
        }
        Ok(out)
    }

    /// Reads signatures such as `kgm2/s3A`, `1/s` or `s2/kgm2`: a numerator and
    /// an optional denominator, each a run of symbols with optional exponents.
    pub fn parse(signature: &str) -> Result<Self, UnitError> {
        let mut parts = signature.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(UnitError::signature(signature, "more than one '/'"));
        }
        let mut dims = Self::parse_product(signature, numerator)?;
        if let Some(denominator) = denominator {
            dims = dims
                .minus(Self::parse_product(signature, denominator)?)
                .map_err(|_| UnitError::signature(signature, "exponent out of range"))?;
        }
        Ok(dims)
    }

    fn parse_product(signature: &str, part: &str) -> Result<Self, UnitError> {
        if part.is_empty() {
            return Err(UnitError::signature(signature, "empty term"));
        }
        let mut dims = Self::DIMENSIONLESS;
        if part == "1" {
            return Ok(dims);
        }
        let mut rest = part;
        while !rest.is_empty() {
            let index = PARSE_ORDER
                .iter()
                .copied()
                .find(|i| rest.starts_with(SI_SYMBOLS[*i]))
                .ok_or_else(|| UnitError::signature(signature, format!("unknown symbol at '{rest}'")))?;
            rest = &rest[SI_SYMBOLS[index].len()..];
            let digits = rest
                .char_indices()
                .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let exponent = if digits == 0 {
                1
            } else {
                rest[..digits]
                    .parse::<i8>()
                    .map_err(|e| UnitError::signature(signature, e.to_string()))?
            };
            rest = &rest[digits..];
            dims.0[index] = dims.0[index]
                .checked_add(exponent)
                .ok_or_else(|| UnitError::signature(signature, "exponent out of range"))?;
        }
        Ok(dims)
    }
}

impl FromStr for SiDimensions {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SiDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let write_terms = |f: &mut fmt::Formatter, sign: i16| -> fmt::Result {
            for (symbol, e) in SI_SYMBOLS.iter().zip(self.0) {
                let e = i16::from(e) * sign;
                if e == 1 {
                    f.write_str(symbol)?;
                } else if e > 1 {
                    write!(f, "{symbol}{e}")?;
                }
            }
            Ok(())
        };
        if self.0.iter().any(|e| *e > 0) {
            write_terms(f, 1)?;
        } else {
            f.write_str("1")?;
        }
        if self.0.iter().any(|e| *e < 0) {
            f.write_str("/")?;
            write_terms(f, -1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_parse_power() -> Result<()> {
        let power = SiDimensions::parse("kgm2/s3")?;
        assert_eq!(power.exponent("kg"), Some(1));
        assert_eq!(power.exponent("m"), Some(2));
        assert_eq!(power.exponent("s"), Some(-3));
        assert_eq!(power.to_string(), "kgm2/s3");
        Ok(())
    }

    #[test]
    fn test_longest_symbol_wins() -> Result<()> {
        let molar = SiDimensions::parse("mol/m3")?;
        assert_eq!(molar.exponent("mol"), Some(1));
        assert_eq!(molar.exponent("m"), Some(-3));
        assert_eq!(SiDimensions::parse("sr")?.exponent("s"), Some(0));
        assert_eq!(SiDimensions::parse("kg/ms2")?.to_string(), "kg/ms2");
        Ok(())
    }

    #[test]
    fn test_normalized_display() -> Result<()> {
        for signature in ["1", "1/s", "m2", "sA", "kgm2/s3A", "kgm2/s3A2", "s2/kgm2", "rad", "cd"] {
            assert_eq!(SiDimensions::parse(signature)?.to_string(), signature);
        }
        Ok(())
    }

    #[test]
    fn test_algebra() -> Result<()> {
        let length: SiDimensions = "m".parse()?;
        let duration: SiDimensions = "s".parse()?;
        let mass: SiDimensions = "kg".parse()?;
        let power = mass.plus(length.pow(2)?)?.minus(duration.pow(3)?)?;
        assert_eq!(power, SiDimensions::parse("kgm2/s3")?);
        assert!(length.minus(length)?.is_dimensionless());
        Ok(())
    }

    #[test]
    fn test_exponent_overflow_is_a_signature_error() -> Result<()> {
        for signature in ["m100m100", "m127m", "m-128/m", "1/s-128"] {
            let err = SiDimensions::parse(signature).unwrap_err();
            assert!(matches!(err, UnitError::Signature { .. }), "{signature}");
            assert!(err.to_string().contains("exponent out of range"), "{signature}");
        }
        let big = SiDimensions::parse("m100")?;
        assert!(big.pow(2).is_err());
        assert!(big.plus(big).is_err());
        assert_eq!(SiDimensions::parse("m127")?.exponent("m"), Some(127));
        assert_eq!(SiDimensions::parse("m-128")?.to_string(), "1/m128");
        Ok(())
    }

    #[test]
    fn test_malformed() {
        assert!(SiDimensions::parse("").is_err());
        assert!(SiDimensions::parse("m/s/s").is_err());
        assert!(SiDimensions::parse("furlong").is_err());
        assert!(SiDimensions::parse("m999").is_err());
    }
}
