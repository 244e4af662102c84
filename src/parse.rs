/// # Parse
/// Text-to-number and text-to-bool conversions. Every method answers `None`
/// on a failed parse instead of raising.
use std::str::FromStr;

use phf::phf_map;

/// The exact tokens accepted as booleans. Nothing else parses, not even
/// `"True"` or `"yes"`.
const BOOL_TOKENS: phf::Map<&'static str, bool> = phf_map! {
    "true" => true,
    "TRUE" => true,
    "1" => true,
    "false" => false,
    "FALSE" => false,
    "0" => false,
};

/// ### ParseExt
/// The fixed-width family all goes through [`ParseExt::to_num`], so anything
/// `FromStr` accepts for the target type parses here too.
pub trait ParseExt {
    /// Parse as any `FromStr` type, `None` on failure.
    fn to_num<T: FromStr>(&self) -> Option<T>;
    /// Look the text up in the boolean token table.
    fn to_bool(&self) -> Option<bool>;

    /// Parse as a platform-width signed integer.
    fn to_int(&self) -> Option<isize> {
        self.to_num()
    }
    fn to_i8(&self) -> Option<i8> {
        self.to_num()
    }
    fn to_i16(&self) -> Option<i16> {
        self.to_num()
    }
    fn to_i32(&self) -> Option<i32> {
        self.to_num()
    }
    fn to_i64(&self) -> Option<i64> {
        self.to_num()
    }
    fn to_f32(&self) -> Option<f32> {
        self.to_num()
    }
    /// Parse as `f64`, the widest float width there is here.
    fn to_f64(&self) -> Option<f64> {
        self.to_num()
    }
}

impl ParseExt for str {
    fn to_num<T: FromStr>(&self) -> Option<T> {
        self.parse().ok()
    }

    fn to_bool(&self) -> Option<bool> {
        BOOL_TOKENS.get(self).copied()
    }
}
