use std::fmt;

use crate::codegen::{CodegenError, LoweringError};
use crate::parser::Node;

/// Value types known to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I32,
}

/// Named built-in types, looked up by type parsing.
const BUILTIN_TYPES: &[(&str, ValueType)] = &[("i32", ValueType::I32)];

impl ValueType {
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_TYPES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, ty)| *ty)
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::I32 => "i32",
        }
    }

    pub fn bit_width(self) -> u32 {
        match self {
            ValueType::I32 => 32,
        }
    }

    /// Smallest and largest representable signed value.
    pub fn signed_range(self) -> (i128, i128) {
        let bits = self.bit_width();
        let max = (1i128 << (bits - 1)) - 1;
        (-max - 1, max)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a type node such as `[i32]`
/// # Errors
/// Returns `LoweringError::InvalidType` unless the node holds exactly one word naming a built-in type
pub fn parse_type(node: &Node) -> Result<ValueType, LoweringError> {
    match node.arguments.as_slice() {
        [argument] => argument
            .as_word()
            .and_then(|word| ValueType::from_name(word.as_str()))
            .ok_or_else(|| LoweringError::InvalidType(node.to_string())),
        _ => Err(LoweringError::InvalidType(node.to_string())),
    }
}

/// Parse a base-10 integer literal and check that it fits the type
/// # Errors
/// Returns `CodegenError::NumericFormat` for malformed or out-of-range text
pub fn parse_integer_literal(text: &str, ty: ValueType) -> Result<i128, CodegenError> {
    let numeric_error = || CodegenError::NumericFormat {
        text: text.to_string(),
        bits: ty.bit_width(),
    };

    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(numeric_error());
    }

    let value: i128 = text.parse().map_err(|_| numeric_error())?;
    let (min, max) = ty.signed_range();
    if value < min || value > max {
        return Err(numeric_error());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn type_node(source: &str) -> Node {
        parse(source).unwrap().nodes.remove(0)
    }

    #[test]
    fn test_builtin_type_table() {
        assert_eq!(ValueType::from_name("i32"), Some(ValueType::I32));
        assert_eq!(ValueType::from_name("i64"), None);
        assert_eq!(ValueType::I32.to_string(), "i32");
        assert_eq!(ValueType::I32.signed_range(), (i32::MIN as i128, i32::MAX as i128));
    }

    #[test]
    fn test_parse_type() {
        assert_eq!(parse_type(&type_node("[i32]")), Ok(ValueType::I32));
        assert_eq!(
            parse_type(&type_node("[u8]")),
            Err(LoweringError::InvalidType("[u8]".to_string()))
        );
        assert!(parse_type(&type_node("[]")).is_err());
        assert!(parse_type(&type_node("[i32 i32]")).is_err());
        assert!(parse_type(&type_node("[[i32]]")).is_err());
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(parse_integer_literal("5", ValueType::I32), Ok(5));
        assert_eq!(parse_integer_literal("-17", ValueType::I32), Ok(-17));
        assert_eq!(parse_integer_literal("+3", ValueType::I32), Ok(3));
        assert_eq!(parse_integer_literal("2147483647", ValueType::I32), Ok(2147483647));
        assert_eq!(parse_integer_literal("-2147483648", ValueType::I32), Ok(-2147483648));
    }

    #[test]
    fn test_malformed_integer_literals() {
        for text in ["12a", "-", "+", "0x10", "1_000", "--1", "2147483648", "99999999999999999999999999999999999999999"] {
            assert_eq!(
                parse_integer_literal(text, ValueType::I32),
                Err(CodegenError::NumericFormat {
                    text: text.to_string(),
                    bits: 32,
                }),
                "{text} should be rejected"
            );
        }
    }
}
