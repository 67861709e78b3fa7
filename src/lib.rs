//! Infix to postfix (reverse Polish) conversion.
//!
//! Expressions are made of single-character operands, the binary operators `+ - * / ^`,
//! and parens. The conversion is one left-to-right pass over the input with an
//! operator stack.
//!
//! ```
//! assert_eq!(postfixer::convert("(a+b)*c").unwrap(), "ab+c*");
//! ```

pub mod convert;
pub mod reader;
pub mod stack;

pub use convert::{convert, convert_with, Config, ConvertErr, ConvertResult};
pub use reader::{read_expression, ReadErr, ReadResult};
