use crate::expression::ast::{Expression, Operator};
use crate::expression::display::write_infix;

impl Expression {
    /// Render with `*` and `/` instead of `×` and `÷`.
    ///
    /// Parenthesization is identical to the `Display` form, so the result can
    /// be pasted into any calculator that uses standard precedence.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_infix(&mut out, self, Operator::ascii_symbol);
        out
    }
}
