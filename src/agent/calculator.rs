//! Arithmetic expression evaluation for the calculator tool.
//!
//! Supports `+ - * / %`, parentheses and unary minus over floating-point
//! numbers. Failures come back as text; this function never panics, because
//! the agent loop treats the returned string as a normal tool observation.

/// Evaluate an arithmetic expression, returning the result or an error
/// description as text.
pub fn evaluate(expression: &str) -> String {
    match Parser::new(expression).parse() {
        Ok(value) => format_number(value),
        Err(e) => format!("Calculation error: {}", e),
    }
}

/// Format a result without a trailing `.0` for whole numbers.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<f64, String> {
        let value = self.expression()?;
        self.skip_whitespace();
        match self.chars.peek() {
            None => Ok(value),
            Some(c) => Err(format!("unexpected character '{}'", c)),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    // expression := term (("+" | "-") term)*
    fn expression(&mut self) -> Result<f64, String> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    value += self.term()?;
                }
                Some('-') => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (("*" | "/" | "%") factor)*
    fn term(&mut self) -> Result<f64, String> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some('*') => {
                    self.chars.next();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.chars.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err("division by zero".to_string());
                    }
                    value /= divisor;
                }
                Some('%') => {
                    self.chars.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err("division by zero".to_string());
                    }
                    value %= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := "-" factor | "(" expression ")" | number
    fn factor(&mut self) -> Result<f64, String> {
        self.skip_whitespace();
        match self.chars.peek() {
            Some('-') => {
                self.chars.next();
                Ok(-self.factor()?)
            }
            Some('(') => {
                self.chars.next();
                let value = self.expression()?;
                self.skip_whitespace();
                match self.chars.next() {
                    Some(')') => Ok(value),
                    _ => Err("missing closing parenthesis".to_string()),
                }
            }
            Some(c) if c.is_ascii_digit() || *c == '.' => self.number(),
            Some(c) => Err(format!("unexpected character '{}'", c)),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    fn number(&mut self) -> Result<f64, String> {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                text.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        text.parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_addition() {
        assert_eq!(evaluate("2 + 2"), "4");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2 + 3 * 4"), "14");
        assert_eq!(evaluate("(2 + 3) * 4"), "20");
    }

    #[test]
    fn test_division_and_modulo() {
        assert_eq!(evaluate("10 / 4"), "2.5");
        assert_eq!(evaluate("10 % 3"), "1");
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-3 + 5"), "2");
        assert_eq!(evaluate("2 * -4"), "-8");
    }

    #[test]
    fn test_incomplete_expression_is_error_text() {
        let result = evaluate("2 +");
        assert!(result.starts_with("Calculation error:"));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_division_by_zero() {
        assert!(evaluate("1 / 0").contains("division by zero"));
    }

    #[test]
    fn test_garbage_input() {
        assert!(evaluate("two plus two").starts_with("Calculation error:"));
        assert!(evaluate("").starts_with("Calculation error:"));
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(evaluate("2 + 2 extra").starts_with("Calculation error:"));
    }

    #[test]
    fn test_decimal_result_formatting() {
        assert_eq!(evaluate("1 / 2"), "0.5");
        assert_eq!(evaluate("100"), "100");
    }
}
