use super::boolean::Bool;
use super::errors::TError;
use super::numeral::{decode, Numeral};
use super::printer::decode_bool;
use std::fmt::Write;

pub const TRUE_TERM: &str = "λx.λy.x";
pub const FALSE_TERM: &str = "λx.λy.y";
pub const NOT_TERM: &str = "λb.b FALSE TRUE";
pub const AND_TERM: &str = "λp.λq.p q FALSE";
pub const OR_TERM: &str = "λp.λq.p TRUE q";
pub const ZERO_TERM: &str = "λf.λx.x";
pub const SUCC_TERM: &str = "λn.λf.λx.f (n f x)";

pub fn bool_term(b: &Bool) -> Result<String, TError> {
    Ok(if decode_bool(b)? { TRUE_TERM } else { FALSE_TERM }.to_string())
}

// Normal form of the numeral: `λf.λx.f (f (... x))`.
pub fn numeral_term(n: &Numeral) -> String {
    let count = decode(n);
    let mut state = "λf.λx.".to_string();
    if count == 0 {
        state.push('x');
        return state;
    }
    for i in 0..count {
        if i > 0 {
            state.push('(');
        }
        state.push_str("f ");
    }
    state.push('x');
    for _ in 1..count {
        state.push(')');
    }
    state
}

pub fn show_step(label: &str, term: &str) -> String {
    let mut state = String::new();
    // Writing into a String never fails.
    let _ = write!(state, "{} => {}", label, term);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::{or, FALSE, TRUE};
    use crate::numeral::{church_nat, succ, ZERO};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn canonical_boolean_terms() -> Result<(), TError> {
        assert_eq!(bool_term(&TRUE)?, "λx.λy.x");
        assert_eq!(bool_term(&FALSE)?, "λx.λy.y");
        assert_eq!(bool_term(&or(&FALSE, &TRUE))?, TRUE_TERM);
        Ok(())
    }

    #[test]
    fn lookalike_boolean_has_no_term() {
        let lookalike = Bool::new(|_x| Arc::new(|y: Bool| y));
        assert!(matches!(
            bool_term(&lookalike),
            Err(TError::UnrecognizedEncoding(_))
        ));
    }

    #[test]
    fn numeral_terms() {
        assert_eq!(numeral_term(&ZERO), ZERO_TERM);
        assert_eq!(numeral_term(&succ(ZERO.clone())), "λf.λx.f x");
        assert_eq!(numeral_term(&church_nat(2)), "λf.λx.f (f x)");
        assert_eq!(numeral_term(&church_nat(3)), "λf.λx.f (f (f x))");
    }

    #[test]
    fn step_display() {
        assert_eq!(show_step("NOT TRUE", FALSE_TERM), "NOT TRUE => λx.λy.y");
    }
}
