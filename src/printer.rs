use super::boolean::{Bool, FALSE, TRUE};
use super::errors::TError;
use super::numeral::{decode, Numeral};
use std::io::Write;

pub type Res = Result<(), TError>;

// Identity only; the value is never applied.
pub fn decode_bool(b: &Bool) -> Result<bool, TError> {
    if b.is(&TRUE) {
        Ok(true)
    } else if b.is(&FALSE) {
        Ok(false)
    } else {
        Err(TError::UnrecognizedEncoding(b.address()))
    }
}

pub fn print_bool<W: Write>(out: &mut W, b: &Bool) -> Res {
    let label = if decode_bool(b)? { "TRUE" } else { "FALSE" };
    writeln!(out, "BOOLEAN {}", label)?;
    Ok(())
}

pub fn print_church_numeral<W: Write>(out: &mut W, n: &Numeral) -> Res {
    writeln!(out, "{}", decode(n))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::{and, not};
    use crate::numeral::{church_nat, succ, ZERO};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    type Test = Result<(), TError>;

    fn printed<F: FnOnce(&mut Vec<u8>) -> Res>(f: F) -> Result<String, TError> {
        let mut out = vec![];
        f(&mut out)?;
        Ok(String::from_utf8_lossy(&out).to_string())
    }

    #[test]
    fn prints_canonical_booleans() -> Test {
        assert_eq!(printed(|out| print_bool(out, &TRUE))?, "BOOLEAN TRUE\n");
        assert_eq!(printed(|out| print_bool(out, &FALSE))?, "BOOLEAN FALSE\n");
        Ok(())
    }

    #[test]
    fn derived_booleans_stay_canonical() -> Test {
        assert_eq!(decode_bool(&and(&TRUE, &TRUE))?, true);
        assert_eq!(decode_bool(&not(&TRUE))?, false);
        Ok(())
    }

    #[test]
    fn lookalike_boolean_is_rejected() {
        let lookalike = Bool::new(|x| Arc::new(move |_y: Bool| x.clone()));
        assert!(lookalike.apply(TRUE.clone())(FALSE.clone()).is(&TRUE));
        assert_eq!(
            decode_bool(&lookalike),
            Err(TError::UnrecognizedEncoding(lookalike.address()))
        );
        let mut out = vec![];
        assert!(print_bool(&mut out, &lookalike).is_err());
        assert!(out.is_empty(), "nothing should be written for a rejected value");
    }

    #[test]
    fn prints_numerals() -> Test {
        assert_eq!(printed(|out| print_church_numeral(out, &ZERO))?, "0\n");
        assert_eq!(printed(|out| print_church_numeral(out, &succ(ZERO.clone())))?, "1\n");
        assert_eq!(printed(|out| print_church_numeral(out, &church_nat(42)))?, "42\n");
        Ok(())
    }
}
