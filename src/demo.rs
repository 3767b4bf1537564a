use super::boolean::{Bool, AND, FALSE, NOT, OR, TRUE};
use super::cli_options::Options;
use super::errors::TError;
use super::numeral::{church_nat, decode, Numeral, SUCC, ZERO};
use super::pretty_print::{bool_term, numeral_term, show_step, AND_TERM, NOT_TERM, OR_TERM, SUCC_TERM};
use super::printer::{print_bool, print_church_numeral};
use crate::trace;
use std::io::Write;

#[derive(Clone, Debug)]
pub enum Encoded {
    Bool(Bool),
    Numeral(Numeral),
}

#[derive(Clone, Debug)]
pub struct Step {
    pub label: String,
    pub value: Encoded,
}

fn step(label: &str, value: Encoded) -> Step {
    Step {
        label: label.to_string(),
        value,
    }
}

fn b(value: Bool) -> Encoded {
    Encoded::Bool(value)
}

pub fn steps() -> Vec<Step> {
    let t = || TRUE.clone();
    let f = || FALSE.clone();
    vec![
        step("TRUE", b(t())),
        step("FALSE", b(f())),
        step("NOT TRUE", b(NOT(t()))),
        step("NOT FALSE", b(NOT(f()))),
        step("AND FALSE FALSE", b(AND(f())(f()))),
        step("AND TRUE FALSE", b(AND(t())(f()))),
        step("AND FALSE TRUE", b(AND(f())(t()))),
        step("AND TRUE TRUE", b(AND(t())(t()))),
        step("OR FALSE FALSE", b(OR(f())(f()))),
        step("OR TRUE FALSE", b(OR(t())(f()))),
        step("OR FALSE TRUE", b(OR(f())(t()))),
        step("OR TRUE TRUE", b(OR(t())(t()))),
        step("ZERO", Encoded::Numeral(ZERO.clone())),
        step("SUCC ZERO", Encoded::Numeral(SUCC(ZERO.clone()))),
    ]
}

fn operator_term(label: &str) -> Option<&'static str> {
    match label.split_whitespace().next()? {
        "NOT" => Some(NOT_TERM),
        "AND" => Some(AND_TERM),
        "OR" => Some(OR_TERM),
        "SUCC" => Some(SUCC_TERM),
        _ => None,
    }
}

pub fn run<W: Write>(out: &mut W, opts: &Options) -> Result<(), TError> {
    for Step { label, value } in steps() {
        if let Some(op) = operator_term(&label) {
            trace!(opts, 2, "{}", show_step(&label, op));
        }
        match &value {
            Encoded::Bool(value) => {
                trace!(opts, 1, "{}", show_step(&label, &bool_term(value)?));
                print_bool(out, value)?;
            }
            Encoded::Numeral(value) => {
                trace!(opts, 1, "{}", show_step(&label, &numeral_term(value)));
                print_church_numeral(out, value)?;
            }
        }
    }
    if opts.debug_level > 1 {
        let three = church_nat(3);
        trace!(opts, 2, "THREE => {} decodes to {}", numeral_term(&three), decode(&three));
    }
    Ok(())
}
