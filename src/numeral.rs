use derivative::Derivative;
use lazy_static::lazy_static;
use std::iter;
use std::sync::Arc;

pub type Endo = Arc<dyn Fn(u64) -> u64 + Send + Sync>;

pub type NumeralOp = Arc<dyn Fn(Numeral) -> Numeral + Send + Sync>;

#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Numeral {
    #[derivative(Debug = "ignore")]
    iterate: Arc<dyn Fn(Endo) -> Endo + Send + Sync>,
}

impl Numeral {
    pub fn new<F>(iterate: F) -> Self
    where
        F: Fn(Endo) -> Endo + Send + Sync + 'static,
    {
        Numeral {
            iterate: Arc::new(iterate),
        }
    }

    pub fn apply(&self, f: Endo) -> Endo {
        (self.iterate)(f)
    }
}

impl From<u64> for Numeral {
    fn from(n: u64) -> Self {
        church_nat(n)
    }
}

lazy_static! {
    pub static ref ZERO: Numeral = Numeral::new(|_f| Arc::new(|x: u64| x));
    pub static ref SUCC: NumeralOp = Arc::new(succ);
}

pub fn succ(n: Numeral) -> Numeral {
    Numeral::new(move |f: Endo| -> Endo {
        let n = n.clone();
        Arc::new(move |x: u64| f(n.apply(f.clone())(x)))
    })
}

pub fn church_nat(n: u64) -> Numeral {
    iter::successors(Some(ZERO.clone()), |prev| Some(succ(prev.clone())))
        .nth(n as usize)
        .unwrap_or_else(|| ZERO.clone())
}

// Recursion depth grows with the numeral.
pub fn decode(n: &Numeral) -> u64 {
    n.apply(Arc::new(|x: u64| x + 1))(0)
}
