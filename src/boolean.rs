use derivative::Derivative;
use lazy_static::lazy_static;
use std::sync::Arc;

pub type Selector = Arc<dyn Fn(Bool) -> Bool + Send + Sync>;

pub type UnaryOp = Arc<dyn Fn(Bool) -> Bool + Send + Sync>;
pub type BinaryOp = Arc<dyn Fn(Bool) -> UnaryOp + Send + Sync>;

// Clones share the closure, and with it the identity.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Bool {
    #[derivative(Debug = "ignore")]
    select: Arc<dyn Fn(Bool) -> Selector + Send + Sync>,
}

impl Bool {
    pub fn new<F>(select: F) -> Self
    where
        F: Fn(Bool) -> Selector + Send + Sync + 'static,
    {
        Bool {
            select: Arc::new(select),
        }
    }

    pub fn apply(&self, first: Bool) -> Selector {
        (self.select)(first)
    }

    pub fn is(&self, other: &Bool) -> bool {
        Arc::ptr_eq(&self.select, &other.select)
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.select) as *const () as usize
    }
}

lazy_static! {
    pub static ref TRUE: Bool = Bool::new(|x| Arc::new(move |_y: Bool| x.clone()));
    pub static ref FALSE: Bool = Bool::new(|_x| Arc::new(|y: Bool| y));

    pub static ref NOT: UnaryOp = Arc::new(|b: Bool| b.apply(FALSE.clone())(TRUE.clone()));
    pub static ref AND: BinaryOp = Arc::new(|p: Bool| -> UnaryOp {
        Arc::new(move |q: Bool| p.apply(q)(FALSE.clone()))
    });
    pub static ref OR: BinaryOp = Arc::new(|p: Bool| -> UnaryOp {
        Arc::new(move |q: Bool| p.apply(TRUE.clone())(q))
    });
}

pub fn not(b: &Bool) -> Bool {
    NOT(b.clone())
}

pub fn and(p: &Bool, q: &Bool) -> Bool {
    AND(p.clone())(q.clone())
}

pub fn or(p: &Bool, q: &Bool) -> Bool {
    OR(p.clone())(q.clone())
}
