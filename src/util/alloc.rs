use std::cell::RefCell;
use std::rc::Rc;

use crate::Alternative;

/// A zero-sized alternative, which has an empty string form.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

impl Alternative for ZeroSizedType {
    fn to_variant_string(&self) -> String {
        String::new()
    }
}

/// A value which increments a shared counter whenever an instance is dropped, for checking that
/// a union drops its contents exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Returns the number of drops counted so far, without resetting it.
    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

impl Alternative for CountedDrop {
    fn to_variant_string(&self) -> String {
        format!("dropped {}", self.count())
    }
}
