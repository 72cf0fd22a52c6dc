use mixkit_types::{Object, Value};

use crate::merge::extend;

/// Chainable holder for a target object.
///
/// Each call to [`Extender::extend`] replaces the held target with the result
/// of extending it by the source, then hands the extender back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extender {
    target: Object,
}

impl Extender {
    pub fn new(target: Object) -> Self {
        Self { target }
    }

    /// Shallow-copy `source` onto the held target.
    pub fn extend(&mut self, source: &Object) -> &mut Self {
        let mut current = std::mem::take(&mut self.target);
        extend(&mut current, [source]);
        self.target = current;
        self
    }

    /// The current target.
    pub fn target(&self) -> &Object {
        &self.target
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.target)
    }
}
