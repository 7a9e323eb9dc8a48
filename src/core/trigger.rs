/// Remembers which targets have already fired so a batch of intersection
/// entries can hold several records for one target and still fire it once.
#[derive(Clone, Debug)]
pub struct FireOnce<T> {
    fired: Vec<T>,
}

impl<T> Default for FireOnce<T> {
    fn default() -> Self {
        Self { fired: Vec::new() }
    }
}

impl<T: PartialEq> FireOnce<T> {
    /// `true` only for the first intersecting entry of each target.
    pub fn admit(&mut self, target: T, intersecting: bool) -> bool {
        if !intersecting || self.fired.contains(&target) {
            return false;
        }
        self.fired.push(target);
        true
    }

    pub fn has_fired(&self, target: &T) -> bool {
        self.fired.contains(target)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
