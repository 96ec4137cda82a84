/// Numeric element id as stamped on render commands by the layout engine.
///
/// Zero is reserved as the "null id"; [`element_id`] never produces it for a
/// non-pathological key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    pub const NULL: Self = Self(0);

    pub const fn raw(v: u32) -> Self {
        Self(v)
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hash a declared string id the same way the layout engine does.
///
/// This is the single place that knows the engine's hashing scheme; anything
/// that needs to match render commands back to widget ids goes through here.
pub fn element_id(key: &str) -> ElementId {
    element_id_with(key, 0, 0)
}

/// Indexed variant used by the engine for ids declared as `key[offset]`.
pub fn element_id_with(key: &str, offset: u32, seed: u32) -> ElementId {
    let mut base = seed;
    for &b in key.as_bytes() {
        base = base.wrapping_add(b as u32);
        base = base.wrapping_add(base << 10);
        base ^= base >> 6;
    }

    let mut hash = base.wrapping_add(offset);
    hash = hash.wrapping_add(hash << 10);
    hash ^= hash >> 6;

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);

    // The engine reserves 0 as "no id".
    ElementId(hash.wrapping_add(1))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
