use std::fmt;
use std::hash::BuildHasher;

use foldhash::fast::FixedState;

// -----------------------------------------------------------------------------
// IdentityKey

/// A key that identifies one live value instance, used for cycle detection.
///
/// The key pairs the value's data address with a digest of its type path.
/// The address alone is not enough in Rust: a struct and its first field
/// occupy the same address, so two nested values of *different* types can
/// alias. The type component keeps them apart, while two paths to the *same*
/// value (through references, boxes, or reference-counted pointers) still
/// produce equal keys because wrapper implementations forward identity to
/// their referent.
///
/// Keys compare by their full contents, so two distinct live values never
/// collide. The [`Display`](fmt::Display) form mixes both components into a
/// single hexadecimal token for use as marker text in emitted documents.
///
/// A key is only meaningful while the value it was taken from is alive; keys
/// must not be retained across traversals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    addr: usize,
    ty: u64,
}

impl IdentityKey {
    /// Builds a key from a data address and the owning type's path.
    ///
    /// The digest uses a fixed hasher state so the same type path always
    /// contributes the same component within a process run.
    pub fn from_parts(addr: usize, type_path: &str) -> Self {
        let ty = FixedState::default().hash_one(type_path);
        Self { addr, ty }
    }

    /// The data address component of this key.
    #[inline]
    pub fn addr(&self) -> usize {
        self.addr
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fibonacci mixing spreads the address bits before folding in the
        // type digest; the display form is a marker token, not the key.
        let mixed = (self.addr as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ self.ty;
        write!(f, "{mixed:016x}")
    }
}

// -----------------------------------------------------------------------------
// Tests
