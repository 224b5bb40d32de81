// -----------------------------------------------------------------------------
// Reserved names
//
// These are the non-standard conventions a consumer of emitted documents must
// tolerate. They are written verbatim, never transformed by naming policies.

/// Property carrying a type tag when [`TypeTagPolicy`] enables it.
pub const TYPE_TAG_PROPERTY: &str = "$Type";

/// Property carrying an object's identity key under
/// [`CircularRefPolicy::WriteIdentity`].
pub const IDENTITY_PROPERTY: &str = "$HashCode";

/// Suffix appended to a property's name when its value collided with an
/// already-visited value under [`CircularRefPolicy::WriteIdentity`].
pub const IDENTITY_REF_SUFFIX: &str = "$HashCodeRef";

/// Suffix appended to a property's name when its value exceeded the depth
/// limit under [`MaxDepthPolicy::WriteDepth`].
pub const MAX_DEPTH_SUFFIX: &str = "$MaxDepth";

/// Literal string emitted for values of undetermined kind.
pub const UNDEFINED_MARKER: &str = "$Undefined";

// -----------------------------------------------------------------------------
// CircularRefPolicy

/// What to do when a value that is already on record in the traversal's
/// visited set is encountered again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CircularRefPolicy {
    /// Emit nothing for the colliding value.
    #[default]
    Suppress,
    /// Emit the value anyway and keep descending.
    ///
    /// On a truly cyclic graph this recurses until the depth guard fires; if
    /// that guard is also set to write values, the traversal can exhaust the
    /// call stack. This is a documented hazard, not a guarded condition.
    WriteValue,
    /// Rename the property with [`IDENTITY_REF_SUFFIX`] and write the
    /// colliding value's identity key as a string.
    ///
    /// Under this policy every emitted object also carries an
    /// [`IDENTITY_PROPERTY`] with its own key, written unconditionally
    /// rather than only on collision, so a later reference marker always
    /// has a target.
    WriteIdentity,
}

// -----------------------------------------------------------------------------
// MaxDepthPolicy

/// What to do when a container would open beyond the configured depth limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaxDepthPolicy {
    /// Emit nothing for the too-deep value.
    #[default]
    Suppress,
    /// Emit the value anyway. The guard detects excess depth, it does not
    /// prevent it; pathological inputs can still exhaust the call stack.
    WriteValue,
    /// Rename the property with [`MAX_DEPTH_SUFFIX`] and write the current
    /// nesting depth as a string, descending no further.
    WriteDepth,
}

// -----------------------------------------------------------------------------
// TypeTagPolicy

/// Whether emitted objects carry a [`TYPE_TAG_PROPERTY`] identifying their
/// runtime type, enabling a reader to reconstruct the concrete type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeTagPolicy {
    /// No type tags.
    #[default]
    Suppress,
    /// Tag with the short type identifier, stripped of module path and any
    /// build metadata.
    ShortName,
    /// Tag with the fully qualified type path.
    FullName,
}
