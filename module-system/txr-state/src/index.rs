/// Capability for types usable as a storage path key.
///
/// An implementor occupies a fixed number of segments (usually one) in the
/// hierarchical key layout of an indexed store. [`StorageIndex::to_path`]
/// prepends this value's segments to an existing tail;
/// [`StorageIndex::of_path`] is the inverse over a complete path.
pub trait StorageIndex: Sized {
    /// Number of path segments occupied by this index type.
    const PATH_LENGTH: usize = 1;

    /// Prepends this value's path segments to `tail`.
    fn to_path(&self, tail: Vec<String>) -> Vec<String>;

    /// Recovers an index value from a complete path.
    ///
    /// Returns `None` if the path does not have exactly
    /// [`StorageIndex::PATH_LENGTH`] segments or a segment fails to decode.
    fn of_path(path: &[String]) -> Option<Self>;
}
