//! Size limits imposed by the host that stores link terms.

/// Maximum byte length of a stored link term.
///
/// Terms are kept in the host's term name and slug columns, which are
/// 200 characters wide. Longer terms are truncated by the host and would no
/// longer decode to the same participants.
pub const MAX_TOKEN_LEN: usize = 200;

/// Maximum byte length of a registered type name.
pub const MAX_TYPE_NAME_LEN: usize = 20;

/// Name of the hidden storage category that holds link terms.
pub const LINK_TAXONOMY: &str = "hidden_post_to_post_link";
