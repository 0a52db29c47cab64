//! Type names every host installation registers.
//!
//! Custom types are added by the host at runtime; these are the ones that
//! exist before any extension runs.

use lazy_static::lazy_static;

use crate::model::TypeVocabulary;

pub const POST: &str = "post";
pub const PAGE: &str = "page";
pub const ATTACHMENT: &str = "attachment";
pub const REVISION: &str = "revision";
pub const NAV_MENU_ITEM: &str = "nav_menu_item";
pub const CUSTOM_CSS: &str = "custom_css";
pub const CUSTOMIZE_CHANGESET: &str = "customize_changeset";
pub const OEMBED_CACHE: &str = "oembed_cache";
pub const USER_REQUEST: &str = "user_request";
pub const WP_BLOCK: &str = "wp_block";

/// All built-in type names, in registration order.
pub const BUILTIN_TYPE_NAMES: &[&str] = &[
    POST,
    PAGE,
    ATTACHMENT,
    REVISION,
    NAV_MENU_ITEM,
    CUSTOM_CSS,
    CUSTOMIZE_CHANGESET,
    OEMBED_CACHE,
    USER_REQUEST,
    WP_BLOCK,
];

lazy_static! {
    static ref BUILTIN_VOCABULARY: TypeVocabulary = {
        let mut vocabulary = TypeVocabulary::new();
        for name in BUILTIN_TYPE_NAMES {
            vocabulary
                .insert(*name)
                .expect("built-in type names are valid");
        }
        vocabulary
    };
}

/// Returns the vocabulary of built-in type names.
pub fn builtin_vocabulary() -> &'static TypeVocabulary {
    &BUILTIN_VOCABULARY
}
