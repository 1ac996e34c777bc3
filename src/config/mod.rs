mod policy;

pub use policy::{
    DEFAULT_CODE_ROOTS, DEFAULT_DOCS_DIR, DOCUMENT_SUFFIX, LintPolicy, MAX_CODE_DIR_DEPTH,
};
