use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("You cannot use the same parameter name \"{0}\" twice within a single path (\"{1}\").")]
    DuplicateParam(String, String),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error)]
#[error("failed to decode param \"{name}\"")]
pub struct DecodeError {
    pub name: Box<str>,
}

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Catch-all must be the last part of the URL.")]
    CatchAllNotLast,
    #[error("Segment names may not start or end with extra brackets ('{0}').")]
    ExtraBrackets(String),
    #[error("Segment names may not start with erroneous periods ('{0}').")]
    ErroneousPeriod(String),
    #[error("You cannot use different slug names for the same dynamic path ('{0}' !== '{1}').")]
    DifferentSlugNames(String, String),
    #[error("You cannot have the same slug name \"{0}\" repeat within a single dynamic path.")]
    RepeatingSlugName(String),
    #[error("You cannot have the slug names \"{0}\" and \"{1}\" differ only by non-word symbols within a single dynamic path.")]
    DifferingNonWordSymbols(String, String),
    #[error("You cannot use both a required and optional catch-all route at the same level (\"[...{0}]\" and \"{1}\" ).")]
    RequiredAndOptionalCatchAll(String, String),
    #[error("You cannot use both an optional and required catch-all route at the same level (\"[[...{0}]]\" and \"{1}\").")]
    OptionalAndRequiredCatchAll(String, String),
    #[error("Optional route parameters are not yet supported (\"{0}\").")]
    OptionalParametersNotSupported(String),
    #[error("You cannot define a route with the same specificity as an optional catch-all route (\"{0}\" and \"{1}[[...{2}]]\").")]
    SameSpecificityAsOptionalCatchAll(String, String, String),
}
