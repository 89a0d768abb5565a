//! Error type shared by the whole injection path.

/// Value the old injector API returned when the store rejected a row.
pub const FAILED_INSERT: i32 = -1;

pub type Result<T> = ::std::result::Result<T, InjectError>;

#[derive(Debug, Fail)]
pub enum InjectError {
    /// The store executed the insert but handed back no generated id.
    #[fail(display = "insert into {} (part {}) returned no id", table, position)]
    InsertFailed {
        table: &'static str,
        position: usize
    },
    #[fail(display = "message needs {} parts; at most {} are supported", parts, max)]
    TooManyParts {
        parts: usize,
        max: usize
    },
    #[fail(display = "no segments to inject")]
    NoSegments,
    #[fail(display = "part {} has no first part to link to", position)]
    MissingPrimary {
        position: usize
    },
    #[fail(display = "database error: {}", _0)]
    Database(#[cause] ::diesel::result::Error),
    #[fail(display = "couldn't get a db connection: {}", _0)]
    Pool(#[cause] ::r2d2::Error),
    #[fail(display = "invalid configuration: {}", _0)]
    Config(String)
}
impl From<::diesel::result::Error> for InjectError {
    fn from(e: ::diesel::result::Error) -> Self {
        InjectError::Database(e)
    }
}
impl From<::r2d2::Error> for InjectError {
    fn from(e: ::r2d2::Error) -> Self {
        InjectError::Pool(e)
    }
}
impl InjectError {
    pub fn is_insert_failure(&self) -> bool {
        match *self {
            InjectError::InsertFailed { .. } => true,
            _ => false
        }
    }
    /// Collapses a rejected insert into [`FAILED_INSERT`], the way callers of
    /// the sentinel-returning API expect. Every other error is passed through.
    pub fn into_sentinel(res: Result<i32>) -> Result<i32> {
        match res {
            Err(ref e) if e.is_insert_failure() => Ok(FAILED_INSERT),
            other => other
        }
    }
}
