use thiserror::Error;

pub type Result<T> = std::result::Result<T, GtaskError>;

#[derive(Error, Debug)]
pub enum GtaskError {
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit decode error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    Decode(#[from] Box<gix::objs::decode::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Push failed: {0}")]
    Push(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for GtaskError {
    fn from(err: gix::discover::Error) -> Self {
        GtaskError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GtaskError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GtaskError::RefFind(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GtaskError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GtaskError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GtaskError {
    fn from(err: gix::object::commit::Error) -> Self {
        GtaskError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GtaskError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GtaskError::Decode(Box::new(err))
    }
}
