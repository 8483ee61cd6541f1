//! Database initialization and the submissions collection

pub mod init;
pub mod submissions;

pub use init::{create_schema, init_database};
pub use submissions::{
    count_submissions, get_submission, insert_submission, StoredSubmission, SUBMISSIONS_COLLECTION,
};
