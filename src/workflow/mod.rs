pub mod batch_submit;

pub use batch_submit::{synthetic_filename, BatchSubmitter, SubmitStats};
