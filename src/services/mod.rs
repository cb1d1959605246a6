pub mod acquisition;
pub mod classifier;

pub use acquisition::ImageAcquisition;
pub use classifier::{Classifier, RemoteClassifier};
