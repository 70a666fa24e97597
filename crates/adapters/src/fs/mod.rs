mod scanner;
mod store;

pub use scanner::WalkdirScanner;
pub use store::LocalFileStore;
