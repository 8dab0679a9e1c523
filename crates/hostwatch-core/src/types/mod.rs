mod account;
mod finding;
mod process;
mod report;
mod startup;

pub use account::*;
pub use finding::*;
pub use process::*;
pub use report::*;
pub use startup::*;
