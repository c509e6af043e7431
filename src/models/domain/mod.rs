pub mod question;
pub mod timestamp;
pub mod topic;
pub mod user;
pub use question::{Difficulty, NewQuestion, Question};
pub use topic::Topic;
pub use user::{Identity, ProgressEntry, User};
