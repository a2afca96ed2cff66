mod task;
pub use task::{Task, TaskStatus, TASK_SCHEMA};

mod user;
pub use user::{User, USER_SCHEMA};
