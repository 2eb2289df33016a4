/// Database access layer
pub mod todo_repo;

pub use todo_repo::{StoreError, TodoStore};
