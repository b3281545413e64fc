//! CLI command handlers, one file per command (list commands share `lists.rs`).

mod apply;
mod create;
mod delete;
mod jobs;
mod lists;
mod login;
mod logout;
mod save;
mod show;
mod table;
mod update;

pub use apply::{run_apply, ApplyArgs};
pub use create::{run_create, CreateArgs};
pub use delete::run_delete;
pub use jobs::run_jobs;
pub use lists::{run_applied, run_orgs, run_saved, run_types};
pub use login::run_login;
pub use logout::run_logout;
pub use save::run_save;
pub use show::run_show;
pub use update::{run_update, UpdateArgs};
