pub mod auth;
pub mod draft;
pub mod forms;
pub mod groups;

pub use auth::{AuthCommands, handle_auth_command};
pub use draft::{DraftCommands, handle_draft_command};
pub use forms::{FormsCommands, handle_forms_command};
pub use groups::{GroupsCommands, handle_groups_command};
