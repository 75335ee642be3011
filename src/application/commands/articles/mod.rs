mod create;
mod delete;
mod refresh;
mod service;
mod update;

pub use create::CreateRegistrationCommand;
pub use delete::DeleteRegistrationCommand;
pub use refresh::RefreshArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateRegistrationCommand;
