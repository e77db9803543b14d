mod components;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod providers;
pub use providers::Providers;

mod users;
pub use users::Users;
