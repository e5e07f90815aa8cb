mod dashboard;
mod error;
mod profile;
pub mod sign_in;
pub mod sign_up;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use profile::ProfilePage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
