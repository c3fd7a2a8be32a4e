mod home;
mod login;
mod logout;
mod not_found;

pub use home::Home;
pub use login::Login;
pub use logout::Logout;
pub use not_found::NotFound;
