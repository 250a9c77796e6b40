mod about;
mod archives;
mod home;
mod not_found;

pub use about::About;
pub use archives::Archives;
pub use home::Home;
pub use not_found::NotFound;
