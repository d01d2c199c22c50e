pub mod home;
pub mod shifts;

pub use home::HomePage;
pub use shifts::ShiftsPage;
