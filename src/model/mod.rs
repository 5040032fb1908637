pub mod attendance;
pub mod role;
pub mod view;
pub mod worker;
