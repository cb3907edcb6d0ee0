pub mod dealer;
pub mod session;
