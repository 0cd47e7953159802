pub mod booking_flow;
pub mod main_flow;
