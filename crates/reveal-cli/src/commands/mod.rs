pub mod countdown;
pub mod gate;
