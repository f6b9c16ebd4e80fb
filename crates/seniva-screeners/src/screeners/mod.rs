pub mod gad7;
pub mod gds15;
pub mod phq9;
pub mod psqi;
pub mod pss4;
pub mod who5;
