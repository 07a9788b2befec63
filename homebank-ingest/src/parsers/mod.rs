pub mod barclaycard;
pub mod moneywallet;
