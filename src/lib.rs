pub mod builders;
pub mod scenarios;
pub mod sizes;
