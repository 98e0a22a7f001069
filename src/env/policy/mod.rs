//! Policy trait and implementations.

pub mod pursuit;
pub mod random;
pub mod trait_;

pub use pursuit::PursuitPolicy;
pub use random::RandomPolicy;
pub use trait_::Policy;
