//! Queue collections rebuilt around a fixed-capacity ring.

pub mod queue;
