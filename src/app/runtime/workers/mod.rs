/// Auxiliary background workers (tick, connectivity, terminal input).
pub mod auxiliary;
