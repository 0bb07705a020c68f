pub mod basis;
pub mod decomposition;
pub mod loss;
pub mod lstsq;
pub mod projection;
pub mod random;
pub mod rref;
pub mod similarity;
mod utils;

pub use basis::{BasisError, ColumnBasis};
pub use rref::RowEchelon;
pub use utils::Direction;
pub use utils::FloatOps;
