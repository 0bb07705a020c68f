use std::fmt::{Debug, Display};

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Axis selector for operations that can run over either rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

/// Bundle of the float bounds the generic modules need.
pub trait FloatOps:
    Float + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
}

impl<T> FloatOps for T where
    T: Float + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
}
