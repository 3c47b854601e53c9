use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Taka per consumed unit.
pub type Rate = Quantity<-1, 1>;

impl Display for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tk {:.2}/unit", self.0)
    }
}

impl Debug for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}Tk/u", self.0)
    }
}
