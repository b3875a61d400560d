// Domain layer: the record model plus the declared-only Printable and Color items.

pub mod model;
pub mod ports;
