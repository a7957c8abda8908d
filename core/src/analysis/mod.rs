pub use connectivity::*;
pub use radius::*;

mod connectivity;
mod radius;
