pub mod dimensions;
pub mod dispatch;
pub mod facts;
pub mod nearest;
pub mod rotation;
pub mod schema;
pub mod shared;
pub mod sources;
pub mod top;
pub mod weekly;
